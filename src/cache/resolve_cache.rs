//! 类型解析缓存实现
//!
//! 基于 moka 同步缓存：并发未命中时按键加锁，同一键的重算至多执行一次。
//! 统计计数用于观察命中率与重算次数；重算次数即未命中次数。

use super::config::CacheConfig;
use super::traits::ResolutionCache;
use crate::core::types::DataType;
use crate::tree::NodeKey;
use moka::sync::Cache;
use std::sync::atomic::{AtomicU64, Ordering};

/// 类型解析缓存
///
/// 以 [`NodeKey`] 为键记忆化表达式类型。键中含结构修订号，
/// 树被编辑后旧条目自然不再命中；[`ResolutionCache::invalidate_all`]
/// 供编辑子系统在需要回收存储时整体清空。
pub struct TypeResolveCache {
    entries: Cache<NodeKey, Option<DataType>>,
    enabled: bool,
    lookups: AtomicU64,
    computations: AtomicU64,
}

impl TypeResolveCache {
    /// 按配置创建缓存
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: Cache::new(config.type_cache_capacity as u64),
            enabled: config.enabled,
            lookups: AtomicU64::new(0),
            computations: AtomicU64::new(0),
        }
    }

    /// 查询次数
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// 重算次数（即未命中次数）
    pub fn computations(&self) -> u64 {
        self.computations.load(Ordering::Relaxed)
    }

    /// 命中次数
    pub fn hits(&self) -> u64 {
        self.lookups().saturating_sub(self.computations())
    }

    /// 未命中次数
    pub fn misses(&self) -> u64 {
        self.computations()
    }

    /// 命中率
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.hits() as f64 / lookups as f64
        }
    }

    /// 重置统计信息
    pub fn reset_stats(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.computations.store(0, Ordering::Relaxed);
    }
}

impl Default for TypeResolveCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl ResolutionCache for TypeResolveCache {
    fn resolve_type<F>(&self, key: NodeKey, compute: F) -> Option<DataType>
    where
        F: FnOnce() -> Option<DataType>,
    {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !self.enabled {
            self.computations.fetch_add(1, Ordering::Relaxed);
            return compute();
        }
        self.entries.get_with(key, || {
            self.computations.fetch_add(1, Ordering::Relaxed);
            compute()
        })
    }

    fn invalidate_all(&self) {
        log::debug!("invalidating all cached expression types");
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }

    fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        self.entries.entry_count() as usize
    }
}
