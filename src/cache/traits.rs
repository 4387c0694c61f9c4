//! 解析缓存特征定义
//!
//! 类型求值通过窄接口消费缓存：按节点标识 compute-if-absent。
//! 失效由树编辑子系统驱动（结构修订号换代或整体失效），
//! 本层只负责查询与重算。

use crate::core::types::DataType;
use crate::tree::NodeKey;

/// 解析缓存特征
pub trait ResolutionCache {
    /// 查询节点的缓存类型；未命中时执行 compute 并缓存其结果
    ///
    /// 实现必须保证并发未命中时同一键的重算至多执行一次，
    /// 并发调用方要么看到完整的计算结果，要么恰好触发一次计算。
    fn resolve_type<F>(&self, key: NodeKey, compute: F) -> Option<DataType>
    where
        F: FnOnce() -> Option<DataType>;

    /// 使全部缓存条目失效
    fn invalidate_all(&self);

    /// 当前条目数
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
