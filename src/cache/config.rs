//! 缓存配置
//!
//! 提供不同运行环境下的缓存容量预设。

use serde::{Deserialize, Serialize};

/// 缓存配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 是否启用缓存；关闭后每次查询都重算
    pub enabled: bool,
    /// 类型缓存容量（条目数）
    pub type_cache_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            type_cache_capacity: 10_000,
        }
    }
}

impl CacheConfig {
    /// 开发环境配置
    pub fn development() -> Self {
        Self {
            enabled: true,
            type_cache_capacity: 1_000,
        }
    }

    /// 生产环境配置
    pub fn production() -> Self {
        Self {
            enabled: true,
            type_cache_capacity: 100_000,
        }
    }

    /// 测试环境配置
    pub fn testing() -> Self {
        Self {
            enabled: true,
            type_cache_capacity: 100,
        }
    }

    /// 关闭缓存的配置
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            type_cache_capacity: 0,
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.type_cache_capacity == 0 {
            return Err("启用缓存时 type_cache_capacity 必须大于 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_presets() {
        assert_eq!(CacheConfig::development().type_cache_capacity, 1_000);
        assert_eq!(CacheConfig::production().type_cache_capacity, 100_000);
        assert_eq!(CacheConfig::testing().type_cache_capacity, 100);
        assert!(!CacheConfig::disabled().enabled);
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let mut config = CacheConfig::default();
        config.type_cache_capacity = 0;
        assert!(config.validate().is_err());

        // 关闭缓存时容量为 0 是合法的
        assert!(CacheConfig::disabled().validate().is_ok());
    }
}
