//! 统一错误处理 for 语法树核心
//!
//! ## 设计理念
//!
//! 1. **按类别分流**：
//!    - 结构完整性破坏（操作符 token 缺失或重复、角色查询的父子关系不匹配）
//!      表示树已经损坏，直接断言失败，绝不作为 Result 返回
//!    - 类型层面的不确定（不完整表达式、操作数类型不兼容）用 Option 表达，
//!      沿返回值向上传播，不是错误
//!    - 只有可恢复的调用方错误（编辑操作用法不当）才进入本模块的错误类型
//!
//! 2. **统一接口**：`SyntaxResult<T>` 提供统一的返回类型，简化错误传播

use crate::tree::NodeId;
use thiserror::Error;

/// 语法树编辑错误
///
/// 涵盖结构编辑操作中可恢复的用法错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("子节点位置越界: {position}，共 {len} 个子节点")]
    PositionOutOfBounds { position: usize, len: usize },

    #[error("节点 {child:?} 不是 {parent:?} 的子节点")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("不能把节点 {0:?} 挂接到自身或其后代之下")]
    CyclicAttachment(NodeId),

    #[error("节点 {0:?} 已挂接到某个父节点")]
    AlreadyAttached(NodeId),
}

/// 统一的结果类型
pub type SyntaxResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SyntaxKind;
    use crate::tree::SyntaxTree;

    #[test]
    fn test_error_display() {
        let err = TreeError::PositionOutOfBounds { position: 5, len: 3 };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('3'));

        let mut tree = SyntaxTree::new(SyntaxKind::BinaryExpression);
        let node = tree.orphan_node(SyntaxKind::LiteralExpression);
        let err = TreeError::CyclicAttachment(node);
        assert!(err.to_string().contains("挂接"));
    }
}
