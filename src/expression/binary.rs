//! 二元表达式节点视图
//!
//! 提供与存储布局无关的、按语义角色访问操作数与操作符 token 的能力，
//! 以及经解析缓存记忆化的结果类型推导。角色由位置与种类共同决定：
//! 第一个子节点无条件是左操作数；最后一个子节点仅当是表达式种类时
//! 才是右操作数（缺失表示编辑中的不完整输入）；操作符 token 必须在
//! 子节点中恰好出现一次，缺失或重复都按结构破坏处理。

use crate::cache::ResolutionCache;
use crate::core::types::{
    BinaryOperator, DataType, SyntaxKind, BINARY_OPERATOR_TOKENS, EXPRESSION_KINDS,
};
use crate::expression::combiner::TypeCombiner;
use crate::expression::node::{ExpressionNode, TypedExpression};
use crate::tree::{NodeId, SyntaxTree};

/// 子节点语义角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRole {
    /// 左操作数
    LeftOperand,
    /// 操作符 token
    OperatorToken,
    /// 右操作数
    RightOperand,
}

/// 二元表达式视图
#[derive(Debug, Clone, Copy)]
pub struct BinaryExpression<'a> {
    tree: &'a SyntaxTree,
    node: NodeId,
}

impl<'a> BinaryExpression<'a> {
    /// 将节点转为二元表达式视图；种类不符返回 None
    pub fn cast(tree: &'a SyntaxTree, node: NodeId) -> Option<Self> {
        (tree.kind(node) == SyntaxKind::BinaryExpression).then_some(Self { tree, node })
    }

    /// 底层节点标识
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// 所属语法树
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// 按语义角色查找子节点
    ///
    /// 左操作数取第一个子节点，不检查其种类；右操作数仅当最后一个
    /// 子节点是表达式种类时存在。只有一个子节点时首尾重合，该子节点
    /// 只解析为左操作数。
    pub fn child_by_role(&self, role: ChildRole) -> Option<NodeId> {
        match role {
            ChildRole::LeftOperand => self.tree.first_child(self.node),
            ChildRole::RightOperand => {
                let last = self.tree.last_child(self.node)?;
                if Some(last) == self.tree.first_child(self.node) {
                    return None;
                }
                EXPRESSION_KINDS
                    .contains(self.tree.kind(last))
                    .then_some(last)
            }
            ChildRole::OperatorToken => Some(self.find_operator_token()),
        }
    }

    /// 判定子节点在本表达式中的语义角色
    ///
    /// 前置条件：child 必须是本节点的直接子节点，违反即断言失败
    /// （表示调用方拿错了节点，属于编程错误而非输入错误）。
    /// 表达式种类的子节点按首/尾位置解析为左/右操作数，其余位置
    /// 没有角色；操作符种类的子节点解析为操作符 token。
    pub fn role_of(&self, child: NodeId) -> Option<ChildRole> {
        assert_eq!(
            self.tree.parent(child),
            Some(self.node),
            "role_of requires a direct child of this binary expression"
        );
        let kind = self.tree.kind(child);
        if EXPRESSION_KINDS.contains(kind) {
            if self.tree.first_child(self.node) == Some(child) {
                return Some(ChildRole::LeftOperand);
            }
            if self.tree.last_child(self.node) == Some(child) {
                return Some(ChildRole::RightOperand);
            }
            return None;
        }
        if BINARY_OPERATOR_TOKENS.contains(kind) {
            return Some(ChildRole::OperatorToken);
        }
        None
    }

    /// 左操作数：第一个子节点，二元表达式结构上必定存在
    pub fn left_operand(&self) -> NodeId {
        self.tree
            .first_child(self.node)
            .expect("binary expression always has a left operand")
    }

    /// 右操作数；不完整表达式（如编辑中的悬尾操作符）返回 None
    pub fn right_operand(&self) -> Option<NodeId> {
        self.child_by_role(ChildRole::RightOperand)
    }

    /// 操作符 token；缺失或重复视为结构破坏，直接断言失败
    pub fn operator_token(&self) -> NodeId {
        self.find_operator_token()
    }

    /// 操作符 token 的种类映射为二元操作符
    pub fn operator(&self) -> BinaryOperator {
        let token = self.operator_token();
        BinaryOperator::from_token_kind(self.tree.kind(token))
            .expect("operator token kind is a member of the binary operator set")
    }

    fn find_operator_token(&self) -> NodeId {
        let mut found = None;
        for &child in self.tree.children(self.node) {
            if BINARY_OPERATOR_TOKENS.contains(self.tree.kind(child)) {
                assert!(
                    found.is_none(),
                    "binary expression {:?} has more than one operator token",
                    self.node
                );
                found = Some(child);
            }
        }
        found.unwrap_or_else(|| {
            panic!(
                "binary expression {:?} is missing its operator token",
                self.node
            )
        })
    }

    /// 缓存未命中时的重算逻辑
    ///
    /// 右操作数缺失时类型直接未知，不读取操作符；否则递归解析两侧
    /// 操作数类型（操作数可能是任意表达式种类，包括嵌套的二元表达式），
    /// 再交给类型合成器。
    fn compute_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType> {
        let right = self.right_operand()?;
        let left = self.left_operand();
        let left_type =
            ExpressionNode::cast(self.tree, left).and_then(|expr| expr.expression_type(cache));
        let right_type =
            ExpressionNode::cast(self.tree, right).and_then(|expr| expr.expression_type(cache));
        TypeCombiner::combine(left_type.as_ref(), right_type.as_ref(), self.operator())
    }
}

impl TypedExpression for BinaryExpression<'_> {
    fn expression_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType> {
        cache.resolve_type(self.tree.node_key(self.node), || self.compute_type(cache))
    }
}
