//! 表达式节点视图与跨种类类型解析
//!
//! 视图是对 arena 节点的按种类校验过的借用窗口，自身不持有存储。
//! 不同表达式种类通过枚举变体分发，避免动态分发开销；所有视图共享
//! [`TypedExpression`] 契约，使操作数可以跨种类递归解析类型。

use crate::cache::ResolutionCache;
use crate::core::types::{DataType, SyntaxKind, EXPRESSION_KINDS, LITERAL_TOKENS};
use crate::expression::binary::BinaryExpression;
use crate::tree::{NodeId, SyntaxTree};

/// 可解析类型的表达式契约
///
/// 所有能作为操作数出现的节点种类都实现本特征。类型不可判定
/// （不完整表达式、操作数类型不兼容、名称未解析）时返回 None，
/// 这是正常状态而非错误。
pub trait TypedExpression {
    /// 经解析缓存记忆化的表达式类型
    fn expression_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType>;
}

/// 表达式节点（按种类分发的视图枚举）
#[derive(Debug, Clone, Copy)]
pub enum ExpressionNode<'a> {
    Binary(BinaryExpression<'a>),
    Literal(LiteralExpression<'a>),
    Paren(ParenExpression<'a>),
    Identifier(IdentifierExpression<'a>),
}

impl<'a> ExpressionNode<'a> {
    /// 将任意节点转为表达式视图；非表达式种类返回 None
    pub fn cast(tree: &'a SyntaxTree, node: NodeId) -> Option<Self> {
        match tree.kind(node) {
            SyntaxKind::BinaryExpression => {
                BinaryExpression::cast(tree, node).map(ExpressionNode::Binary)
            }
            SyntaxKind::LiteralExpression => {
                LiteralExpression::cast(tree, node).map(ExpressionNode::Literal)
            }
            SyntaxKind::ParenExpression => {
                ParenExpression::cast(tree, node).map(ExpressionNode::Paren)
            }
            SyntaxKind::IdentifierExpression => {
                IdentifierExpression::cast(tree, node).map(ExpressionNode::Identifier)
            }
            _ => None,
        }
    }

    /// 底层节点标识
    pub fn node(&self) -> NodeId {
        match self {
            ExpressionNode::Binary(e) => e.node(),
            ExpressionNode::Literal(e) => e.node(),
            ExpressionNode::Paren(e) => e.node(),
            ExpressionNode::Identifier(e) => e.node(),
        }
    }

    /// 节点种类
    pub fn kind(&self) -> SyntaxKind {
        match self {
            ExpressionNode::Binary(_) => SyntaxKind::BinaryExpression,
            ExpressionNode::Literal(_) => SyntaxKind::LiteralExpression,
            ExpressionNode::Paren(_) => SyntaxKind::ParenExpression,
            ExpressionNode::Identifier(_) => SyntaxKind::IdentifierExpression,
        }
    }
}

impl TypedExpression for ExpressionNode<'_> {
    fn expression_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType> {
        match self {
            ExpressionNode::Binary(e) => e.expression_type(cache),
            ExpressionNode::Literal(e) => e.expression_type(cache),
            ExpressionNode::Paren(e) => e.expression_type(cache),
            ExpressionNode::Identifier(e) => e.expression_type(cache),
        }
    }
}

/// 字面量表达式视图
#[derive(Debug, Clone, Copy)]
pub struct LiteralExpression<'a> {
    tree: &'a SyntaxTree,
    node: NodeId,
}

impl<'a> LiteralExpression<'a> {
    /// 将节点转为字面量表达式视图；种类不符返回 None
    pub fn cast(tree: &'a SyntaxTree, node: NodeId) -> Option<Self> {
        (tree.kind(node) == SyntaxKind::LiteralExpression).then_some(Self { tree, node })
    }

    /// 底层节点标识
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// 字面量 token：第一个字面量种类的子节点
    pub fn literal_token(&self) -> Option<NodeId> {
        self.tree
            .children(self.node)
            .iter()
            .copied()
            .find(|&child| LITERAL_TOKENS.contains(self.tree.kind(child)))
    }

    fn compute_type(&self) -> Option<DataType> {
        let token = self.literal_token()?;
        match self.tree.kind(token) {
            SyntaxKind::IntegerLiteral => Some(DataType::Int32),
            SyntaxKind::LongLiteral => Some(DataType::Int64),
            SyntaxKind::FloatLiteral => Some(DataType::Float32),
            SyntaxKind::DoubleLiteral => Some(DataType::Float64),
            SyntaxKind::BooleanLiteral => Some(DataType::Bool),
            SyntaxKind::StringLiteral => Some(DataType::String),
            _ => None,
        }
    }
}

impl TypedExpression for LiteralExpression<'_> {
    fn expression_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType> {
        cache.resolve_type(self.tree.node_key(self.node), || self.compute_type())
    }
}

/// 括号表达式视图
#[derive(Debug, Clone, Copy)]
pub struct ParenExpression<'a> {
    tree: &'a SyntaxTree,
    node: NodeId,
}

impl<'a> ParenExpression<'a> {
    /// 将节点转为括号表达式视图；种类不符返回 None
    pub fn cast(tree: &'a SyntaxTree, node: NodeId) -> Option<Self> {
        (tree.kind(node) == SyntaxKind::ParenExpression).then_some(Self { tree, node })
    }

    /// 底层节点标识
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// 括号内的表达式：第一个表达式种类的子节点；缺失表示不完整输入
    pub fn inner(&self) -> Option<NodeId> {
        self.tree
            .children(self.node)
            .iter()
            .copied()
            .find(|&child| EXPRESSION_KINDS.contains(self.tree.kind(child)))
    }
}

impl TypedExpression for ParenExpression<'_> {
    fn expression_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType> {
        cache.resolve_type(self.tree.node_key(self.node), || {
            let inner = self.inner()?;
            ExpressionNode::cast(self.tree, inner)?.expression_type(cache)
        })
    }
}

/// 标识符表达式视图
///
/// 名称解析不在本层作用域内，类型恒为未知；带符号表的上层可以
/// 用同一个 [`TypedExpression`] 契约替换掉本视图的求值。
#[derive(Debug, Clone, Copy)]
pub struct IdentifierExpression<'a> {
    tree: &'a SyntaxTree,
    node: NodeId,
}

impl<'a> IdentifierExpression<'a> {
    /// 将节点转为标识符表达式视图；种类不符返回 None
    pub fn cast(tree: &'a SyntaxTree, node: NodeId) -> Option<Self> {
        (tree.kind(node) == SyntaxKind::IdentifierExpression).then_some(Self { tree, node })
    }

    /// 底层节点标识
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// 标识符文本
    pub fn name(&self) -> Option<&'a str> {
        self.tree
            .children(self.node)
            .iter()
            .copied()
            .find(|&child| self.tree.kind(child) == SyntaxKind::Identifier)
            .and_then(|token| self.tree.token_text(token))
    }
}

impl TypedExpression for IdentifierExpression<'_> {
    fn expression_type<C: ResolutionCache>(&self, cache: &C) -> Option<DataType> {
        cache.resolve_type(self.tree.node_key(self.node), || None)
    }
}
