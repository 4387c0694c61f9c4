//! 表达式访问者模式
//!
//! 带默认回退的按种类分发：访问者只需覆写关心的种类，未覆写的种类
//! 统一落入 `visit_element`。分发本身不做任何计算，只服务于外部的
//! 遍历与分析工具。

use crate::expression::binary::BinaryExpression;
use crate::expression::node::{
    ExpressionNode, IdentifierExpression, LiteralExpression, ParenExpression,
};

/// 表达式访问者 trait
pub trait SyntaxVisitor {
    /// 访问者结果类型
    type Result;

    /// 通用回退入口：未特化覆写的节点种类都落到这里
    fn visit_element(&mut self, node: &ExpressionNode<'_>) -> Self::Result;

    /// 访问二元表达式
    fn visit_binary_expression(&mut self, expr: &BinaryExpression<'_>) -> Self::Result {
        self.visit_element(&ExpressionNode::Binary(*expr))
    }

    /// 访问字面量表达式
    fn visit_literal_expression(&mut self, expr: &LiteralExpression<'_>) -> Self::Result {
        self.visit_element(&ExpressionNode::Literal(*expr))
    }

    /// 访问括号表达式
    fn visit_paren_expression(&mut self, expr: &ParenExpression<'_>) -> Self::Result {
        self.visit_element(&ExpressionNode::Paren(*expr))
    }

    /// 访问标识符表达式
    fn visit_identifier_expression(&mut self, expr: &IdentifierExpression<'_>) -> Self::Result {
        self.visit_element(&ExpressionNode::Identifier(*expr))
    }
}

impl<'a> ExpressionNode<'a> {
    /// 接受访问者（双分发入口）
    pub fn accept<V: SyntaxVisitor>(&self, visitor: &mut V) -> V::Result {
        match self {
            ExpressionNode::Binary(e) => visitor.visit_binary_expression(e),
            ExpressionNode::Literal(e) => visitor.visit_literal_expression(e),
            ExpressionNode::Paren(e) => visitor.visit_paren_expression(e),
            ExpressionNode::Identifier(e) => visitor.visit_identifier_expression(e),
        }
    }
}

impl<'a> BinaryExpression<'a> {
    /// 接受访问者
    pub fn accept<V: SyntaxVisitor>(&self, visitor: &mut V) -> V::Result {
        visitor.visit_binary_expression(self)
    }
}
