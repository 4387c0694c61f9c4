//! 表达式层
//!
//! 基于通用语法树的表达式视图：语义角色解析、类型合成、缓存求值
//! 与访问者分发。

// 二元表达式与角色解析
pub mod binary;
pub use binary::{BinaryExpression, ChildRole};

// 类型合成
pub mod combiner;
pub use combiner::TypeCombiner;

// 表达式视图与跨种类类型解析
pub mod node;
pub use node::{
    ExpressionNode, IdentifierExpression, LiteralExpression, ParenExpression, TypedExpression,
};

// 访问者模式
pub mod visitor;
pub use visitor::SyntaxVisitor;
