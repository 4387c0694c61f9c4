// 核心类型系统模块
//
// 包含语法树核心的类型定义：节点种类、数据类型与操作符。

pub mod data_type;
pub mod kind;
pub mod operators;

pub use data_type::DataType;
pub use kind::{KindSet, SyntaxKind, BINARY_OPERATOR_TOKENS, EXPRESSION_KINDS, LITERAL_TOKENS};
pub use operators::{BinaryOperator, Operator};
