pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{SyntaxResult, TreeError};

// 核心数据类型
pub use types::{
    BinaryOperator, DataType, KindSet, Operator, SyntaxKind, BINARY_OPERATOR_TOKENS,
    EXPRESSION_KINDS, LITERAL_TOKENS,
};
