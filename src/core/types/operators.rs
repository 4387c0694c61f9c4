//! 操作符类型定义
//!
//! 定义表达式语法树使用的二元操作符及其元信息。
//! 操作符集合与 [`BINARY_OPERATOR_TOKENS`](crate::core::types::kind::BINARY_OPERATOR_TOKENS)
//! 一一对应，是一个闭集。

use crate::core::types::kind::SyntaxKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 操作符特征定义
pub trait Operator {
    /// 获取操作符的名称
    fn name(&self) -> &str;

    /// 获取操作符的优先级
    fn precedence(&self) -> u8;

    /// 检查操作符是否是左结合的
    fn is_left_associative(&self) -> bool;

    /// 获取操作符的元数（操作数数量）
    fn arity(&self) -> usize;
}

/// 二元操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // 逻辑操作
    Or,  // ||
    And, // &&

    // 位操作
    BitOr,  // |
    BitXor, // ^
    BitAnd, // &

    // 相等比较
    Equal,    // ==
    NotEqual, // !=

    // 关系比较
    LessThan,           // <
    GreaterThan,        // >
    LessThanOrEqual,    // <=
    GreaterThanOrEqual, // >=

    // 移位操作
    ShiftLeft,          // <<
    ShiftRight,         // >>
    UnsignedShiftRight, // >>>

    // 算术操作
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
}

impl BinaryOperator {
    /// 由操作符 token 种类映射到二元操作符
    ///
    /// 仅对闭集内的 token 种类返回 Some；其它种类（包括非 token 种类）
    /// 一律返回 None。
    pub fn from_token_kind(kind: SyntaxKind) -> Option<BinaryOperator> {
        match kind {
            SyntaxKind::OrOr => Some(BinaryOperator::Or),
            SyntaxKind::AndAnd => Some(BinaryOperator::And),
            SyntaxKind::Pipe => Some(BinaryOperator::BitOr),
            SyntaxKind::Caret => Some(BinaryOperator::BitXor),
            SyntaxKind::Amp => Some(BinaryOperator::BitAnd),
            SyntaxKind::Eq => Some(BinaryOperator::Equal),
            SyntaxKind::Ne => Some(BinaryOperator::NotEqual),
            SyntaxKind::Lt => Some(BinaryOperator::LessThan),
            SyntaxKind::Gt => Some(BinaryOperator::GreaterThan),
            SyntaxKind::Le => Some(BinaryOperator::LessThanOrEqual),
            SyntaxKind::Ge => Some(BinaryOperator::GreaterThanOrEqual),
            SyntaxKind::Shl => Some(BinaryOperator::ShiftLeft),
            SyntaxKind::Shr => Some(BinaryOperator::ShiftRight),
            SyntaxKind::UShr => Some(BinaryOperator::UnsignedShiftRight),
            SyntaxKind::Plus => Some(BinaryOperator::Add),
            SyntaxKind::Minus => Some(BinaryOperator::Subtract),
            SyntaxKind::Star => Some(BinaryOperator::Multiply),
            SyntaxKind::Div => Some(BinaryOperator::Divide),
            SyntaxKind::Mod => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    /// 对应的操作符 token 种类
    pub fn token_kind(self) -> SyntaxKind {
        match self {
            BinaryOperator::Or => SyntaxKind::OrOr,
            BinaryOperator::And => SyntaxKind::AndAnd,
            BinaryOperator::BitOr => SyntaxKind::Pipe,
            BinaryOperator::BitXor => SyntaxKind::Caret,
            BinaryOperator::BitAnd => SyntaxKind::Amp,
            BinaryOperator::Equal => SyntaxKind::Eq,
            BinaryOperator::NotEqual => SyntaxKind::Ne,
            BinaryOperator::LessThan => SyntaxKind::Lt,
            BinaryOperator::GreaterThan => SyntaxKind::Gt,
            BinaryOperator::LessThanOrEqual => SyntaxKind::Le,
            BinaryOperator::GreaterThanOrEqual => SyntaxKind::Ge,
            BinaryOperator::ShiftLeft => SyntaxKind::Shl,
            BinaryOperator::ShiftRight => SyntaxKind::Shr,
            BinaryOperator::UnsignedShiftRight => SyntaxKind::UShr,
            BinaryOperator::Add => SyntaxKind::Plus,
            BinaryOperator::Subtract => SyntaxKind::Minus,
            BinaryOperator::Multiply => SyntaxKind::Star,
            BinaryOperator::Divide => SyntaxKind::Div,
            BinaryOperator::Modulo => SyntaxKind::Mod,
        }
    }

    /// 全部二元操作符，按优先级从低到高分组排列
    pub fn all() -> &'static [BinaryOperator] {
        &[
            BinaryOperator::Or,
            BinaryOperator::And,
            BinaryOperator::BitOr,
            BinaryOperator::BitXor,
            BinaryOperator::BitAnd,
            BinaryOperator::Equal,
            BinaryOperator::NotEqual,
            BinaryOperator::LessThan,
            BinaryOperator::GreaterThan,
            BinaryOperator::LessThanOrEqual,
            BinaryOperator::GreaterThanOrEqual,
            BinaryOperator::ShiftLeft,
            BinaryOperator::ShiftRight,
            BinaryOperator::UnsignedShiftRight,
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Modulo,
        ]
    }
}

impl Operator for BinaryOperator {
    fn name(&self) -> &str {
        match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::UnsignedShiftRight => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            // 优先级 1: 逻辑或
            BinaryOperator::Or => 1,

            // 优先级 2: 逻辑与
            BinaryOperator::And => 2,

            // 优先级 3-5: 位运算
            BinaryOperator::BitOr => 3,
            BinaryOperator::BitXor => 4,
            BinaryOperator::BitAnd => 5,

            // 优先级 6: 相等比较
            BinaryOperator::Equal | BinaryOperator::NotEqual => 6,

            // 优先级 7: 关系比较
            BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThanOrEqual
            | BinaryOperator::GreaterThanOrEqual => 7,

            // 优先级 8: 移位
            BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight
            | BinaryOperator::UnsignedShiftRight => 8,

            // 优先级 9: 加减
            BinaryOperator::Add | BinaryOperator::Subtract => 9,

            // 优先级 10: 乘除模
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 10,
        }
    }

    fn is_left_associative(&self) -> bool {
        true
    }

    fn arity(&self) -> usize {
        2
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
