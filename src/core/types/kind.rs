//! 语法节点种类定义
//!
//! 定义语法树中所有节点与 token 的种类标签，以及基于位集的种类集合。
//! 种类集合可以在 const 上下文中构建，成员检查是单条位运算。

use serde::{Deserialize, Serialize};

/// 语法节点种类
///
/// 闭集枚举，同时覆盖内部节点（表达式）与叶子 token。
/// 判别值用作 [`KindSet`] 的位下标，枚举成员数不允许超过 128。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SyntaxKind {
    // 表达式节点
    BinaryExpression,
    LiteralExpression,
    ParenExpression,
    IdentifierExpression,

    // 二元操作符 token
    OrOr,   // ||
    AndAnd, // &&
    Pipe,   // |
    Caret,  // ^
    Amp,    // &
    Eq,     // ==
    Ne,     // !=
    Lt,     // <
    Gt,     // >
    Le,     // <=
    Ge,     // >=
    Shl,    // <<
    Shr,    // >>
    UShr,   // >>>
    Plus,   // +
    Minus,  // -
    Star,   // *
    Div,    // /
    Mod,    // %

    // 字面量 token
    IntegerLiteral,
    LongLiteral,
    FloatLiteral,
    DoubleLiteral,
    BooleanLiteral,
    StringLiteral,

    // 其它 token
    Identifier,
    LParen, // (
    RParen, // )
    Whitespace,
}

impl SyntaxKind {
    /// 是否为表达式节点种类
    pub fn is_expression(self) -> bool {
        EXPRESSION_KINDS.contains(self)
    }

    /// 是否为二元操作符 token 种类
    pub fn is_binary_operator_token(self) -> bool {
        BINARY_OPERATOR_TOKENS.contains(self)
    }

    /// 是否为字面量 token 种类
    pub fn is_literal_token(self) -> bool {
        LITERAL_TOKENS.contains(self)
    }
}

/// 种类位集
///
/// 以 u128 位掩码表示的 [`SyntaxKind`] 集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSet(u128);

impl KindSet {
    /// 由种类列表构建位集
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u128 << kinds[i] as u8;
            i += 1;
        }
        KindSet(bits)
    }

    /// 成员检查
    pub const fn contains(self, kind: SyntaxKind) -> bool {
        self.0 & (1u128 << kind as u8) != 0
    }

    /// 并集
    pub const fn union(self, other: KindSet) -> KindSet {
        KindSet(self.0 | other.0)
    }

    /// 集合大小
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// 是否为空集
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// 表达式节点种类集合
pub const EXPRESSION_KINDS: KindSet = KindSet::new(&[
    SyntaxKind::BinaryExpression,
    SyntaxKind::LiteralExpression,
    SyntaxKind::ParenExpression,
    SyntaxKind::IdentifierExpression,
]);

/// 二元操作符 token 种类集合（闭集）
pub const BINARY_OPERATOR_TOKENS: KindSet = KindSet::new(&[
    SyntaxKind::OrOr,
    SyntaxKind::AndAnd,
    SyntaxKind::Pipe,
    SyntaxKind::Caret,
    SyntaxKind::Amp,
    SyntaxKind::Eq,
    SyntaxKind::Ne,
    SyntaxKind::Lt,
    SyntaxKind::Gt,
    SyntaxKind::Le,
    SyntaxKind::Ge,
    SyntaxKind::Shl,
    SyntaxKind::Shr,
    SyntaxKind::UShr,
    SyntaxKind::Plus,
    SyntaxKind::Minus,
    SyntaxKind::Star,
    SyntaxKind::Div,
    SyntaxKind::Mod,
]);

/// 字面量 token 种类集合
pub const LITERAL_TOKENS: KindSet = KindSet::new(&[
    SyntaxKind::IntegerLiteral,
    SyntaxKind::LongLiteral,
    SyntaxKind::FloatLiteral,
    SyntaxKind::DoubleLiteral,
    SyntaxKind::BooleanLiteral,
    SyntaxKind::StringLiteral,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_token_set_is_closed() {
        assert_eq!(BINARY_OPERATOR_TOKENS.len(), 19);
        assert!(BINARY_OPERATOR_TOKENS.contains(SyntaxKind::Plus));
        assert!(BINARY_OPERATOR_TOKENS.contains(SyntaxKind::UShr));
        assert!(!BINARY_OPERATOR_TOKENS.contains(SyntaxKind::LParen));
        assert!(!BINARY_OPERATOR_TOKENS.contains(SyntaxKind::BinaryExpression));
    }

    #[test]
    fn test_expression_kind_set() {
        assert!(SyntaxKind::BinaryExpression.is_expression());
        assert!(SyntaxKind::LiteralExpression.is_expression());
        assert!(!SyntaxKind::Plus.is_expression());
        assert!(!SyntaxKind::Whitespace.is_expression());
    }

    #[test]
    fn test_kind_set_union() {
        let combined = EXPRESSION_KINDS.union(LITERAL_TOKENS);
        assert_eq!(combined.len(), EXPRESSION_KINDS.len() + LITERAL_TOKENS.len());
        assert!(combined.contains(SyntaxKind::ParenExpression));
        assert!(combined.contains(SyntaxKind::StringLiteral));
    }

    #[test]
    fn test_kind_set_empty() {
        let empty = KindSet::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!empty.contains(SyntaxKind::Plus));
    }

    #[test]
    fn test_literal_tokens_disjoint_from_operators() {
        assert!(!LITERAL_TOKENS.contains(SyntaxKind::Plus));
        assert!(!BINARY_OPERATOR_TOKENS.contains(SyntaxKind::IntegerLiteral));
    }
}
