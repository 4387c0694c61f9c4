//! 二元运算类型合成
//!
//! 纯函数：由左右操作数类型与操作符推导结果类型。
//! 对不完整或类型不兼容的输入返回 None，对任何输入都不会 panic。

use crate::core::types::{BinaryOperator, DataType};

/// 类型合成器
pub struct TypeCombiner;

impl TypeCombiner {
    /// 推导二元运算的结果类型
    ///
    /// 右操作数类型缺失（不完整表达式）时结果一律未知，不会为
    /// 语法上不完整的表达式凭空给出类型；其余情况按操作符分组
    /// 委托给对应的合成规则。
    pub fn combine(
        left: Option<&DataType>,
        right: Option<&DataType>,
        op: BinaryOperator,
    ) -> Option<DataType> {
        let right = right?;
        match op {
            BinaryOperator::Add => Self::combine_additive(left, right),

            BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo => Self::combine_arithmetic(left, right),

            BinaryOperator::Equal | BinaryOperator::NotEqual => {
                Self::combine_equality(left, right)
            }

            BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThanOrEqual
            | BinaryOperator::GreaterThanOrEqual => Self::combine_relational(left, right),

            BinaryOperator::And | BinaryOperator::Or => Self::combine_logical(left, right),

            BinaryOperator::BitAnd | BinaryOperator::BitOr | BinaryOperator::BitXor => {
                Self::combine_bitwise(left, right)
            }

            BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight
            | BinaryOperator::UnsignedShiftRight => Self::combine_shift(left),
        }
    }

    /// `+`：任一操作数为文本类型时结果为文本（拼接重载），否则按算术处理
    fn combine_additive(left: Option<&DataType>, right: &DataType) -> Option<DataType> {
        if right.is_textual() || left.is_some_and(|t| t.is_textual()) {
            return Some(DataType::String);
        }
        Self::combine_arithmetic(left, right)
    }

    /// 算术运算：两侧都是数值时做二元数值提升
    fn combine_arithmetic(left: Option<&DataType>, right: &DataType) -> Option<DataType> {
        left?.binary_promotion(*right)
    }

    /// 相等比较：数值对数值、布尔对布尔、文本对文本可比，结果为布尔
    fn combine_equality(left: Option<&DataType>, right: &DataType) -> Option<DataType> {
        let left = left?;
        let comparable = (left.is_numeric() && right.is_numeric())
            || (*left == DataType::Bool && *right == DataType::Bool)
            || (left.is_textual() && right.is_textual());
        comparable.then_some(DataType::Bool)
    }

    /// 关系比较：仅数值之间可比，结果为布尔
    fn combine_relational(left: Option<&DataType>, right: &DataType) -> Option<DataType> {
        let left = left?;
        (left.is_numeric() && right.is_numeric()).then_some(DataType::Bool)
    }

    /// 逻辑运算：仅布尔操作数，结果为布尔
    fn combine_logical(left: Option<&DataType>, right: &DataType) -> Option<DataType> {
        let left = left?;
        (*left == DataType::Bool && *right == DataType::Bool).then_some(DataType::Bool)
    }

    /// 位运算：布尔对布尔为布尔，整型对整型做数值提升
    fn combine_bitwise(left: Option<&DataType>, right: &DataType) -> Option<DataType> {
        let left = left?;
        if *left == DataType::Bool && *right == DataType::Bool {
            return Some(DataType::Bool);
        }
        if left.is_integral() && right.is_integral() {
            return left.binary_promotion(*right);
        }
        None
    }

    /// 移位：结果只由左操作数的提升类型决定，右操作数类型不参与
    fn combine_shift(left: Option<&DataType>) -> Option<DataType> {
        let left = left?;
        if left.is_integral() {
            left.unary_promotion()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combine(left: DataType, right: DataType, op: BinaryOperator) -> Option<DataType> {
        TypeCombiner::combine(Some(&left), Some(&right), op)
    }

    #[test]
    fn test_missing_right_operand_yields_unknown() {
        for &op in BinaryOperator::all() {
            assert_eq!(TypeCombiner::combine(Some(&DataType::Int32), None, op), None);
        }
    }

    #[test]
    fn test_arithmetic_promotes_narrow_integers() {
        assert_eq!(
            combine(DataType::Int16, DataType::Int16, BinaryOperator::Add),
            Some(DataType::Int32)
        );
        assert_eq!(
            combine(DataType::Int8, DataType::Int16, BinaryOperator::Multiply),
            Some(DataType::Int32)
        );
        assert_eq!(
            combine(DataType::Int32, DataType::Int64, BinaryOperator::Subtract),
            Some(DataType::Int64)
        );
        assert_eq!(
            combine(DataType::Int64, DataType::Float64, BinaryOperator::Divide),
            Some(DataType::Float64)
        );
        assert_eq!(
            combine(DataType::Int32, DataType::Int32, BinaryOperator::Modulo),
            Some(DataType::Int32)
        );
    }

    #[test]
    fn test_arithmetic_rejects_non_numeric() {
        assert_eq!(
            combine(DataType::Bool, DataType::Int32, BinaryOperator::Add),
            None
        );
        assert_eq!(
            combine(DataType::Int32, DataType::Bool, BinaryOperator::Subtract),
            None
        );
        assert_eq!(
            combine(DataType::String, DataType::String, BinaryOperator::Multiply),
            None
        );
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(
            combine(DataType::String, DataType::Int32, BinaryOperator::Add),
            Some(DataType::String)
        );
        assert_eq!(
            combine(DataType::Float64, DataType::String, BinaryOperator::Add),
            Some(DataType::String)
        );
        assert_eq!(
            combine(DataType::String, DataType::String, BinaryOperator::Add),
            Some(DataType::String)
        );
        // 左操作数类型未知、右侧为文本时仍可拼接
        assert_eq!(
            TypeCombiner::combine(None, Some(&DataType::String), BinaryOperator::Add),
            Some(DataType::String)
        );
    }

    #[test]
    fn test_equality_and_relational() {
        assert_eq!(
            combine(DataType::Int16, DataType::Float32, BinaryOperator::Equal),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::Bool, DataType::Bool, BinaryOperator::NotEqual),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::String, DataType::String, BinaryOperator::Equal),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::String, DataType::Int32, BinaryOperator::Equal),
            None
        );

        assert_eq!(
            combine(DataType::Int32, DataType::Int64, BinaryOperator::LessThan),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::Bool, DataType::Bool, BinaryOperator::GreaterThan),
            None
        );
        assert_eq!(
            combine(
                DataType::String,
                DataType::String,
                BinaryOperator::LessThanOrEqual
            ),
            None
        );
    }

    #[test]
    fn test_logical_requires_booleans() {
        assert_eq!(
            combine(DataType::Bool, DataType::Bool, BinaryOperator::And),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::Bool, DataType::Bool, BinaryOperator::Or),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::Bool, DataType::Int32, BinaryOperator::And),
            None
        );
        assert_eq!(
            combine(DataType::Int32, DataType::Int32, BinaryOperator::Or),
            None
        );
    }

    #[test]
    fn test_bitwise_on_booleans_and_integers() {
        assert_eq!(
            combine(DataType::Bool, DataType::Bool, BinaryOperator::BitXor),
            Some(DataType::Bool)
        );
        assert_eq!(
            combine(DataType::Int16, DataType::Int16, BinaryOperator::BitAnd),
            Some(DataType::Int32)
        );
        assert_eq!(
            combine(DataType::Int32, DataType::Int64, BinaryOperator::BitOr),
            Some(DataType::Int64)
        );
        assert_eq!(
            combine(DataType::Float32, DataType::Int32, BinaryOperator::BitAnd),
            None
        );
        assert_eq!(
            combine(DataType::Bool, DataType::Int32, BinaryOperator::BitOr),
            None
        );
    }

    #[test]
    fn test_shift_depends_only_on_left_operand() {
        assert_eq!(
            combine(DataType::Int64, DataType::Int32, BinaryOperator::ShiftLeft),
            Some(DataType::Int64)
        );
        assert_eq!(
            combine(DataType::Int16, DataType::Int64, BinaryOperator::ShiftRight),
            Some(DataType::Int32)
        );
        assert_eq!(
            combine(
                DataType::Int32,
                DataType::Float64,
                BinaryOperator::UnsignedShiftRight
            ),
            Some(DataType::Int32)
        );
        assert_eq!(
            combine(DataType::Float64, DataType::Int32, BinaryOperator::ShiftLeft),
            None
        );
    }

    #[test]
    fn test_unknown_left_operand_propagates() {
        assert_eq!(
            TypeCombiner::combine(None, Some(&DataType::Int32), BinaryOperator::Add),
            None
        );
        assert_eq!(
            TypeCombiner::combine(None, Some(&DataType::Bool), BinaryOperator::And),
            None
        );
        assert_eq!(
            TypeCombiner::combine(None, Some(&DataType::Int32), BinaryOperator::ShiftLeft),
            None
        );
    }
}
