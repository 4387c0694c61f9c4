//! 数据类型定义与数值提升
//!
//! 定义查询语法层使用的标量数据类型，以及二元运算结果类型推导
//! 所依赖的数值提升规则。窄于 32 位的整数参与运算前统一提升为 Int32。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 标量数据类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
}

impl DataType {
    /// 是否为数值类型
    pub fn is_numeric(self) -> bool {
        self.numeric_rank().is_some()
    }

    /// 是否为整数类型
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64
        )
    }

    /// 是否为文本类型
    pub fn is_textual(self) -> bool {
        matches!(self, DataType::String)
    }

    /// 数值秩，二元提升时取秩较宽的一侧
    pub fn numeric_rank(self) -> Option<u8> {
        match self {
            DataType::Int8 => Some(1),
            DataType::Int16 => Some(2),
            DataType::Int32 => Some(3),
            DataType::Int64 => Some(4),
            DataType::Float32 => Some(5),
            DataType::Float64 => Some(6),
            DataType::Bool | DataType::String => None,
        }
    }

    /// 一元数值提升
    ///
    /// 窄于 32 位的整数提升为 Int32，其余数值类型保持不变；
    /// 非数值类型没有提升结果。
    pub fn unary_promotion(self) -> Option<DataType> {
        match self {
            DataType::Int8 | DataType::Int16 => Some(DataType::Int32),
            DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64 => Some(self),
            DataType::Bool | DataType::String => None,
        }
    }

    /// 二元数值提升
    ///
    /// 两侧各自做一元提升后取秩较宽者；任一侧非数值时没有结果。
    pub fn binary_promotion(self, other: DataType) -> Option<DataType> {
        let left = self.unary_promotion()?;
        let right = other.unary_promotion()?;
        if left.numeric_rank() >= right.numeric_rank() {
            Some(left)
        } else {
            Some(right)
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Bool => "bool",
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::Float32 => "float",
            DataType::Float64 => "double",
            DataType::String => "string",
        };
        write!(f, "{}", name)
    }
}
