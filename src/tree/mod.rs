//! 通用语法树模块
//!
//! 提供与节点语义无关的有序树存储、节点标识与结构编辑操作。

pub mod edit;
pub mod node;

pub use node::{NodeId, NodeKey, SyntaxTree};
