//! GraphDB Syntax - structural query syntax tree core
//!
//! This crate provides the structural syntax tree layer used by a query
//! frontend: role-based access to binary-expression operands and operator
//! tokens that is independent of the underlying tree layout, plus lazily
//! cached static type resolution over an incrementally edited tree.

pub mod cache;
pub mod core;
pub mod expression;
pub mod tree;
