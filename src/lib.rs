//! Classic dynamic-programming demonstrations.
//!
//! The core of this crate is matrix-chain ordering: given the dimensions
//! of a chain of matrices, find the cheapest order in which to multiply
//! them, and reconstruct one optimal parenthesization.
//!
//! ## Core idea
//! 1. [`ChainOrderSolver`] fills a cost table and a split table bottom-up
//!    by increasing sub-chain length (the classic O(n³) interval DP).
//! 2. [`parenthesization`] walks the split table depth-first and renders
//!    the grouping as a fully parenthesized expression.
//!
//! ## Quick start
//! ```
//! use chain_order::solve_chain;
//!
//! let order = solve_chain(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
//! assert_eq!(order.costs[(1, 6)], 15125);
//! assert_eq!(order.expression, "((A1(A2A3))((A4A5)A6))");
//! ```
//!
//! The [`compositions`] module is an independent companion demonstration:
//! a one-dimensional DP counting the ordered ways to write a target as a
//! sum of allowed parts.
//!
//! ## Features
//! - `parallel`: scan independent same-length windows with rayon. Output
//!   is identical to the sequential fill.
//! - `tracing`: emit a trace span per DP length pass.

pub mod compositions;
pub mod error;
pub mod reconstruct;
pub mod solver;
pub mod tables;

pub use crate::error::{ChainOrderError, InputFault};
pub use crate::reconstruct::parenthesization;
pub use crate::solver::{optimal_order, solve_chain, ChainOrderSolver, ChainOrdering};
pub use crate::tables::{CostTable, SplitTable};
