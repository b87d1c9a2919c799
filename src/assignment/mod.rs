//! Dense linear assignment.
//!
//! Given an `r×c` cost matrix, find a one-to-one matching between rows and
//! columns of minimum total cost. Every row is matched when `r ≤ c`, every
//! column when `c ≤ r`.
//!
//! ## Pipeline
//!
//! | Stage | File | What it does |
//! |-------|------|--------------|
//! | Square | `square.rs` | Validate, pad to `max(r, c)`, shortcut 1×k / k×1 |
//! | Reduce | `reduction.rs` | Column potentials and a partial assignment |
//! | Augment | `augment.rs` | Shortest augmenting path per free row |
//! | Assemble | `result.rs` | Drop padding, sum original costs |
//!
//! ## Usage
//!
//! ```rust
//! use lapjv::assignment::{AssignmentSolver, Lapjv};
//! use ndarray::array;
//!
//! let costs = array![[5.0, 9.0, 1.0], [2.0, 8.0, 7.0]];
//! let a = Lapjv::new().solve_matrix(costs.view()).unwrap().unwrap();
//!
//! assert_eq!(a.len(), 2); // min(2, 3)
//! assert_eq!(a.col_index, vec![2, 0]);
//! assert_eq!(a.cost, 3.0);
//! ```
//!
//! ## References
//!
//! Jonker & Volgenant (1987). "A shortest augmenting path algorithm for dense
//! and sparse linear assignment problems." Computing 38, 325–340.

mod augment;
mod lapjv;
mod reduction;
mod result;
mod square;
mod state;
mod traits;

#[cfg(test)]
pub(crate) use state::LapState;

pub use lapjv::{solve, solve_array, Lapjv};
pub use result::Assignment;
pub use state::MAX_VALUE;
pub use traits::AssignmentSolver;
