//! # lapjv
//!
//! Rectangular linear assignment: a minimum-cost one-to-one matching between
//! the rows and columns of a dense cost matrix, solved exactly with the
//! Jonker-Volgenant shortest augmenting path algorithm.
//!
//! ```rust
//! let costs = vec![
//!     vec![4.0, 1.0, 3.0],
//!     vec![2.0, 0.0, 5.0],
//!     vec![3.0, 2.0, 2.0],
//! ];
//! let a = lapjv::solve(&costs).unwrap().unwrap();
//! assert_eq!(a.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (2, 2)]);
//! assert_eq!(a.cost, 5.0);
//! ```
//!
//! Logging goes through the `log` facade (`debug` per solve, `trace` per
//! phase); install any logger to see it.

pub mod assignment;
pub mod cost;
/// Error types used across `lapjv`.
pub mod error;
pub mod numeric;

#[cfg(test)]
mod solver_tests;

pub use assignment::{
    solve, solve_array, Assignment, AssignmentSolver, Lapjv, MAX_VALUE,
};
pub use cost::{assign_points, cost_matrix, Distance};
pub use error::{Error, Result};
