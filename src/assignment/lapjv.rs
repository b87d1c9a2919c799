//! Jonker-Volgenant solver.
//!
//! # The Problem
//!
//! Given an `r×c` cost matrix `C`, find a matching of rows to columns that
//! minimizes
//!
//! ```text
//! Σₖ C[rowₖ][colₖ]
//! ```
//!
//! with every row used at most once, every column used at most once, and
//! `min(r, c)` pairs in total.
//!
//! # Algorithm (Jonker & Volgenant, 1987)
//!
//! 1. **Square**: pad rectangular input with zero-cost rows or columns.
//! 2. **Reduce**: column reduction, reduction transfer, and two passes of
//!    augmenting row reduction produce column potentials `v` and a partial
//!    assignment (see `reduction.rs`).
//! 3. **Augment**: each remaining free row gets a shortest augmenting path
//!    under reduced costs `C[i][j] - v[j]` (see `augment.rs`).
//! 4. **Assemble**: drop pairs on padding and sum the original costs.
//!
//! At termination every row holds a column of minimum reduced cost in its
//! row, which certifies optimality.
//!
//! # Complexity
//!
//! O(n³) time and O(n) extra space beyond the squared matrix, where
//! `n = max(r, c)`.
//!
//! # Ties
//!
//! Every minimum search keeps the first index it meets. Under cost ties this
//! decides *which* optimal assignment is returned; callers must not rely on a
//! particular one. The optimal cost is unaffected.

use super::result::Assignment;
use super::square::{check_finite, solve_degenerate, to_square};
use super::state::LapState;
use super::traits::AssignmentSolver;
use crate::error::Result;
use ndarray::{ArrayView2, CowArray, Ix2};

/// Shortest augmenting path solver for dense linear assignment.
///
/// Holds configuration only; every solve allocates its own working state, so
/// one `Lapjv` can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Lapjv {
    /// Maximize total weight instead of minimizing cost.
    maximize: bool,
}

impl Lapjv {
    /// Create a minimizing solver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve the maximum-weight assignment instead.
    ///
    /// The reported [`Assignment::cost`] is still the sum of the original
    /// entries.
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    /// Whether this solver maximizes.
    pub fn maximize(&self) -> bool {
        self.maximize
    }
}

impl AssignmentSolver for Lapjv {
    fn solve_matrix(&self, costs: ArrayView2<'_, f64>) -> Result<Option<Assignment>> {
        let (n_rows, n_cols) = costs.dim();
        log::debug!(
            "lapjv: solving {n_rows}x{n_cols} (maximize={})",
            self.maximize
        );

        if n_rows == 0 || n_cols == 0 {
            return Ok(None);
        }
        check_finite(costs)?;

        let work: CowArray<'_, f64, Ix2> = if self.maximize {
            costs.mapv(|c| -c).into()
        } else {
            costs.into()
        };

        if let Some(assignment) = solve_degenerate(work.view(), costs) {
            log::debug!("lapjv: degenerate shape, cost {}", assignment.cost);
            return Ok(Some(assignment));
        }

        let square: CowArray<'_, f64, Ix2> = if n_rows == n_cols {
            work
        } else {
            to_square(work.view()).into()
        };

        let row_sol = LapState::new(square.view()).run();
        let assignment = Assignment::from_row_sol(&row_sol, costs);
        log::debug!(
            "lapjv: {} pairs, cost {}",
            assignment.len(),
            assignment.cost
        );

        Ok(Some(assignment))
    }
}

/// Solve the assignment problem for row-major input with the default solver.
///
/// Returns `Ok(None)` for an empty matrix. Ragged rows and non-finite entries
/// are rejected before any work starts.
///
/// Under cost ties the particular optimal assignment returned is unspecified.
///
/// ```rust
/// let costs = vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]];
/// let a = lapjv::solve(&costs).unwrap().unwrap();
/// assert_eq!(a.col_index, vec![1, 0, 2]);
/// assert_eq!(a.cost, 5.0);
/// ```
pub fn solve<R: AsRef<[f64]>>(rows: &[R]) -> Result<Option<Assignment>> {
    Lapjv::new().solve_rows(rows)
}

/// Solve the assignment problem for an `ndarray` view with the default solver.
pub fn solve_array(costs: ArrayView2<'_, f64>) -> Result<Option<Assignment>> {
    Lapjv::new().solve_matrix(costs)
}
