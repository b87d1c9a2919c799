//! Assignment solver traits.

use super::result::Assignment;
use crate::error::Result;
use ndarray::ArrayView2;

/// Trait for linear assignment solvers.
pub trait AssignmentSolver {
    /// Find a minimum-cost matching for an `r×c` cost matrix.
    ///
    /// Returns `Ok(None)` when the matrix has no rows or no columns.
    fn solve_matrix(&self, costs: ArrayView2<'_, f64>) -> Result<Option<Assignment>>;

    /// Same as [`AssignmentSolver::solve_matrix`] for row-major input.
    ///
    /// Ragged rows are rejected with [`crate::Error::RaggedRow`].
    fn solve_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Option<Assignment>>
    where
        Self: Sized,
    {
        let costs = super::square::to_array(rows)?;
        self.solve_matrix(costs.view())
    }
}
