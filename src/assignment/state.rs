//! Working state of one square solve.

use ndarray::ArrayView2;

/// Sentinel for "no second minimum found yet".
///
/// Used by the reduction transfer and by the second-minimum search of the
/// augmenting row reduction.
pub const MAX_VALUE: f64 = f64::INFINITY;

/// Dual variables and the (partial) assignment of a square cost matrix.
///
/// Created fresh for each solve and dropped once the result is assembled.
#[derive(Debug, Clone)]
pub(crate) struct LapState<'m> {
    pub(crate) matrix: ArrayView2<'m, f64>,
    pub(crate) dim: usize,
    /// Rows still waiting for a column; only `free[..num_free]` is meaningful.
    pub(crate) free: Vec<usize>,
    /// Column of each row. Stale for rows currently on the free list.
    pub(crate) row_sol: Vec<usize>,
    /// Row of each column, `None` while the column is unassigned.
    pub(crate) col_sol: Vec<Option<usize>>,
    /// Column potentials.
    pub(crate) v: Vec<f64>,
}

impl<'m> LapState<'m> {
    /// Allocate state for a square matrix.
    ///
    /// The caller guarantees `matrix` is square and at least 2×2.
    pub(crate) fn new(matrix: ArrayView2<'m, f64>) -> Self {
        let dim = matrix.nrows();
        debug_assert_eq!(dim, matrix.ncols());
        Self {
            matrix,
            dim,
            free: vec![0; dim],
            row_sol: vec![0; dim],
            col_sol: vec![None; dim],
            v: vec![0.0; dim],
        }
    }

    /// Run both phases and return the row-to-column assignment.
    pub(crate) fn run(mut self) -> Vec<usize> {
        let num_free = self.reduce();
        log::trace!("lapjv: {num_free} free rows after reduction");
        self.augment(num_free);
        self.row_sol
    }

    /// Reduced cost of assigning row `i` to column `j`.
    #[inline]
    pub(crate) fn reduced(&self, i: usize, j: usize) -> f64 {
        self.matrix[[i, j]] - self.v[j]
    }

    /// Whether `row_sol` and `col_sol` are mutually inverse on every assigned column.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.col_sol
            .iter()
            .enumerate()
            .all(|(j, i)| i.map_or(true, |i| self.row_sol[i] == j))
    }
}
