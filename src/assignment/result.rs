//! Solver output.

use ndarray::ArrayView2;

/// An optimal matching between rows and columns of a cost matrix.
///
/// `row_index[k]` is matched to `col_index[k]`. Pairs are ordered by ascending
/// row index. There are `min(rows, cols)` pairs, and none of them touch the
/// zero-cost padding used internally for rectangular inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Sum of the original cost entries over all matched pairs.
    pub cost: f64,
    /// Matched rows.
    pub row_index: Vec<usize>,
    /// Matched columns, parallel to `row_index`.
    pub col_index: Vec<usize>,
}

impl Assignment {
    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.row_index.len()
    }

    /// True when nothing was matched.
    pub fn is_empty(&self) -> bool {
        self.row_index.is_empty()
    }

    /// Iterate `(row, col)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_index
            .iter()
            .copied()
            .zip(self.col_index.iter().copied())
    }

    /// Column matched to `row`, if any.
    pub fn col_for_row(&self, row: usize) -> Option<usize> {
        self.pairs().find(|&(r, _)| r == row).map(|(_, c)| c)
    }

    /// Row matched to `col`, if any.
    pub fn row_for_col(&self, col: usize) -> Option<usize> {
        self.pairs().find(|&(_, c)| c == col).map(|(r, _)| r)
    }

    /// Translate a square-space `row_sol` back to the original `r×c` problem.
    ///
    /// Pairs landing on a padding row or column are dropped. The cost is read
    /// from `costs`, the caller's original matrix.
    pub(crate) fn from_row_sol(row_sol: &[usize], costs: ArrayView2<'_, f64>) -> Self {
        let (n_rows, n_cols) = costs.dim();
        let n = n_rows.min(n_cols);
        let mut row_index = Vec::with_capacity(n);
        let mut col_index = Vec::with_capacity(n);

        for (row, &col) in row_sol.iter().enumerate().take(n_rows) {
            if col < n_cols {
                row_index.push(row);
                col_index.push(col);
            }
        }

        let cost: f64 = row_index
            .iter()
            .zip(&col_index)
            .map(|(&i, &j)| costs[[i, j]])
            .sum();

        Self {
            cost,
            row_index,
            col_index,
        }
    }
}
