//! Input checks, squaring of rectangular matrices, and the 1×k / k×1 shortcut.

use super::result::Assignment;
use crate::error::{Error, Result};
use crate::numeric::{min_index_value, transpose};
use ndarray::{s, Array2, ArrayView2};

/// Copy row-major input into a dense matrix.
///
/// Fails on ragged rows before any solving work starts.
pub(crate) fn to_array<R: AsRef<[f64]>>(rows: &[R]) -> Result<Array2<f64>> {
    let n = rows.len();
    let m = rows.first().map_or(0, |r| r.as_ref().len());

    let mut flat: Vec<f64> = Vec::with_capacity(n * m);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != m {
            return Err(Error::RaggedRow {
                row: i,
                expected: m,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }

    Array2::from_shape_vec((n, m), flat).map_err(|e| Error::Other(e.to_string()))
}

/// Reject NaN and infinite costs.
pub(crate) fn check_finite(costs: ArrayView2<'_, f64>) -> Result<()> {
    match costs.indexed_iter().find(|(_, c)| !c.is_finite()) {
        Some(((row, col), _)) => Err(Error::NonFiniteCost { row, col }),
        None => Ok(()),
    }
}

/// Pad an `r×c` matrix to `max(r, c)` square with zero-cost entries.
pub(crate) fn to_square(costs: ArrayView2<'_, f64>) -> Array2<f64> {
    let (r, c) = costs.dim();
    let size = r.max(c);
    let mut square = Array2::zeros((size, size));
    square.slice_mut(s![..r, ..c]).assign(&costs);
    square
}

/// Solve a single-row or single-column matrix by one minimum search.
///
/// `work` is the matrix the minimum is searched in; `costs` supplies the
/// reported cost. They differ only when maximizing. Returns `None` when the
/// matrix has more than one row and more than one column.
pub(crate) fn solve_degenerate(
    work: ArrayView2<'_, f64>,
    costs: ArrayView2<'_, f64>,
) -> Option<Assignment> {
    let (r, c) = work.dim();
    let (row, col) = if r == 1 {
        let (j, _) = min_index_value(&work.row(0).to_vec())?;
        (0, j)
    } else if c == 1 {
        let rows: Vec<Vec<f64>> = work.outer_iter().map(|row| row.to_vec()).collect();
        let column = transpose(&rows).into_iter().next()?;
        let (i, _) = min_index_value(&column)?;
        (i, 0)
    } else {
        return None;
    };

    Some(Assignment {
        cost: costs[[row, col]],
        row_index: vec![row],
        col_index: vec![col],
    })
}
