//! Initialization phase: column reduction, reduction transfer, and augmenting
//! row reduction.
//!
//! # Column reduction
//!
//! Every column gets the potential `v[j] = min_i c[i][j]` and is tentatively
//! given to its minimizing row. A row that wins several columns keeps only the
//! first one it won (columns are visited last to first); the others stay
//! unassigned.
//!
//! # Reduction transfer
//!
//! A row holding exactly one column `j1` can afford to lower `v[j1]` by the
//! smallest reduced cost among its other columns without breaking optimality
//! of its own choice.
//!
//! # Augmenting row reduction
//!
//! Each free row looks at its two cheapest reduced costs `umin ≤ usubmin`.
//! A strict gap lets it take the cheaper column and push the gap into the
//! potential; a tie makes it take whichever column is still free, or displace
//! the occupant of the second one. Displaced rows go back on the free list.
//! The pass runs exactly twice. Whatever is still free afterwards is left to
//! the shortest augmenting path search.

use super::state::{LapState, MAX_VALUE};

/// Number of augmenting row reduction passes.
pub(crate) const REDUCTION_PASSES: usize = 2;

impl LapState<'_> {
    /// Compute initial potentials and a partial assignment.
    ///
    /// Returns the number of rows left on the free list.
    pub(crate) fn reduce(&mut self) -> usize {
        let matches = self.column_reduction();
        let mut num_free = self.reduction_transfer(&matches);
        for _ in 0..REDUCTION_PASSES {
            num_free = self.augmenting_row_reduction(num_free);
        }
        num_free
    }

    /// Returns how many columns each row won.
    fn column_reduction(&mut self) -> Vec<usize> {
        let mut matches = vec![0usize; self.dim];

        for j in (0..self.dim).rev() {
            let column = self.matrix.column(j);
            let mut i_min = 0;
            let mut min_v = column[0];
            for (i, &c) in column.iter().enumerate().skip(1) {
                if c < min_v {
                    min_v = c;
                    i_min = i;
                }
            }

            self.v[j] = min_v;
            matches[i_min] += 1;
            if matches[i_min] == 1 {
                self.row_sol[i_min] = j;
                self.col_sol[j] = Some(i_min);
            } else {
                self.col_sol[j] = None;
            }
        }

        matches
    }

    /// Fills the free list with rows that won nothing and tightens the
    /// potential of every row that won exactly one column.
    fn reduction_transfer(&mut self, matches: &[usize]) -> usize {
        let mut num_free = 0;
        for (i, &count) in matches.iter().enumerate() {
            match count {
                0 => {
                    self.free[num_free] = i;
                    num_free += 1;
                }
                1 => {
                    let j1 = self.row_sol[i];
                    let min_v = (0..self.dim)
                        .filter(|&j| j != j1)
                        .map(|j| self.reduced(i, j))
                        .fold(MAX_VALUE, f64::min);
                    self.v[j1] -= min_v;
                }
                _ => {}
            }
        }
        num_free
    }

    /// One pass over `free[..prev_num_free]`; returns the new free count.
    fn augmenting_row_reduction(&mut self, prev_num_free: usize) -> usize {
        let mut num_free = 0;
        let mut k = 0;

        while k < prev_num_free {
            let i = self.free[k];
            k += 1;

            let (mut j1, umin, j2, usubmin) = self.two_smallest(i);

            let mut i0 = self.col_sol[j1];
            if umin < usubmin {
                self.v[j1] -= usubmin - umin;
            } else if i0.is_some() {
                j1 = j2;
                i0 = self.col_sol[j2];
            }

            self.row_sol[i] = j1;
            self.col_sol[j1] = Some(i);

            if let Some(i0) = i0 {
                if umin < usubmin {
                    // Displaced row is reprocessed immediately in this pass.
                    k -= 1;
                    self.free[k] = i0;
                } else {
                    self.free[num_free] = i0;
                    num_free += 1;
                }
            }
        }

        num_free
    }

    /// Smallest and second smallest reduced cost of row `i`, with their columns.
    ///
    /// Returns `(j1, umin, j2, usubmin)`. Ties go to the first column seen.
    fn two_smallest(&self, i: usize) -> (usize, f64, usize, f64) {
        let mut umin = self.reduced(i, 0);
        let mut j1 = 0;
        let mut usubmin = MAX_VALUE;
        let mut j2 = 0;

        for j in 1..self.dim {
            let h = self.reduced(i, j);
            if h < usubmin {
                if h >= umin {
                    usubmin = h;
                    j2 = j;
                } else {
                    usubmin = umin;
                    umin = h;
                    j2 = j1;
                    j1 = j;
                }
            }
        }

        (j1, umin, j2, usubmin)
    }
}
