//! Shortest augmenting path phase.
//!
//! For every row still on the free list, grow a Dijkstra tree over columns with
//! reduced costs `c[i][j] - v[j]` as edge weights until an unassigned column is
//! reached. Potentials of the scanned columns are then raised so reduced costs
//! stay non-negative, and the assignment is flipped along the path.
//!
//! `col_list` holds a permutation of the columns split in three zones by two
//! cursors `low ≤ up`:
//!
//! ```text
//! [0, low)    scanned: shortest distance final
//! [low, up)   labeled: distance == min_h, waiting to be scanned
//! [up, dim)   unlabeled
//! ```
//!
//! Moving a column between zones is a single swap, so each scan step is O(dim)
//! and a full phase is O(dim³).

use super::state::LapState;

/// Scratch arrays for the path search, allocated once per solve and reset for
/// every free row.
#[derive(Debug, Clone)]
struct PathScratch {
    col_list: Vec<usize>,
    /// Row from which each column was last relaxed.
    pred: Vec<usize>,
    /// Tentative reduced distance from the free row to each column.
    d: Vec<f64>,
}

impl PathScratch {
    fn new(dim: usize) -> Self {
        Self {
            col_list: vec![0; dim],
            pred: vec![0; dim],
            d: vec![0.0; dim],
        }
    }

    fn reset(&mut self, state: &LapState<'_>, free_row: usize) {
        for j in 0..state.dim {
            self.d[j] = state.reduced(free_row, j);
            self.pred[j] = free_row;
            self.col_list[j] = j;
        }
    }
}

/// Where a path search stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AugmentingPath {
    /// Unassigned column reached by the search.
    end: usize,
    /// Length of the scanned prefix of `col_list`.
    scanned: usize,
    /// Distance of the final frontier.
    min_h: f64,
}

impl LapState<'_> {
    /// Assign every row in `free[..num_free]`.
    pub(crate) fn augment(&mut self, num_free: usize) {
        let mut scratch = PathScratch::new(self.dim);

        for f in 0..num_free {
            let free_row = self.free[f];
            scratch.reset(self, free_row);

            let path = self.find_augmenting_path(&mut scratch);
            log::trace!(
                "lapjv: row {free_row} augments to column {} (scanned {}, min_h {})",
                path.end,
                path.scanned,
                path.min_h
            );

            for &j in &scratch.col_list[..path.scanned] {
                self.v[j] += scratch.d[j] - path.min_h;
            }

            let mut end = path.end;
            loop {
                let i = scratch.pred[end];
                self.col_sol[end] = Some(i);
                std::mem::swap(&mut end, &mut self.row_sol[i]);
                if i == free_row {
                    break;
                }
            }
        }
    }

    fn find_augmenting_path(&self, s: &mut PathScratch) -> AugmentingPath {
        let dim = self.dim;
        let mut low = 0;
        let mut up = 0;
        let mut scanned = 0;
        let mut min_h = 0.0;

        loop {
            if up == low {
                // Nothing labeled: pull every unlabeled column at the new
                // minimum distance into the labeled zone.
                scanned = low;
                min_h = s.d[s.col_list[up]];
                up += 1;

                for k in up..dim {
                    let j = s.col_list[k];
                    let h = s.d[j];
                    if h <= min_h {
                        if h < min_h {
                            up = low;
                            min_h = h;
                        }
                        s.col_list[k] = s.col_list[up];
                        s.col_list[up] = j;
                        up += 1;
                    }
                }

                for &j in &s.col_list[low..up] {
                    if self.col_sol[j].is_none() {
                        return AugmentingPath {
                            end: j,
                            scanned,
                            min_h,
                        };
                    }
                }
            }

            let j1 = s.col_list[low];
            low += 1;
            // Labeled columns are assigned; an unassigned one ends the path.
            let Some(i) = self.col_sol[j1] else {
                return AugmentingPath {
                    end: j1,
                    scanned,
                    min_h,
                };
            };

            let h = self.reduced(i, j1) - min_h;
            for k in up..dim {
                let j = s.col_list[k];
                let v2 = self.reduced(i, j) - h;
                if v2 < s.d[j] {
                    s.pred[j] = i;
                    if v2 == min_h {
                        if self.col_sol[j].is_none() {
                            return AugmentingPath {
                                end: j,
                                scanned,
                                min_h,
                            };
                        }
                        s.col_list[k] = s.col_list[up];
                        s.col_list[up] = j;
                        up += 1;
                    }
                    s.d[j] = v2;
                }
            }
        }
    }
}
