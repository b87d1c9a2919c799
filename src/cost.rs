//! Cost matrices from point sets.
//!
//! The usual way an assignment problem shows up: two sets of points (detections
//! and tracks, old and new cluster centroids, workers and jobs embedded in some
//! feature space) and a pairwise distance. Row `i` of the cost matrix is
//! `sources[i]`, column `j` is `targets[j]`.
//!
//! ```rust
//! use lapjv::cost::{assign_points, Distance};
//!
//! let tracks = vec![vec![0.0, 0.0], vec![10.0, 10.0]];
//! let detections = vec![vec![9.5, 10.2], vec![0.3, -0.1], vec![50.0, 50.0]];
//!
//! let a = assign_points(&tracks, &detections, Distance::Euclidean)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(a.col_index, vec![1, 0]);
//! ```
//!
//! With the `parallel` feature, rows are computed on the rayon pool. The solve
//! itself stays single-threaded.

use crate::assignment::{solve_array, Assignment};
use crate::error::{Error, Result};
use crate::numeric;
use ndarray::Array2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pairwise cost between a source and a target point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distance {
    /// L2 distance.
    #[default]
    Euclidean,
    /// Squared L2 distance. Same optimum as k-means' objective.
    SquaredEuclidean,
    /// L1 distance.
    Manhattan,
    /// Negated inner product, so that minimizing cost maximizes similarity.
    NegativeDot,
}

impl Distance {
    /// Cost between two points of equal dimension.
    pub fn cost(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        match self {
            Distance::Euclidean => numeric::euclidean_distance(a, b),
            Distance::SquaredEuclidean => numeric::squared_euclidean_distance(a, b),
            Distance::Manhattan => numeric::manhattan_distance(a, b),
            Distance::NegativeDot => numeric::dot(a, b).map(|d| -d),
        }
    }
}

fn check_dimension(points: &[Vec<f64>], d: usize) -> Result<()> {
    match points.iter().find(|p| p.len() != d) {
        Some(p) => Err(Error::DimensionMismatch {
            expected: d,
            found: p.len(),
        }),
        None => Ok(()),
    }
}

/// Build the `sources.len() × targets.len()` cost matrix.
///
/// All points must share one dimension.
pub fn cost_matrix(
    sources: &[Vec<f64>],
    targets: &[Vec<f64>],
    distance: Distance,
) -> Result<Array2<f64>> {
    let d = sources
        .first()
        .or_else(|| targets.first())
        .map_or(0, Vec::len);
    check_dimension(sources, d)?;
    check_dimension(targets, d)?;

    let n = sources.len();
    let m = targets.len();

    let row = |a: &Vec<f64>| -> Result<Vec<f64>> {
        targets.iter().map(|b| distance.cost(a, b)).collect()
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = sources.par_iter().map(row).collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = sources.iter().map(row).collect::<Result<_>>()?;

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n, m), flat).map_err(|e| Error::Other(e.to_string()))
}

/// Match `sources` to `targets` minimizing the summed `distance`.
///
/// Returns `Ok(None)` if either set is empty.
pub fn assign_points(
    sources: &[Vec<f64>],
    targets: &[Vec<f64>],
    distance: Distance,
) -> Result<Option<Assignment>> {
    let costs = cost_matrix(sources, targets, distance)?;
    log::debug!(
        "cost: {}x{} {:?} matrix built",
        costs.nrows(),
        costs.ncols(),
        distance
    );
    solve_array(costs.view())
}
