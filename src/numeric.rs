//! Small vector and matrix helpers.
//!
//! Plain functions over slices. The solver only needs [`min_index_value`] and
//! [`transpose`]; the distance functions back [`crate::cost`].
//!
//! Every min/max search breaks ties by the first index encountered.

use crate::error::{Error, Result};

/// Index and value of the smallest element, or `None` for an empty slice.
///
/// ```rust
/// use lapjv::numeric::min_index_value;
///
/// assert_eq!(min_index_value(&[4.0, 1.0, 7.0, 1.0]), Some((1, 1.0)));
/// assert_eq!(min_index_value(&[]), None);
/// ```
pub fn min_index_value(values: &[f64]) -> Option<(usize, f64)> {
    let (first, rest) = values.split_first()?;
    let mut best = (0, *first);
    for (i, &v) in rest.iter().enumerate() {
        if v < best.1 {
            best = (i + 1, v);
        }
    }
    Some(best)
}

/// Index of the smallest element (0 for an empty slice).
pub fn min_index(values: &[f64]) -> usize {
    min_index_value(values).map_or(0, |(i, _)| i)
}

/// Index of the largest element (0 for an empty slice).
pub fn max_index(values: &[f64]) -> usize {
    let mut idx = 0;
    let mut max = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > max {
            max = v;
            idx = i;
        }
    }
    idx
}

/// Transpose a row-major matrix.
///
/// Assumes every row has the length of the first one.
pub fn transpose<R: AsRef<[f64]>>(rows: &[R]) -> Vec<Vec<f64>> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let n_cols = first.as_ref().len();
    let mut out = vec![Vec::with_capacity(rows.len()); n_cols];
    for row in rows {
        for (j, &x) in row.as_ref().iter().enumerate().take(n_cols) {
            out[j].push(x);
        }
    }
    out
}

fn check_dims(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

/// Inner product of two vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Squared Euclidean distance.
pub fn squared_euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum())
}

/// Euclidean (L2) distance.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    squared_euclidean_distance(a, b).map(f64::sqrt)
}

/// Manhattan (L1) distance.
pub fn manhattan_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_index_value_first_tie_wins() {
        assert_eq!(min_index_value(&[3.0, 2.0, 2.0, 5.0]), Some((1, 2.0)));
        assert_eq!(min_index_value(&[-1.0]), Some((0, -1.0)));
    }

    #[test]
    fn test_min_max_index_empty() {
        assert_eq!(min_index(&[]), 0);
        assert_eq!(max_index(&[]), 0);
        assert_eq!(max_index(&[1.0, 9.0, 9.0]), 1);
    }

    #[test]
    fn test_transpose() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let t = transpose(&m);
        assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(transpose(&t), m);

        let empty: Vec<Vec<f64>> = vec![];
        assert!(transpose(&empty).is_empty());
    }

    #[test]
    fn test_distances() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];
        assert_eq!(euclidean_distance(&a, &b).unwrap(), 5.0);
        assert_eq!(squared_euclidean_distance(&a, &b).unwrap(), 25.0);
        assert_eq!(manhattan_distance(&a, &b).unwrap(), 7.0);
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = dot(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 1,
                found: 2
            }
        );
        assert!(euclidean_distance(&[1.0, 2.0], &[]).is_err());
    }
}
