use core::fmt;

/// Result alias for `lapjv`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the assignment solver and its numeric helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A cost matrix row does not have the same length as the first row.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cost entry is NaN or infinite.
    NonFiniteCost {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// Vector dimension mismatch.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "ragged cost matrix: row {row} has {found} columns, expected {expected}"
                )
            }
            Error::NonFiniteCost { row, col } => {
                write!(f, "non-finite cost at ({row}, {col})")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_location() {
        let e = Error::RaggedRow {
            row: 2,
            expected: 3,
            found: 1,
        };
        let s = e.to_string();
        assert!(s.contains("row 2"));
        assert!(s.contains("expected 3"));

        let e = Error::NonFiniteCost { row: 1, col: 4 };
        assert_eq!(e.to_string(), "non-finite cost at (1, 4)");
    }
}
