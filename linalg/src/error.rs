use std::error::Error;
use std::fmt;

/// Errors raised when runtime data does not fit a compile-time shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinalgError {
    /// More initial values than the vector has components.
    TooManyComponents { expected: usize, actual: usize },
    /// More initial rows than the matrix has rows.
    TooManyRows { expected: usize, actual: usize },
    /// An initial row longer than the matrix has columns.
    TooManyColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },
    IndexOutOfRange { index: usize, len: usize },
    ElementOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::TooManyComponents { expected, actual } => write!(
                f,
                "too many components: vector holds {} but {} were given",
                expected, actual
            ),
            LinalgError::TooManyRows { expected, actual } => write!(
                f,
                "too many rows: matrix holds {} but {} were given",
                expected, actual
            ),
            LinalgError::TooManyColumns {
                row,
                expected,
                actual,
            } => write!(
                f,
                "too many columns in row {}: matrix holds {} but {} were given",
                row, expected, actual
            ),
            LinalgError::IndexOutOfRange { index, len } => write!(
                f,
                "index {} out of range for vector of length {}",
                index, len
            ),
            LinalgError::ElementOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "element ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
        }
    }
}

impl Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::LinalgError;

    #[test]
    fn test_display_carries_sizes() {
        let err = LinalgError::TooManyColumns {
            row: 1,
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "too many columns in row 1: matrix holds 3 but 4 were given"
        );
        let err = LinalgError::TooManyComponents {
            expected: 2,
            actual: 3,
        };
        assert!(err.to_string().contains("holds 2 but 3"));
    }
}
