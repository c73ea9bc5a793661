use std::fmt;

/// Shape problems detected by the optional up-front checks.
///
/// The numeric core never returns this: a mismatch reaching `cost`, `gradient`
/// or the training loop panics inside the matrix kernels instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The matrix has no rows or no columns.
    Empty,

    /// A row does not have as many entries as the first one.
    Ragged {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// Two dimensions that must agree do not (e.g. "targets", "weights").
    Mismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "matrix must have at least one row and one column"),
            ShapeError::Ragged { row, got, expected } => {
                write!(f, "row {row} has {got} columns, expected {expected}")
            }
            ShapeError::Mismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
