use crate::error::ShapeError;
use crate::math::matrix::Matrix;

/// Checks that `x`, `y` and `w` describe the same problem.
///
/// Nothing in the training path calls this; it is for callers who would
/// rather get an error than a panic from the matrix kernels.
pub fn check_dimensions(x: &Matrix, y: &[f64], w: &[f64]) -> Result<(), ShapeError> {
    if x.rows == 0 || x.cols == 0 {
        return Err(ShapeError::Empty);
    }
    if let Some((row, r)) = x.data.iter().enumerate().find(|(_, r)| r.len() != x.cols) {
        return Err(ShapeError::Ragged { row, got: r.len(), expected: x.cols });
    }
    if y.len() != x.rows {
        return Err(ShapeError::Mismatch { what: "targets", got: y.len(), expected: x.rows });
    }
    if w.len() != x.cols {
        return Err(ShapeError::Mismatch { what: "weights", got: w.len(), expected: x.cols });
    }
    Ok(())
}
