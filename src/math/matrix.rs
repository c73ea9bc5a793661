use serde::{Serialize, Deserialize};

use crate::error::ShapeError;

/// Row-major feature matrix: one row per sample, one column per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Wraps `data` without checking it. Column count is taken from the first row.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data
        }
    }

    /// Like `from_data`, but rejects empty and ragged input.
    pub fn try_from_data(data: Vec<Vec<f64>>) -> Result<Matrix, ShapeError> {
        let expected = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ShapeError::Empty),
        };

        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(ShapeError::Ragged { row, got: r.len(), expected });
        }

        Ok(Matrix::from_data(data))
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    /// `X·w + b`, with `b` broadcast over every row.
    ///
    /// # Panics
    /// Panics if `w.len() != self.cols`.
    pub fn affine(&self, w: &[f64], b: f64) -> Vec<f64> {
        if w.len() != self.cols {
            panic!("Matrix and vector are of incorrect sizes")
        }

        self.data.iter()
            .map(|row| row.iter().zip(w).map(|(x, w)| x * w).sum::<f64>() + b)
            .collect()
    }

    /// `Xᵀ·e` without materialising the transpose.
    ///
    /// # Panics
    /// Panics if `e.len() != self.rows`.
    pub fn transpose_dot(&self, e: &[f64]) -> Vec<f64> {
        if e.len() != self.rows {
            panic!("Matrix and vector are of incorrect sizes")
        }

        let mut res = vec![0.0; self.cols];
        for (row, e) in self.data.iter().zip(e) {
            for (acc, x) in res.iter_mut().zip(row) {
                *acc += x * e;
            }
        }

        res
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
