//! Dense dynamic wrappers.
//!
//! Each wrapper owns exactly one library value and converts to and from the
//! host's flat row-major arrays. The host addresses elements in row-major
//! order, so flat index `i` of an `r x c` matrix always maps to
//! `(i / c, i % c)` regardless of the library's internal storage order.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex;
use num_traits::Zero;
use rand::Rng;
use std::fmt;

/// Dynamically sized dense matrix.
///
/// The 0x0 ("null") matrix doubles as the canonical failed-operation value;
/// see [`DynMatrix::is_null`].
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix {
    pub matrix: DMatrix<f64>,
}

impl DynMatrix {
    /// The canonical 0x0 matrix.
    pub fn null() -> Self {
        Self {
            matrix: DMatrix::zeros(0, 0),
        }
    }

    /// Build from a row-major flat slice. Missing trailing elements are
    /// zero-filled, matching the host's partial-array semantics.
    pub fn from_row_major(data: &[f64], rows: usize, cols: usize) -> Self {
        let mut matrix = DMatrix::zeros(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                let i = col + row * cols;
                if i >= data.len() {
                    break;
                }
                matrix[(row, col)] = data[i];
            }
        }
        Self { matrix }
    }

    /// Matrix with every element drawn uniformly from `[0, 1)`.
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            matrix: DMatrix::from_fn(rows, cols, |_, _| rng.gen::<f64>()),
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn is_null(&self) -> bool {
        self.rows() == 0 && self.cols() == 0
    }

    /// Elements in row-major order.
    pub fn to_row_major(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len());
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                out.push(self.matrix[(row, col)]);
            }
        }
        out
    }
}

impl Default for DynMatrix {
    fn default() -> Self {
        Self::null()
    }
}

impl From<DMatrix<f64>> for DynMatrix {
    fn from(matrix: DMatrix<f64>) -> Self {
        Self { matrix }
    }
}

impl From<DVector<f64>> for DynMatrix {
    fn from(vector: DVector<f64>) -> Self {
        let matrix = DMatrix::from_fn(vector.len(), 1, |r, _| vector[r]);
        Self { matrix }
    }
}

impl fmt::Display for DynMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for row in 0..self.rows() {
            write!(f, "\n [")?;
            for col in 0..self.cols() {
                let sep = if col + 1 < self.cols() { ", " } else { "" };
                write!(f, "{}{}", self.matrix[(row, col)], sep)?;
            }
            write!(f, "]")?;
        }
        write!(f, "\n}}")
    }
}

/// Dynamically sized complex-valued dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DynComplexMatrix {
    pub matrix: DMatrix<Complex<f64>>,
}

impl DynComplexMatrix {
    pub fn null() -> Self {
        Self {
            matrix: DMatrix::zeros(0, 0),
        }
    }

    /// Build from a row-major flat slice, zero-filling missing elements.
    pub fn from_row_major(data: &[Complex<f64>], rows: usize, cols: usize) -> Self {
        let mut matrix = DMatrix::from_element(rows, cols, Complex::zero());
        for row in 0..rows {
            for col in 0..cols {
                let i = col + row * cols;
                if i >= data.len() {
                    break;
                }
                matrix[(row, col)] = data[i];
            }
        }
        Self { matrix }
    }

    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn is_null(&self) -> bool {
        self.rows() == 0 && self.cols() == 0
    }

    pub fn to_row_major(&self) -> Vec<Complex<f64>> {
        let mut out = Vec::with_capacity(self.matrix.len());
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                out.push(self.matrix[(row, col)]);
            }
        }
        out
    }

    /// Drop the real parts, keeping a real matrix of the imaginary ones.
    pub fn strip_real(&self) -> DynMatrix {
        DynMatrix {
            matrix: self.matrix.map(|c| c.im),
        }
    }

    /// Drop the imaginary parts, keeping a real matrix of the real ones.
    pub fn strip_imaginary(&self) -> DynMatrix {
        DynMatrix {
            matrix: self.matrix.map(|c| c.re),
        }
    }
}

impl Default for DynComplexMatrix {
    fn default() -> Self {
        Self::null()
    }
}

impl From<DMatrix<Complex<f64>>> for DynComplexMatrix {
    fn from(matrix: DMatrix<Complex<f64>>) -> Self {
        Self { matrix }
    }
}

impl From<DVector<Complex<f64>>> for DynComplexMatrix {
    fn from(vector: DVector<Complex<f64>>) -> Self {
        let matrix = DMatrix::from_fn(vector.len(), 1, |r, _| vector[r]);
        Self { matrix }
    }
}

/// Dynamically sized column vector.
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector {
    pub vector: DVector<f64>,
}

impl Default for DynVector {
    fn default() -> Self {
        Self {
            vector: DVector::zeros(0),
        }
    }
}

impl DynVector {
    /// Build from a slice, zero-filling up to `rows`.
    pub fn from_slice(data: &[f64], rows: usize) -> Self {
        let mut vector = DVector::zeros(rows);
        for row in 0..rows.min(data.len()) {
            vector[row] = data[row];
        }
        Self { vector }
    }

    /// Vector with every element drawn uniformly from `[0, 1)`.
    pub fn random(rows: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            vector: DVector::from_fn(rows, |_, _| rng.gen::<f64>()),
        }
    }

    pub fn len(&self) -> usize {
        self.vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}

impl From<DynVector> for DynMatrix {
    fn from(v: DynVector) -> Self {
        DynMatrix::from(v.vector)
    }
}

/// 1-D numeric sequence for elementwise arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct DynArray {
    pub values: DVector<f64>,
}

impl Default for DynArray {
    fn default() -> Self {
        Self {
            values: DVector::zeros(0),
        }
    }
}

impl DynArray {
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            values: DVector::from_column_slice(data),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

impl fmt::Display for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.len() {
            let sep = if i + 1 < self.len() { ", " } else { "" };
            write!(f, "{}{}", self.values[i], sep)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn row_major_index_maps_to_row_and_col() {
        let m = DynMatrix::from_row_major(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(m.matrix[(0, 0)], 1.0);
        assert_eq!(m.matrix[(0, 2)], 3.0);
        assert_eq!(m.matrix[(1, 0)], 4.0);
        assert_eq!(m.matrix[(1, 2)], 6.0);
    }

    #[test]
    fn short_input_is_zero_filled() {
        let m = DynMatrix::from_row_major(&[1.0, 2.0], 2, 2);
        assert_eq!(m.matrix[(0, 1)], 2.0);
        assert_eq!(m.matrix[(1, 0)], 0.0);
        assert_eq!(m.matrix[(1, 1)], 0.0);
    }

    #[test]
    fn row_major_roundtrip() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = DynMatrix::from_row_major(&data, 3, 2);
        assert_eq!(m.to_row_major(), data);
    }

    #[test]
    fn null_matrix_is_default_and_empty() {
        let m = DynMatrix::default();
        assert!(m.is_null());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn random_matrix_spans_unit_interval() {
        let m = DynMatrix::random(8, 8);
        assert_eq!((m.rows(), m.cols()), (8, 8));
        for v in m.to_row_major() {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn display_renders_bracketed_rows() {
        let m = DynMatrix::from_row_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_eq!(m.to_string(), "{\n [1, 2]\n [3, 4]\n}");
    }

    #[test]
    fn strip_keeps_one_component() {
        let data = vec![
            Complex::new(1.0, -1.0),
            Complex::new(2.0, -2.0),
            Complex::new(3.0, -3.0),
            Complex::new(4.0, -4.0),
        ];
        let m = DynComplexMatrix::from_row_major(&data, 2, 2);
        assert_eq!(m.strip_imaginary().to_row_major(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.strip_real().to_row_major(), vec![-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn complex_row_major_roundtrip() {
        let data = vec![
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
            Complex::new(5.0, 6.0),
            Complex::new(7.0, 8.0),
        ];
        let m = DynComplexMatrix::from_row_major(&data, 2, 2);
        assert_eq!(m.to_row_major(), data);
    }

    #[test]
    fn vector_promotes_to_single_column_matrix() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0], 3);
        let m = DynMatrix::from(v);
        assert_eq!((m.rows(), m.cols()), (3, 1));
        assert_abs_diff_eq!(m.matrix[(2, 0)], 3.0);
    }

    #[test]
    fn vector_zero_fills_past_input() {
        let v = DynVector::from_slice(&[1.0], 3);
        assert_eq!(v.vector.as_slice(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn array_display_is_flat() {
        let a = DynArray::from_slice(&[1.0, 2.5, 3.0]);
        assert_eq!(a.to_string(), "[1, 2.5, 3]");
    }
}
