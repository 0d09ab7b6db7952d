//! Host-facing operation catalog.
//!
//! This is the boundary the scripting host calls through. It never returns
//! an error: any precondition or numerical failure collapses into the
//! legacy default for the operation's output type, usually the null 0x0
//! matrix, a zero scalar, or the unmodified input. The absorbed failure is
//! logged at debug level so misbehaving graphs can still be diagnosed.
//!
//! The two eigen-decomposition entry points additionally surface an
//! [`OpStatus`] so the host can branch on success or failure.

use log::debug;
use num_complex::Complex;

use crate::ops::{array, matrix};
use crate::outcome::{OpError, OpStatus};
use crate::wrap::dense::{DynArray, DynComplexMatrix, DynMatrix, DynVector};

pub use crate::ops::bridge::*;

fn absorb<T: Default>(op: &str, r: Result<T, OpError>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => {
            debug!("{op}: {e}; substituting the default output");
            T::default()
        }
    }
}

fn absorb_status(
    op: &str,
    r: Result<DynComplexMatrix, OpError>,
) -> (OpStatus, DynComplexMatrix) {
    let status = OpStatus::from(&r);
    let out = absorb(op, r);
    (status, out)
}

// constructors

/// Matrix from a row-major flat array. Negative dimensions yield the null
/// matrix.
pub fn make_matrix(data: &[f64], rows: i64, cols: i64) -> DynMatrix {
    if rows < 0 || cols < 0 {
        debug!("make_matrix: negative shape {rows}x{cols}; substituting the null matrix");
        return DynMatrix::null();
    }
    DynMatrix::from_row_major(data, rows as usize, cols as usize)
}

/// Column vector from a flat array, promoted to an Nx1 matrix.
pub fn make_vector(data: &[f64], rows: i64) -> DynMatrix {
    if rows < 0 {
        debug!("make_vector: negative length {rows}; substituting the null matrix");
        return DynMatrix::null();
    }
    DynMatrix::from(DynVector::from_slice(data, rows as usize))
}

/// Matrix of uniform random elements in `[0, 1)`.
pub fn make_random_matrix(rows: i64, cols: i64) -> DynMatrix {
    if rows < 0 || cols < 0 {
        debug!("make_random_matrix: negative shape {rows}x{cols}; substituting the null matrix");
        return DynMatrix::null();
    }
    DynMatrix::random(rows as usize, cols as usize)
}

/// Random column vector, promoted to an Nx1 matrix.
pub fn make_random_vector(rows: i64) -> DynMatrix {
    if rows < 0 {
        debug!("make_random_vector: negative length {rows}; substituting the null matrix");
        return DynMatrix::null();
    }
    DynMatrix::from(DynVector::random(rows as usize))
}

/// The 0x0 matrix used as the failure value across the catalog.
pub fn null_matrix() -> DynMatrix {
    DynMatrix::null()
}

/// Complex matrix from a row-major flat array.
pub fn make_complex_matrix(data: &[Complex<f64>], rows: i64, cols: i64) -> DynComplexMatrix {
    if rows < 0 || cols < 0 {
        debug!("make_complex_matrix: negative shape {rows}x{cols}; substituting the null matrix");
        return DynComplexMatrix::null();
    }
    DynComplexMatrix::from_row_major(data, rows as usize, cols as usize)
}

pub fn matrix_to_array(a: &DynMatrix) -> Vec<f64> {
    a.to_row_major()
}

pub fn complex_matrix_to_array(a: &DynComplexMatrix) -> Vec<Complex<f64>> {
    a.to_row_major()
}

/// Real matrix of the imaginary parts.
pub fn strip_real(a: &DynComplexMatrix) -> DynMatrix {
    a.strip_real()
}

/// Real matrix of the real parts.
pub fn strip_imaginary(a: &DynComplexMatrix) -> DynMatrix {
    a.strip_imaginary()
}

// dense matrix operations

pub fn add(a: &DynMatrix, b: &DynMatrix) -> DynMatrix {
    absorb("add", matrix::try_add(a, b))
}

pub fn subtract(a: &DynMatrix, b: &DynMatrix) -> DynMatrix {
    absorb("subtract", matrix::try_sub(a, b))
}

pub fn scalar_multiply(s: f64, a: &DynMatrix) -> DynMatrix {
    DynMatrix::from(&a.matrix * s)
}

pub fn scalar_divide(a: &DynMatrix, s: f64) -> DynMatrix {
    absorb("scalar_divide", matrix::try_scalar_divide(a, s))
}

pub fn transpose(a: &DynMatrix) -> DynMatrix {
    DynMatrix::from(a.matrix.transpose())
}

/// Conjugate transpose. Real-valued, so this is the plain transpose.
pub fn adjoint(a: &DynMatrix) -> DynMatrix {
    DynMatrix::from(a.matrix.adjoint())
}

pub fn conjugate(a: &DynComplexMatrix) -> DynComplexMatrix {
    DynComplexMatrix::from(a.matrix.conjugate())
}

pub fn multiply(a: &DynMatrix, b: &DynMatrix) -> DynMatrix {
    absorb("multiply", matrix::try_multiply(a, b))
}

pub fn dot_product(a: &DynMatrix, b: &DynMatrix) -> f64 {
    absorb("dot_product", matrix::try_dot(a, b))
}

pub fn cross_product(a: &DynMatrix, b: &DynMatrix) -> DynMatrix {
    absorb("cross_product", matrix::try_cross(a, b))
}

pub fn rows(a: &DynMatrix) -> i64 {
    a.rows() as i64
}

pub fn columns(a: &DynMatrix) -> i64 {
    a.cols() as i64
}

pub fn size(a: &DynMatrix) -> i64 {
    a.len() as i64
}

pub fn sum(a: &DynMatrix) -> f64 {
    a.matrix.sum()
}

pub fn product(a: &DynMatrix) -> f64 {
    a.matrix.product()
}

pub fn mean(a: &DynMatrix) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    a.matrix.mean()
}

pub fn trace(a: &DynMatrix) -> f64 {
    absorb("trace", matrix::try_trace(a))
}

/// Smallest element with its position; `(0, 0, 0)` for an empty matrix.
pub fn min(a: &DynMatrix) -> (f64, i64, i64) {
    match matrix::try_min(a) {
        Ok((v, r, c)) => (v, r as i64, c as i64),
        Err(e) => {
            debug!("min: {e}; substituting zeros");
            (0.0, 0, 0)
        }
    }
}

/// Largest element with its position; `(0, 0, 0)` for an empty matrix.
pub fn max(a: &DynMatrix) -> (f64, i64, i64) {
    match matrix::try_max(a) {
        Ok((v, r, c)) => (v, r as i64, c as i64),
        Err(e) => {
            debug!("max: {e}; substituting zeros");
            (0.0, 0, 0)
        }
    }
}

pub fn block(
    a: &DynMatrix,
    start_row: i64,
    start_col: i64,
    block_rows: i64,
    block_cols: i64,
) -> DynMatrix {
    absorb(
        "block",
        matrix::try_block(a, start_row, start_col, block_rows, block_cols),
    )
}

pub fn row(a: &DynMatrix, index: i64) -> DynMatrix {
    absorb("row", matrix::try_row(a, index))
}

pub fn column(a: &DynMatrix, index: i64) -> DynMatrix {
    absorb("column", matrix::try_col(a, index))
}

/// Element read; 0 when the index is out of bounds.
pub fn get_element(a: &DynMatrix, row: i64, col: i64) -> f64 {
    absorb("get_element", matrix::try_get(a, row, col))
}

/// Copy with one element replaced; the null matrix when the index is out
/// of bounds.
pub fn set_element(a: &DynMatrix, row: i64, col: i64, value: f64) -> DynMatrix {
    absorb("set_element", matrix::try_set(a, row, col, value))
}

pub fn reshape(a: &DynMatrix, rows: i64, cols: i64) -> DynMatrix {
    absorb("reshape", matrix::try_reshape(a, rows, cols))
}

/// Solve `A x = b` against the first column of `b` by column-pivoted QR.
pub fn qr_solve(a: &DynMatrix, b: &DynMatrix) -> DynMatrix {
    absorb("qr_solve", matrix::try_qr_solve(a, b))
}

pub fn eigenvalues(a: &DynMatrix) -> (OpStatus, DynComplexMatrix) {
    absorb_status("eigenvalues", matrix::try_eigenvalues(a))
}

pub fn eigenvectors(a: &DynMatrix) -> (OpStatus, DynComplexMatrix) {
    absorb_status("eigenvectors", matrix::try_eigenvectors(a))
}

pub fn determinant(a: &DynMatrix) -> f64 {
    absorb("determinant", matrix::try_determinant(a))
}

pub fn inverse(a: &DynMatrix) -> DynMatrix {
    absorb("inverse", matrix::try_inverse(a))
}

pub fn rank(a: &DynMatrix) -> i64 {
    matrix::rank(a) as i64
}

// array operations

pub fn array_add(a: &DynArray, b: &DynArray) -> DynArray {
    absorb("array_add", array::try_add(a, b))
}

pub fn array_subtract(a: &DynArray, b: &DynArray) -> DynArray {
    absorb("array_subtract", array::try_sub(a, b))
}

pub fn array_multiply(a: &DynArray, b: &DynArray) -> DynArray {
    absorb("array_multiply", array::try_mul(a, b))
}

pub fn array_min(a: &DynArray, b: &DynArray) -> DynArray {
    absorb("array_min", array::try_min(a, b))
}

pub fn array_max(a: &DynArray, b: &DynArray) -> DynArray {
    absorb("array_max", array::try_max(a, b))
}

pub fn array_scalar_multiply(s: f64, a: &DynArray) -> DynArray {
    array::scalar_mul(a, s)
}

pub fn array_scalar_add(a: &DynArray, s: f64) -> DynArray {
    array::scalar_add(a, s)
}

pub fn array_scalar_subtract(a: &DynArray, s: f64) -> DynArray {
    array::scalar_sub(a, s)
}

pub fn array_abs(a: &DynArray) -> DynArray {
    array::abs(a)
}

/// Element read; 0 when the index is out of bounds.
pub fn array_get(a: &DynArray, index: i64) -> f64 {
    absorb("array_get", array::try_get(a, index))
}

/// In-place element write; an out-of-bounds index leaves the array
/// unchanged.
pub fn array_set(a: &mut DynArray, index: i64, value: f64) {
    if let Err(e) = array::try_set(a, index, value) {
        debug!("array_set: {e}; leaving the array unchanged");
    }
}
