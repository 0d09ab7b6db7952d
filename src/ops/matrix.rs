//! Checked dense-matrix operations.
//!
//! Every function validates its preconditions and returns `Result` instead
//! of trusting the caller. The catalog boundary decides what a failure
//! looks like to the host; here a failure is just an [`OpError`].

use nalgebra::{ColPivQR, DMatrix, DVector, Dyn, Schur, Vector3};
use num_complex::Complex;

use crate::outcome::OpError;
use crate::wrap::dense::{DynComplexMatrix, DynMatrix};

const RANK_EPSILON: f64 = 1e-12;

fn require_same_shape(a: &DynMatrix, b: &DynMatrix) -> Result<(), OpError> {
    if a.rows() == b.rows() && a.cols() == b.cols() {
        Ok(())
    } else {
        Err(OpError::ShapeMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        })
    }
}

fn require_square(a: &DynMatrix) -> Result<(), OpError> {
    if a.rows() == a.cols() {
        Ok(())
    } else {
        Err(OpError::NonSquare {
            rows: a.rows(),
            cols: a.cols(),
        })
    }
}

/// Elementwise sum. Operand shapes must be identical.
pub fn try_add(a: &DynMatrix, b: &DynMatrix) -> Result<DynMatrix, OpError> {
    require_same_shape(a, b)?;
    Ok(DynMatrix::from(&a.matrix + &b.matrix))
}

/// Elementwise difference. Operand shapes must be identical.
pub fn try_sub(a: &DynMatrix, b: &DynMatrix) -> Result<DynMatrix, OpError> {
    require_same_shape(a, b)?;
    Ok(DynMatrix::from(&a.matrix - &b.matrix))
}

/// Division by a scalar. A divisor of exactly zero is rejected rather than
/// producing infinities.
pub fn try_scalar_divide(a: &DynMatrix, s: f64) -> Result<DynMatrix, OpError> {
    if s == 0.0 {
        return Err(OpError::ZeroDivisor);
    }
    Ok(DynMatrix::from(&a.matrix / s))
}

/// Matrix product. The left column count must equal the right row count.
pub fn try_multiply(a: &DynMatrix, b: &DynMatrix) -> Result<DynMatrix, OpError> {
    if a.cols() != b.rows() {
        return Err(OpError::InnerDimMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }
    Ok(DynMatrix::from(&a.matrix * &b.matrix))
}

/// Dot product of the operands' first columns. Keeps the historical
/// column-count equality check, and additionally requires the columns to
/// have the same length.
pub fn try_dot(a: &DynMatrix, b: &DynMatrix) -> Result<f64, OpError> {
    if a.is_empty() || b.is_empty() {
        return Err(OpError::EmptyOperand);
    }
    if a.cols() != b.cols() {
        return Err(OpError::ShapeMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }
    if a.rows() != b.rows() {
        return Err(OpError::LengthMismatch {
            left: a.rows(),
            right: b.rows(),
        });
    }
    Ok(a.matrix.column(0).dot(&b.matrix.column(0)))
}

fn first_column_vec3(a: &DynMatrix) -> Result<Vector3<f64>, OpError> {
    // Accepts a 3-vector or a 3x3 matrix, in which case the first column
    // stands in for the vector.
    if a.rows() == 3 && (a.cols() == 1 || a.cols() == 3) {
        Ok(Vector3::new(
            a.matrix[(0, 0)],
            a.matrix[(1, 0)],
            a.matrix[(2, 0)],
        ))
    } else {
        Err(OpError::NotVector3 {
            rows: a.rows(),
            cols: a.cols(),
        })
    }
}

/// Cross product of the operands' first columns, as a 3x1 matrix.
pub fn try_cross(a: &DynMatrix, b: &DynMatrix) -> Result<DynMatrix, OpError> {
    let av = first_column_vec3(a)?;
    let bv = first_column_vec3(b)?;
    let c = av.cross(&bv);
    Ok(DynMatrix::from(DMatrix::from_fn(3, 1, |r, _| c[r])))
}

/// Sum of the diagonal. Defined on square matrices only.
pub fn try_trace(a: &DynMatrix) -> Result<f64, OpError> {
    require_square(a)?;
    Ok(a.matrix.trace())
}

/// Smallest element with its position.
pub fn try_min(a: &DynMatrix) -> Result<(f64, usize, usize), OpError> {
    if a.is_empty() {
        return Err(OpError::EmptyOperand);
    }
    let mut best = (a.matrix[(0, 0)], 0, 0);
    for col in 0..a.cols() {
        for row in 0..a.rows() {
            let v = a.matrix[(row, col)];
            if v < best.0 {
                best = (v, row, col);
            }
        }
    }
    Ok(best)
}

/// Largest element with its position.
pub fn try_max(a: &DynMatrix) -> Result<(f64, usize, usize), OpError> {
    if a.is_empty() {
        return Err(OpError::EmptyOperand);
    }
    let mut best = (a.matrix[(0, 0)], 0, 0);
    for col in 0..a.cols() {
        for row in 0..a.rows() {
            let v = a.matrix[(row, col)];
            if v > best.0 {
                best = (v, row, col);
            }
        }
    }
    Ok(best)
}

/// Copy of a sub-block.
///
/// The bounds check is inherited unchanged from the original scripting
/// surface: starts must be strictly positive and the block must end
/// strictly before the last row and column, so blocks touching the first
/// row or column, or the last ones, are rejected.
pub fn try_block(
    a: &DynMatrix,
    start_row: i64,
    start_col: i64,
    block_rows: i64,
    block_cols: i64,
) -> Result<DynMatrix, OpError> {
    let rows = a.rows() as i64;
    let cols = a.cols() as i64;
    let ok = start_row > 0
        && start_row < rows
        && start_col > 0
        && start_col < cols
        && block_rows > 0
        && block_cols > 0
        && block_rows + start_row < rows
        && block_cols + start_col < cols;
    if !ok {
        return Err(OpError::BadBlock {
            start_row,
            start_col,
            block_rows,
            block_cols,
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let view = a.matrix.view(
        (start_row as usize, start_col as usize),
        (block_rows as usize, block_cols as usize),
    );
    Ok(DynMatrix::from(view.into_owned()))
}

/// Single row as a 1xN matrix.
pub fn try_row(a: &DynMatrix, index: i64) -> Result<DynMatrix, OpError> {
    if index < 0 || index >= a.rows() as i64 {
        return Err(OpError::OutOfBounds {
            row: index,
            col: 0,
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let r = index as usize;
    Ok(DynMatrix::from(DMatrix::from_fn(1, a.cols(), |_, c| {
        a.matrix[(r, c)]
    })))
}

/// Single column as an Nx1 matrix.
pub fn try_col(a: &DynMatrix, index: i64) -> Result<DynMatrix, OpError> {
    if index < 0 || index >= a.cols() as i64 {
        return Err(OpError::OutOfBounds {
            row: 0,
            col: index,
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let c = index as usize;
    Ok(DynMatrix::from(DMatrix::from_fn(a.rows(), 1, |r, _| {
        a.matrix[(r, c)]
    })))
}

fn check_bounds(a: &DynMatrix, row: i64, col: i64) -> Result<(usize, usize), OpError> {
    if row >= 0 && row < a.rows() as i64 && col >= 0 && col < a.cols() as i64 {
        Ok((row as usize, col as usize))
    } else {
        Err(OpError::OutOfBounds {
            row,
            col,
            rows: a.rows(),
            cols: a.cols(),
        })
    }
}

/// Element read.
pub fn try_get(a: &DynMatrix, row: i64, col: i64) -> Result<f64, OpError> {
    let (r, c) = check_bounds(a, row, col)?;
    Ok(a.matrix[(r, c)])
}

/// Copy of the matrix with one element replaced.
pub fn try_set(a: &DynMatrix, row: i64, col: i64, value: f64) -> Result<DynMatrix, OpError> {
    let (r, c) = check_bounds(a, row, col)?;
    let mut out = a.clone();
    out.matrix[(r, c)] = value;
    Ok(out)
}

/// Reshape that preserves the row-major element sequence. The target shape
/// must be positive and hold exactly the same number of elements.
pub fn try_reshape(a: &DynMatrix, rows: i64, cols: i64) -> Result<DynMatrix, OpError> {
    if rows <= 0 || cols <= 0 || rows as usize * cols as usize != a.len() {
        return Err(OpError::BadReshape {
            rows,
            cols,
            len: a.len(),
        });
    }
    Ok(DynMatrix::from_row_major(
        &a.to_row_major(),
        rows as usize,
        cols as usize,
    ))
}

/// Solve `A x = b` against the first column of `b` by column-pivoted QR.
///
/// Keeps the historical requirement that `b` has as many rows as `A` has
/// columns; together with the structural row check this restricts the
/// entry point to square systems.
pub fn try_qr_solve(a: &DynMatrix, b: &DynMatrix) -> Result<DynMatrix, OpError> {
    if b.is_empty() {
        return Err(OpError::EmptyOperand);
    }
    if b.rows() != a.cols() {
        return Err(OpError::ShapeMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }
    if b.rows() != a.rows() {
        return Err(OpError::LengthMismatch {
            left: a.rows(),
            right: b.rows(),
        });
    }
    let qr: ColPivQR<f64, Dyn, Dyn> = a.matrix.clone().col_piv_qr();
    let rhs: DVector<f64> = b.matrix.column(0).into_owned();
    match qr.solve(&rhs) {
        Some(x) => Ok(DynMatrix::from(x)),
        None => Err(OpError::Singular),
    }
}

fn schur_eigenvalues(a: &DynMatrix) -> Result<Vec<Complex<f64>>, OpError> {
    require_square(a)?;
    let n = a.rows();
    if n == 0 {
        return Ok(Vec::new());
    }
    let schur = Schur::try_new(a.matrix.clone(), f64::EPSILON, 40 * n)
        .ok_or(OpError::DidNotConverge)?;
    Ok(schur.complex_eigenvalues().iter().copied().collect())
}

/// Eigenvalues as an Nx1 complex matrix, via the real Schur form.
pub fn try_eigenvalues(a: &DynMatrix) -> Result<DynComplexMatrix, OpError> {
    let values = schur_eigenvalues(a)?;
    let n = values.len();
    Ok(DynComplexMatrix::from(DMatrix::from_fn(n, 1, |r, _| {
        values[r]
    })))
}

/// Unit eigenvector for one eigenvalue: a right-singular vector of
/// `A - lambda I` from the small end of its singular spectrum.
///
/// `occurrence` is how many earlier eigenvalues coincide with this one. A
/// repeated eigenvalue has a null space wider than one vector, and taking
/// the next-smallest singular direction per occurrence keeps the returned
/// columns linearly independent.
fn eigenvector_for(
    cm: &DMatrix<Complex<f64>>,
    lambda: Complex<f64>,
    occurrence: usize,
) -> DVector<Complex<f64>> {
    let n = cm.nrows();
    let shifted = cm - DMatrix::from_diagonal_element(n, n, lambda);
    let svd = shifted.svd(false, true);
    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&i, &j| svd.singular_values[i].total_cmp(&svd.singular_values[j]));
    let k = order[occurrence.min(order.len() - 1)];
    let v_t = match svd.v_t {
        Some(v_t) => v_t,
        None => return DVector::zeros(n),
    };
    let v: DVector<Complex<f64>> = v_t.row(k).adjoint();
    let norm = v.norm();
    if norm > 0.0 {
        v.unscale(norm)
    } else {
        v
    }
}

/// Eigenvectors as the columns of an NxN complex matrix, ordered to match
/// [`try_eigenvalues`].
pub fn try_eigenvectors(a: &DynMatrix) -> Result<DynComplexMatrix, OpError> {
    let values = schur_eigenvalues(a)?;
    let n = values.len();
    let cm = a.matrix.map(|x| Complex::new(x, 0.0));
    let mut out = DMatrix::from_element(n, n, Complex::new(0.0, 0.0));
    for (j, &lambda) in values.iter().enumerate() {
        let tol = f64::EPSILON.sqrt() * (1.0 + lambda.norm());
        let occurrence = values[..j]
            .iter()
            .filter(|prev| (**prev - lambda).norm() <= tol)
            .count();
        let v = eigenvector_for(&cm, lambda, occurrence);
        for i in 0..n {
            out[(i, j)] = v[i];
        }
    }
    Ok(DynComplexMatrix::from(out))
}

/// Determinant. Defined on square matrices only.
pub fn try_determinant(a: &DynMatrix) -> Result<f64, OpError> {
    require_square(a)?;
    Ok(a.matrix.determinant())
}

/// Inverse, rejected when the determinant is exactly zero.
pub fn try_inverse(a: &DynMatrix) -> Result<DynMatrix, OpError> {
    require_square(a)?;
    if a.matrix.determinant() == 0.0 {
        return Err(OpError::Singular);
    }
    match a.matrix.clone().try_inverse() {
        Some(inv) => Ok(DynMatrix::from(inv)),
        None => Err(OpError::Singular),
    }
}

/// Numerical rank, from the singular values.
pub fn rank(a: &DynMatrix) -> usize {
    if a.is_empty() {
        return 0;
    }
    a.matrix.rank(RANK_EPSILON)
}
