//! Failure tags for the checked operation layer.
//!
//! Every validated operation returns `Result<_, OpError>`. The catalog
//! boundary absorbs the error into the legacy default value (null matrix,
//! zero scalar, unmodified input) so that nothing ever propagates into the
//! scripting host; internal callers and tests can inspect the tag directly.

use thiserror::Error;

/// Precondition or numerical failure of a single operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    /// Operand shapes must be identical.
    #[error("shape mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Left column count must equal right row count.
    #[error("inner dimensions disagree: left has {left_cols} columns, right has {right_rows} rows")]
    InnerDimMismatch { left_cols: usize, right_rows: usize },

    /// 1-D operands must have the same length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Element index outside `[0, count)`.
    #[error("index ({row}, {col}) outside a {rows}x{cols} matrix")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// Requested block does not sit strictly inside the matrix.
    #[error("block ({start_row}, {start_col}) + {block_rows}x{block_cols} not inside a {rows}x{cols} matrix")]
    BadBlock {
        start_row: i64,
        start_col: i64,
        block_rows: i64,
        block_cols: i64,
        rows: usize,
        cols: usize,
    },

    /// Reshape target is non-positive or changes the element count.
    #[error("cannot reshape {len} elements to {rows}x{cols}")]
    BadReshape { rows: i64, cols: i64, len: usize },

    /// Scalar divisor is exactly zero.
    #[error("division by zero")]
    ZeroDivisor,

    /// Operation requires a square matrix.
    #[error("matrix is {rows}x{cols}, expected square")]
    NonSquare { rows: usize, cols: usize },

    /// Matrix has determinant exactly zero.
    #[error("matrix is singular")]
    Singular,

    /// Operand must be a 3-element vector.
    #[error("operand is {rows}x{cols}, expected a 3-element vector")]
    NotVector3 { rows: usize, cols: usize },

    /// Operation is undefined on an empty operand.
    #[error("operand is empty")]
    EmptyOperand,

    /// Iterative decomposition did not converge.
    #[error("decomposition did not converge")]
    DidNotConverge,
}

/// Binary success/failure indicator surfaced by the decomposition entry
/// points, mirroring the host's two-branch execution pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Success,
    Failure,
}

impl OpStatus {
    pub fn is_success(self) -> bool {
        self == OpStatus::Success
    }
}

impl<T, E> From<&Result<T, E>> for OpStatus {
    fn from(res: &Result<T, E>) -> Self {
        if res.is_ok() {
            OpStatus::Success
        } else {
            OpStatus::Failure
        }
    }
}
