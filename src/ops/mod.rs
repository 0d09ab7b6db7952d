//! Checked operations over the wrapped value types.
//!
//! Functions here return `Result<_, OpError>`; they never fall back to a
//! default value. The lossy legacy behavior lives in [`crate::catalog`].

pub mod array;
pub mod bridge;
pub mod matrix;
