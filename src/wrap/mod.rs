//! Typed wrappers around the linear-algebra backend's value types.
//!
//! Every wrapper owns exactly one backend value and carries the conversion
//! rules to and from the host's representation of it.

pub mod dense;
pub mod fixed;
pub mod geometry;
pub mod sparse;

pub use dense::{DynArray, DynComplexMatrix, DynMatrix, DynVector};
pub use fixed::{Matrix4, RowVector4, Vector4};
pub use geometry::{
    AlignedBox, AngleAxis, ComplexNum, JacobiRot, ParamLine, Quat, Rot2, Translation,
    UniformScaling,
};
pub use sparse::{SparseMatrix, SparseVector, Triplet};
