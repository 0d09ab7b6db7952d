//! Navis: a scripting-host boundary around dense, sparse and geometric
//! linear algebra.
//!
//! The crate wraps the backend's value types ([`wrap`]), validates every
//! operation on them ([`ops`]), and exposes a total catalog for the host
//! to call through ([`catalog`]), where failures collapse to the null
//! matrix or a zero scalar instead of propagating.

pub mod backend;
pub mod catalog;
pub mod host;
pub mod ops;
pub mod outcome;
pub mod wrap;
// Re-export key types
pub use backend::Threading;
pub use host::{Box2, Box3, Ray, Rotator};
pub use outcome::{OpError, OpStatus};
pub use wrap::{
    AlignedBox, AngleAxis, ComplexNum, DynArray, DynComplexMatrix, DynMatrix, DynVector,
    JacobiRot, Matrix4, ParamLine, Quat, Rot2, RowVector4, SparseMatrix, SparseVector,
    Translation, Triplet, UniformScaling, Vector4,
};
