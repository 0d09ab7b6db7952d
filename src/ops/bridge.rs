//! Symmetric host/backend exchange.
//!
//! Each `swap_*` function takes one host value and one wrapped value and
//! returns both converted across the boundary in a single call, so a script
//! node can push a value in and pull the previous one out at the same time.
//! Swaps are total; the per-type conversion rules live in [`crate::wrap`].

use glam::{DMat4, DQuat, DVec2, DVec3, DVec4};
use nalgebra::DMatrix;

use crate::host::{Box2, Box3, Ray, Rotator};
use crate::wrap::dense::{DynArray, DynMatrix};
use crate::wrap::fixed::{Matrix4, RowVector4, Vector4};
use crate::wrap::geometry::{
    AlignedBox, AngleAxis, ComplexNum, JacobiRot, ParamLine, Quat, Rot2, Translation,
    UniformScaling,
};
use crate::wrap::sparse::{SparseMatrix, SparseVector, Triplet};

/// Exchange a host 2-vector with a complex scalar. `as_phasor` selects the
/// polar `(magnitude, angle)` reading of both directions.
pub fn swap_complex(v: DVec2, as_phasor: bool, c: ComplexNum) -> (DVec2, ComplexNum) {
    if as_phasor {
        (c.to_polar(), ComplexNum::from_polar(v))
    } else {
        (c.to_rect(), ComplexNum::from_rect(v))
    }
}

pub fn swap_array(data: &[f64], a: &DynArray) -> (Vec<f64>, DynArray) {
    (a.to_vec(), DynArray::from_slice(data))
}

pub fn swap_vector2(v: DVec2, w: Vector4) -> (DVec2, Vector4) {
    (w.to_dvec2(), Vector4::from(v))
}

pub fn swap_vector3(v: DVec3, w: Vector4) -> (DVec3, Vector4) {
    (w.to_dvec3(), Vector4::from(v))
}

pub fn swap_vector4(v: DVec4, w: Vector4) -> (DVec4, Vector4) {
    (w.to_dvec4(), Vector4::from(v))
}

pub fn swap_row_vector2(v: DVec2, w: RowVector4) -> (DVec2, RowVector4) {
    (w.to_dvec2(), RowVector4::from(v))
}

pub fn swap_row_vector3(v: DVec3, w: RowVector4) -> (DVec3, RowVector4) {
    (w.to_dvec3(), RowVector4::from(v))
}

pub fn swap_row_vector4(v: DVec4, w: RowVector4) -> (DVec4, RowVector4) {
    (w.to_dvec4(), RowVector4::from(v))
}

/// Promote a fixed 4-vector to a 4x1 dynamic matrix.
pub fn vector_to_dynamic(w: Vector4) -> DynMatrix {
    DynMatrix::from(DMatrix::from_fn(4, 1, |r, _| w.vector[r]))
}

/// Promote a fixed row 4-vector to a 1x4 dynamic matrix.
pub fn row_vector_to_dynamic(w: RowVector4) -> DynMatrix {
    DynMatrix::from(DMatrix::from_fn(1, 4, |_, c| w.vector[c]))
}

pub fn swap_matrix4(m: DMat4, w: Matrix4) -> (DMat4, Matrix4) {
    (w.to_dmat4(), Matrix4::from(m))
}

/// Promote a fixed 4x4 matrix to a dynamic one.
pub fn matrix4_to_dynamic(w: Matrix4) -> DynMatrix {
    DynMatrix::from(DMatrix::from_fn(4, 4, |r, c| w.matrix[(r, c)]))
}

pub fn swap_jacobi(v: DVec2, w: JacobiRot) -> (DVec2, JacobiRot) {
    (w.to_dvec2(), JacobiRot::from(v))
}

pub fn swap_triplet(v: DVec3, w: Triplet) -> (DVec3, Triplet) {
    (w.to_dvec3(), Triplet::from(v))
}

pub fn swap_sparse_vector2(v: DVec2, w: &SparseVector) -> (DVec2, SparseVector) {
    let out = w.to_dvec4();
    (DVec2::new(out.x, out.y), SparseVector::from_dvec2(v))
}

pub fn swap_sparse_vector3(v: DVec3, w: &SparseVector) -> (DVec3, SparseVector) {
    let out = w.to_dvec4();
    (
        DVec3::new(out.x, out.y, out.z),
        SparseVector::from_dvec3(v),
    )
}

pub fn swap_sparse_vector4(v: DVec4, w: &SparseVector) -> (DVec4, SparseVector) {
    (w.to_dvec4(), SparseVector::from_dvec4(v))
}

pub fn swap_sparse_matrix(m: DMat4, w: &SparseMatrix) -> (DMat4, SparseMatrix) {
    (w.to_dmat4(), SparseMatrix::from_dmat4(m))
}

/// Exchange a flat row-major array with a sparse matrix of the given shape.
pub fn swap_sparse_from_array(
    data: &[f64],
    rows: usize,
    cols: usize,
    w: &SparseMatrix,
) -> (Vec<f64>, SparseMatrix) {
    (
        w.to_dense().to_row_major(),
        SparseMatrix::from_row_major(data, rows, cols),
    )
}

pub fn swap_quat(q: DQuat, w: Quat) -> (DQuat, Quat) {
    (w.to_dquat(), Quat::from(q))
}

pub fn swap_angle_axis_quat(q: DQuat, w: AngleAxis) -> (DQuat, AngleAxis) {
    (w.to_dquat(), AngleAxis::from(q))
}

pub fn swap_angle_axis_rotator(r: Rotator, w: AngleAxis) -> (Rotator, AngleAxis) {
    (w.to_rotator(), AngleAxis::from(r))
}

pub fn swap_rot2(r: Rotator, w: Rot2) -> (Rotator, Rot2) {
    (w.to_rotator(), Rot2::from(r))
}

pub fn swap_translation2(v: DVec2, w: Translation) -> (DVec2, Translation) {
    let out = w.to_dvec3();
    (DVec2::new(out.x, out.y), Translation::from(v))
}

pub fn swap_translation3(v: DVec3, w: Translation) -> (DVec3, Translation) {
    (w.to_dvec3(), Translation::from(v))
}

pub fn swap_box2(b: Box2, w: AlignedBox) -> (Box2, AlignedBox) {
    let out = w.to_box3();
    let host = Box2 {
        min: DVec2::new(out.min.x, out.min.y),
        max: DVec2::new(out.max.x, out.max.y),
    };
    let wrapped = AlignedBox::from(Box3 {
        min: DVec3::new(b.min.x, b.min.y, 0.0),
        max: DVec3::new(b.max.x, b.max.y, 0.0),
    });
    (host, wrapped)
}

pub fn swap_box3(b: Box3, w: AlignedBox) -> (Box3, AlignedBox) {
    (w.to_box3(), AlignedBox::from(b))
}

pub fn swap_uniform_scaling(s: f64, w: UniformScaling) -> (f64, UniformScaling) {
    (w.factor, UniformScaling::new(s))
}

pub fn swap_param_line2(v: DVec2, w: ParamLine) -> (DVec2, ParamLine) {
    let out = w.to_ray().direction;
    (DVec2::new(out.x, out.y), ParamLine::from_dvec2(v))
}

pub fn swap_param_line3(v: DVec3, w: ParamLine) -> (DVec3, ParamLine) {
    (w.to_ray().direction, ParamLine::from_dvec3(v))
}

pub fn swap_param_line_ray(origin: DVec3, direction: DVec3, w: ParamLine) -> (Ray, ParamLine) {
    (w.to_ray(), ParamLine::from(Ray { origin, direction }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector_swap_exchanges_both_sides() {
        let host = DVec3::new(1.0, 2.0, 3.0);
        let wrapped = Vector4::from(DVec4::new(9.0, 8.0, 7.0, 6.0));
        let (out_host, out_wrapped) = swap_vector3(host, wrapped);
        assert_eq!(out_host, DVec3::new(9.0, 8.0, 7.0));
        assert_eq!(out_wrapped.vector, nalgebra::Vector4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn complex_swap_respects_phasor_flag() {
        let c = ComplexNum::from_rect(DVec2::new(0.0, 1.0));
        let (polar, _) = swap_complex(DVec2::ZERO, true, c);
        assert_abs_diff_eq!(polar.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polar.y, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        let (rect, back) = swap_complex(DVec2::new(3.0, 4.0), false, c);
        assert_eq!(rect, DVec2::new(0.0, 1.0));
        assert_eq!(back.to_rect(), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn promotions_keep_orientation() {
        let v = Vector4::from(DVec4::new(1.0, 2.0, 3.0, 4.0));
        let m = vector_to_dynamic(v);
        assert_eq!((m.rows(), m.cols()), (4, 1));
        let r = RowVector4::from(DVec4::new(1.0, 2.0, 3.0, 4.0));
        let m = row_vector_to_dynamic(r);
        assert_eq!((m.rows(), m.cols()), (1, 4));
        assert_eq!(m.to_row_major(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn matrix4_promotion_preserves_elements() {
        let host = DMat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);
        let (_, wrapped) = swap_matrix4(DMat4::IDENTITY, Matrix4::from(host));
        let dyn_m = matrix4_to_dynamic(Matrix4::from(host));
        assert_abs_diff_eq!(dyn_m.matrix[(2, 1)], 7.0);
        assert_eq!(wrapped.to_dmat4(), DMat4::IDENTITY);
    }

    #[test]
    fn sparse_array_swap_roundtrips() {
        let data = vec![1.0, 0.0, 0.0, 2.0];
        let (_, sm) = swap_sparse_from_array(&data, 2, 2, &SparseMatrix::default());
        let (back, _) = swap_sparse_from_array(&[], 0, 0, &sm);
        assert_eq!(back, data);
    }

    #[test]
    fn rotation_swaps_roundtrip_through_host() {
        let r = Rotator {
            pitch: 10.0,
            yaw: 20.0,
            roll: 30.0,
        };
        let (_, aa) = swap_angle_axis_rotator(r, AngleAxis::default());
        let (back, _) = swap_angle_axis_rotator(Rotator::default(), aa);
        assert_abs_diff_eq!(back.pitch, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.yaw, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.roll, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn box2_swap_flattens_depth() {
        let b = Box2 {
            min: DVec2::new(-1.0, -1.0),
            max: DVec2::new(1.0, 1.0),
        };
        let (_, w) = swap_box2(b, AlignedBox::default());
        assert_eq!(w.mins.z, 0.0);
        let (out, _) = swap_box2(Box2::default(), w);
        assert_eq!(out, b);
    }

    #[test]
    fn uniform_scaling_swap_is_scalar() {
        let (s, w) = swap_uniform_scaling(2.5, UniformScaling::new(0.5));
        assert_abs_diff_eq!(s, 0.5);
        assert_abs_diff_eq!(w.factor, 2.5);
    }
}
