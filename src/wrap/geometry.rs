//! Geometry wrappers bridged from the host's transform types.
//!
//! Rotations cross the boundary through the host quaternion, which keeps the
//! host's Euler convention (intrinsic yaw-pitch-roll) out of this module.

use glam::{DQuat, DVec2, DVec3};
use nalgebra::{Point3, Rotation2, Translation3, Unit, UnitQuaternion, Vector3};
use num_complex::Complex;

use crate::host::{Box3, Ray, Rotator};

/// General (not necessarily unit) quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub quat: nalgebra::Quaternion<f64>,
}

impl Quat {
    pub fn to_dquat(&self) -> DQuat {
        DQuat::from_xyzw(self.quat.i, self.quat.j, self.quat.k, self.quat.w)
    }

    pub fn to_rotator(&self) -> Rotator {
        Rotator::from_quat(self.to_dquat())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self {
            quat: nalgebra::Quaternion::identity(),
        }
    }
}

impl From<DQuat> for Quat {
    fn from(q: DQuat) -> Self {
        Self {
            quat: nalgebra::Quaternion::new(q.w, q.x, q.y, q.z),
        }
    }
}

impl From<Rotator> for Quat {
    fn from(r: Rotator) -> Self {
        Self::from(r.to_quat())
    }
}

/// Rotation stored as a unit axis and an angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAxis {
    pub rotation: UnitQuaternion<f64>,
}

impl AngleAxis {
    /// Axis and angle in radians. The identity rotation has no axis, so it
    /// reports the x axis with a zero angle.
    pub fn axis_angle(&self) -> (Vector3<f64>, f64) {
        match self.rotation.axis_angle() {
            Some((axis, angle)) => (axis.into_inner(), angle),
            None => (*Vector3::x_axis(), 0.0),
        }
    }

    pub fn to_dquat(&self) -> DQuat {
        let q = self.rotation.quaternion();
        DQuat::from_xyzw(q.i, q.j, q.k, q.w)
    }

    pub fn to_rotator(&self) -> Rotator {
        Rotator::from_quat(self.to_dquat())
    }
}

impl Default for AngleAxis {
    fn default() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl From<DQuat> for AngleAxis {
    fn from(q: DQuat) -> Self {
        let quat = nalgebra::Quaternion::new(q.w, q.x, q.y, q.z);
        Self {
            rotation: UnitQuaternion::from_quaternion(quat),
        }
    }
}

impl From<Rotator> for AngleAxis {
    fn from(r: Rotator) -> Self {
        Self::from(r.to_quat())
    }
}

/// Planar rotation. Bridged from the host rotator's pitch, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot2 {
    pub rotation: Rotation2<f64>,
}

impl Rot2 {
    pub fn from_radians(angle: f64) -> Self {
        Self {
            rotation: Rotation2::new(angle),
        }
    }

    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    pub fn to_rotator(&self) -> Rotator {
        Rotator {
            pitch: self.angle().to_degrees(),
            yaw: 0.0,
            roll: 0.0,
        }
    }
}

impl Default for Rot2 {
    fn default() -> Self {
        Self::from_radians(0.0)
    }
}

impl From<Rotator> for Rot2 {
    fn from(r: Rotator) -> Self {
        Self::from_radians(r.pitch.to_radians())
    }
}

/// 3-D translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    pub translation: Translation3<f64>,
}

impl Translation {
    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(
            self.translation.x,
            self.translation.y,
            self.translation.z,
        )
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self {
            translation: Translation3::identity(),
        }
    }
}

impl From<DVec2> for Translation {
    fn from(v: DVec2) -> Self {
        Self {
            translation: Translation3::new(v.x, v.y, 0.0),
        }
    }
}

impl From<DVec3> for Translation {
    fn from(v: DVec3) -> Self {
        Self {
            translation: Translation3::new(v.x, v.y, v.z),
        }
    }
}

/// Axis-aligned box held as min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedBox {
    pub mins: Point3<f64>,
    pub maxs: Point3<f64>,
}

impl AlignedBox {
    pub fn to_box3(&self) -> Box3 {
        Box3 {
            min: DVec3::new(self.mins.x, self.mins.y, self.mins.z),
            max: DVec3::new(self.maxs.x, self.maxs.y, self.maxs.z),
        }
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.mins, &self.maxs)
    }
}

impl Default for AlignedBox {
    fn default() -> Self {
        Self {
            mins: Point3::origin(),
            maxs: Point3::origin(),
        }
    }
}

impl From<Box3> for AlignedBox {
    fn from(b: Box3) -> Self {
        Self {
            mins: Point3::new(b.min.x, b.min.y, b.min.z),
            maxs: Point3::new(b.max.x, b.max.y, b.max.z),
        }
    }
}

/// Uniform scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScaling {
    pub factor: f64,
}

impl UniformScaling {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl Default for UniformScaling {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

/// Parametric line through an origin along a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamLine {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl ParamLine {
    /// Directions are normalized on entry; a near-zero direction is kept
    /// as-is rather than divided into NaN.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        let direction = Unit::try_new(direction, 1e-12)
            .map(Unit::into_inner)
            .unwrap_or(direction);
        Self { origin, direction }
    }

    /// Line through the origin along `direction`.
    pub fn from_dvec2(direction: DVec2) -> Self {
        Self::new(
            Point3::origin(),
            Vector3::new(direction.x, direction.y, 0.0),
        )
    }

    /// Line through the origin along `direction`.
    pub fn from_dvec3(direction: DVec3) -> Self {
        Self::new(
            Point3::origin(),
            Vector3::new(direction.x, direction.y, direction.z),
        )
    }

    pub fn to_ray(&self) -> Ray {
        Ray {
            origin: DVec3::new(self.origin.x, self.origin.y, self.origin.z),
            direction: DVec3::new(self.direction.x, self.direction.y, self.direction.z),
        }
    }

    /// Point at parameter `t` along the line.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

impl Default for ParamLine {
    fn default() -> Self {
        Self {
            origin: Point3::origin(),
            direction: *Vector3::x_axis(),
        }
    }
}

impl From<Ray> for ParamLine {
    fn from(r: Ray) -> Self {
        Self::new(
            Point3::new(r.origin.x, r.origin.y, r.origin.z),
            Vector3::new(r.direction.x, r.direction.y, r.direction.z),
        )
    }
}

/// Scalar complex number, ferried as a 2-vector in either rectangular
/// `(re, im)` or polar `(magnitude, angle)` form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplexNum {
    pub value: Complex<f64>,
}

impl ComplexNum {
    pub fn from_rect(v: DVec2) -> Self {
        Self {
            value: Complex::new(v.x, v.y),
        }
    }

    pub fn from_polar(v: DVec2) -> Self {
        Self {
            value: Complex::from_polar(v.x, v.y),
        }
    }

    pub fn to_rect(&self) -> DVec2 {
        DVec2::new(self.value.re, self.value.im)
    }

    pub fn to_polar(&self) -> DVec2 {
        DVec2::new(self.value.norm(), self.value.arg())
    }
}

/// Givens rotation held as its cosine and sine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiRot {
    pub c: f64,
    pub s: f64,
}

impl JacobiRot {
    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.c, self.s)
    }
}

impl Default for JacobiRot {
    fn default() -> Self {
        Self { c: 1.0, s: 0.0 }
    }
}

impl From<DVec2> for JacobiRot {
    fn from(v: DVec2) -> Self {
        Self { c: v.x, s: v.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quat_roundtrip_through_host() {
        let q = DQuat::from_axis_angle(DVec3::Y, 0.7);
        let w = Quat::from(q);
        let back = w.to_dquat();
        assert_abs_diff_eq!(back.x, q.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, q.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, q.z, epsilon = 1e-12);
        assert_abs_diff_eq!(back.w, q.w, epsilon = 1e-12);
    }

    #[test]
    fn angle_axis_recovers_axis_and_angle() {
        let q = DQuat::from_axis_angle(DVec3::Z, FRAC_PI_2);
        let (axis, angle) = AngleAxis::from(q).axis_angle();
        assert_abs_diff_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn identity_angle_axis_has_zero_angle() {
        let (axis, angle) = AngleAxis::from(DQuat::IDENTITY).axis_angle();
        assert_abs_diff_eq!(angle, 0.0);
        assert_abs_diff_eq!(axis.x, 1.0);
    }

    #[test]
    fn rot2_uses_pitch_degrees() {
        let r = Rot2::from(Rotator {
            pitch: 90.0,
            yaw: 0.0,
            roll: 0.0,
        });
        assert_abs_diff_eq!(r.angle(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.to_rotator().pitch, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn translation_zero_extends_planar_input() {
        let t = Translation::from(DVec2::new(1.0, 2.0));
        assert_eq!(t.to_dvec3(), DVec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn translation_roundtrip() {
        let v = DVec3::new(1.5, -2.0, 3.0);
        assert_eq!(Translation::from(v).to_dvec3(), v);
    }

    #[test]
    fn aligned_box_roundtrip() {
        let b = Box3 {
            min: DVec3::new(-1.0, -2.0, -3.0),
            max: DVec3::new(1.0, 2.0, 3.0),
        };
        let w = AlignedBox::from(b);
        assert_eq!(w.to_box3(), b);
        assert_eq!(w.center(), Point3::origin());
    }

    #[test]
    fn param_line_normalizes_direction() {
        let l = ParamLine::from_dvec3(DVec3::new(0.0, 3.0, 0.0));
        assert_eq!(l.origin, Point3::origin());
        assert_abs_diff_eq!(l.direction.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.point_at(2.0).y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_direction_is_kept() {
        let l = ParamLine::from_dvec3(DVec3::ZERO);
        assert_eq!(l.direction, Vector3::zeros());
    }

    #[test]
    fn ray_roundtrip_keeps_origin() {
        let r = Ray {
            origin: DVec3::new(1.0, 2.0, 3.0),
            direction: DVec3::new(1.0, 0.0, 0.0),
        };
        let l = ParamLine::from(r);
        assert_eq!(l.to_ray(), r);
    }

    #[test]
    fn complex_polar_matches_rect() {
        let c = ComplexNum::from_polar(DVec2::new(2.0, FRAC_PI_2));
        assert_abs_diff_eq!(c.value.re, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.value.im, 2.0, epsilon = 1e-12);
        let p = c.to_polar();
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn jacobi_rot_roundtrip() {
        let j = JacobiRot::from(DVec2::new(0.6, 0.8));
        assert_eq!(j.to_dvec2(), DVec2::new(0.6, 0.8));
    }
}
