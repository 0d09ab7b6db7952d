//! Host-side value types.
//!
//! The scripting host hands values across the boundary as plain `glam` f64
//! types (`DVec2`, `DVec3`, `DVec4`, `DMat4`, `DQuat`). This module carries
//! the few host value types glam does not provide: the degree-based rotator,
//! the ray, and the 2-D/3-D axis-aligned boxes.

use glam::{DQuat, DVec2, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Rotation expressed as pitch/yaw/roll in degrees, the way the host's
/// editor surfaces it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Rotator {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Quaternion for this rotator. Yaw is applied about Z, then pitch
    /// about Y, then roll about X.
    pub fn to_quat(self) -> DQuat {
        DQuat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    pub fn from_quat(quat: DQuat) -> Self {
        let (yaw, pitch, roll) = quat.to_euler(EulerRot::ZYX);
        Self {
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }
}

/// Origin plus direction. The direction is stored as given; consumers that
/// need a unit vector normalize at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }
}

/// 2-D axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Box2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Box2 {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }
}

/// 3-D axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Box3 {
    pub min: DVec3,
    pub max: DVec3,
}

impl Box3 {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotator_quat_roundtrip() {
        let cases = vec![
            Rotator::new(0.0, 0.0, 0.0),
            Rotator::new(30.0, 0.0, 0.0),
            Rotator::new(0.0, 45.0, 0.0),
            Rotator::new(0.0, 0.0, 60.0),
            Rotator::new(10.0, -20.0, 30.0),
        ];

        for rot in cases {
            let back = Rotator::from_quat(rot.to_quat());
            assert_abs_diff_eq!(back.pitch, rot.pitch, epsilon = 1e-9);
            assert_abs_diff_eq!(back.yaw, rot.yaw, epsilon = 1e-9);
            assert_abs_diff_eq!(back.roll, rot.roll, epsilon = 1e-9);
        }
    }

    #[test]
    fn yaw_rotates_about_z() {
        let q = Rotator::new(0.0, 90.0, 0.0).to_quat();
        let v = q * DVec3::X;
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }
}
