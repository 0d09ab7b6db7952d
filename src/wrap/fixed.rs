//! Fixed-size wrappers bridged from the host's vector types.
//!
//! Host vectors shorter than four components are zero-extended into the
//! trailing slots; going back the other way truncates.

use glam::{DMat4, DVec2, DVec3, DVec4};

/// 4-component column vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector4 {
    pub vector: nalgebra::Vector4<f64>,
}

impl Default for Vector4 {
    fn default() -> Self {
        Self {
            vector: nalgebra::Vector4::zeros(),
        }
    }
}

impl Vector4 {
    pub fn to_dvec4(&self) -> DVec4 {
        DVec4::new(self.vector.x, self.vector.y, self.vector.z, self.vector.w)
    }

    /// First three components, dropping `w`.
    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(self.vector.x, self.vector.y, self.vector.z)
    }

    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.vector.x, self.vector.y)
    }
}

impl From<DVec2> for Vector4 {
    fn from(v: DVec2) -> Self {
        Self {
            vector: nalgebra::Vector4::new(v.x, v.y, 0.0, 0.0),
        }
    }
}

impl From<DVec3> for Vector4 {
    fn from(v: DVec3) -> Self {
        Self {
            vector: nalgebra::Vector4::new(v.x, v.y, v.z, 0.0),
        }
    }
}

impl From<DVec4> for Vector4 {
    fn from(v: DVec4) -> Self {
        Self {
            vector: nalgebra::Vector4::new(v.x, v.y, v.z, v.w),
        }
    }
}

/// 4-component row vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowVector4 {
    pub vector: nalgebra::RowVector4<f64>,
}

impl Default for RowVector4 {
    fn default() -> Self {
        Self {
            vector: nalgebra::RowVector4::zeros(),
        }
    }
}

impl RowVector4 {
    pub fn to_dvec4(&self) -> DVec4 {
        DVec4::new(self.vector.x, self.vector.y, self.vector.z, self.vector.w)
    }

    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(self.vector.x, self.vector.y, self.vector.z)
    }

    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.vector.x, self.vector.y)
    }
}

impl From<DVec2> for RowVector4 {
    fn from(v: DVec2) -> Self {
        Self {
            vector: nalgebra::RowVector4::new(v.x, v.y, 0.0, 0.0),
        }
    }
}

impl From<DVec3> for RowVector4 {
    fn from(v: DVec3) -> Self {
        Self {
            vector: nalgebra::RowVector4::new(v.x, v.y, v.z, 0.0),
        }
    }
}

impl From<DVec4> for RowVector4 {
    fn from(v: DVec4) -> Self {
        Self {
            vector: nalgebra::RowVector4::new(v.x, v.y, v.z, v.w),
        }
    }
}

/// 4x4 matrix.
///
/// The host's matrix is column-major; element `(r, c)` sits at flat index
/// `c * 4 + r` of its column array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub matrix: nalgebra::Matrix4<f64>,
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self {
            matrix: nalgebra::Matrix4::zeros(),
        }
    }
}

impl Matrix4 {
    pub fn to_dmat4(&self) -> DMat4 {
        let mut cols = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                cols[col * 4 + row] = self.matrix[(row, col)];
            }
        }
        DMat4::from_cols_array(&cols)
    }
}

impl From<DMat4> for Matrix4 {
    fn from(m: DMat4) -> Self {
        let cols = m.to_cols_array();
        let matrix = nalgebra::Matrix4::from_fn(|row, col| cols[col * 4 + row]);
        Self { matrix }
    }
}
