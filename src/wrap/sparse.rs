//! Sparse wrappers built from host-side triplet streams.

use glam::{DMat4, DVec2, DVec3, DVec4};
use sprs::{CsMat, CsVec, TriMat};

use crate::wrap::dense::DynMatrix;
use crate::wrap::fixed::Matrix4;

/// One explicit entry of a sparse matrix.
///
/// Host code ferries triplets as 3-vectors `(row, col, value)`. Fractional
/// or negative coordinates clamp to zero, since the host vector type has no
/// integer lanes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triplet {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl Triplet {
    pub fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }

    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(self.row as f64, self.col as f64, self.value)
    }
}

impl From<DVec3> for Triplet {
    fn from(v: DVec3) -> Self {
        Self {
            row: v.x.max(0.0) as usize,
            col: v.y.max(0.0) as usize,
            value: v.z,
        }
    }
}

/// Compressed sparse vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    pub vector: CsVec<f64>,
}

impl SparseVector {
    /// Build from a dense slice, storing only the nonzero entries.
    pub fn from_dense(data: &[f64]) -> Self {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (i, &v) in data.iter().enumerate() {
            if v != 0.0 {
                indices.push(i);
                values.push(v);
            }
        }
        Self {
            vector: CsVec::new(data.len(), indices, values),
        }
    }

    /// Dimension-2 vector with both lanes stored explicitly, zeros
    /// included, mirroring how host vectors cross the boundary.
    pub fn from_dvec2(v: DVec2) -> Self {
        Self {
            vector: CsVec::new(2, vec![0, 1], vec![v.x, v.y]),
        }
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self {
            vector: CsVec::new(3, vec![0, 1, 2], vec![v.x, v.y, v.z]),
        }
    }

    pub fn from_dvec4(v: DVec4) -> Self {
        Self {
            vector: CsVec::new(4, vec![0, 1, 2, 3], vec![v.x, v.y, v.z, v.w]),
        }
    }

    /// First four lanes, zero-filled past the vector's dimension.
    pub fn to_dvec4(&self) -> DVec4 {
        DVec4::new(self.get(0), self.get(1), self.get(2), self.get(3))
    }

    pub fn len(&self) -> usize {
        self.vector.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nnz(&self) -> usize {
        self.vector.nnz()
    }

    /// Element at `index`, or 0 when absent or out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.vector.get(index).copied().unwrap_or(0.0)
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.len()];
        for (i, &v) in self.vector.iter() {
            out[i] = v;
        }
        out
    }
}

impl Default for SparseVector {
    fn default() -> Self {
        Self {
            vector: CsVec::new(0, Vec::new(), Vec::new()),
        }
    }
}

/// Compressed sparse row matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    pub matrix: CsMat<f64>,
}

impl SparseMatrix {
    /// Assemble from triplets. Entries outside `rows x cols` are skipped,
    /// and duplicate coordinates sum.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[Triplet]) -> Self {
        let mut tri = TriMat::new((rows, cols));
        for t in triplets {
            if t.row < rows && t.col < cols {
                tri.add_triplet(t.row, t.col, t.value);
            }
        }
        Self {
            matrix: tri.to_csr(),
        }
    }

    /// Assemble from a row-major flat slice. Every covered position is
    /// stored explicitly, zeros included; positions past the end of the
    /// slice are left unstored.
    pub fn from_row_major(data: &[f64], rows: usize, cols: usize) -> Self {
        let mut tri = TriMat::new((rows, cols));
        for row in 0..rows {
            for col in 0..cols {
                let i = col + row * cols;
                if i >= data.len() {
                    break;
                }
                tri.add_triplet(row, col, data[i]);
            }
        }
        Self {
            matrix: tri.to_csr(),
        }
    }

    /// Sparse view of a host 4x4 matrix, keeping only nonzero entries.
    pub fn from_dmat4(m: DMat4) -> Self {
        let dense = Matrix4::from(m);
        let mut tri = TriMat::new((4, 4));
        for row in 0..4 {
            for col in 0..4 {
                let v = dense.matrix[(row, col)];
                if v != 0.0 {
                    tri.add_triplet(row, col, v);
                }
            }
        }
        Self {
            matrix: tri.to_csr(),
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.cols()
    }

    pub fn nnz(&self) -> usize {
        self.matrix.nnz()
    }

    /// Element at `(row, col)`, or 0 when absent or out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.rows() || col >= self.cols() {
            return 0.0;
        }
        self.matrix.get(row, col).copied().unwrap_or(0.0)
    }

    /// Densify into a host 4x4 matrix. Requires the matrix to actually be
    /// 4x4; anything else yields the zero matrix.
    pub fn to_dmat4(&self) -> DMat4 {
        if self.rows() != 4 || self.cols() != 4 {
            return DMat4::ZERO;
        }
        let mut out = Matrix4::default();
        for (&v, (row, col)) in self.matrix.iter() {
            out.matrix[(row, col)] = v;
        }
        out.to_dmat4()
    }

    pub fn to_dense(&self) -> DynMatrix {
        let mut out = nalgebra::DMatrix::zeros(self.rows(), self.cols());
        for (&v, (row, col)) in self.matrix.iter() {
            out[(row, col)] = v;
        }
        DynMatrix { matrix: out }
    }

    /// All stored entries as triplets, in storage order.
    pub fn to_triplets(&self) -> Vec<Triplet> {
        self.matrix
            .iter()
            .map(|(&v, (row, col))| Triplet::new(row, col, v))
            .collect()
    }
}

impl Default for SparseMatrix {
    fn default() -> Self {
        Self {
            matrix: TriMat::new((0, 0)).to_csr(),
        }
    }
}
