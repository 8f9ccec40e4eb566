use serde::{Deserialize, Serialize};

use crate::core::Vector;

/// 3x3 affine transform in homogeneous coordinates, row-major.
///
/// Points are column vectors: `x' = m00*x + m01*y + m02`,
/// `y' = m10*x + m11*y + m12`. The bottom row is assumed to stay
/// `[0, 0, 1]` but is never enforced.
///
/// Composition follows the 2D canvas convention:
/// - [`Matrix::append`] computes `self = self × other`, so `other` acts on
///   points before the transform already accumulated (like calling
///   `ctx.rotate` after `ctx.translate`);
/// - [`Matrix::prepend`] computes `self = other × self`, so `other` acts on
///   points after the accumulated transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    cells: [[f64; 3]; 3],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub const ROWS: usize = 3;
    pub const COLUMNS: usize = 3;

    #[must_use]
    pub const fn identity() -> Self {
        Self {
            cells: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Builds a matrix from nine values in row-major order.
    #[must_use]
    pub const fn from_values(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self {
            cells: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    /// Rotation by `degrees`: `[cos, sin, 0; -sin, cos, 0; 0, 0, 1]`.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_values(cos, sin, 0.0, -sin, cos, 0.0, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::from_values(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_values(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0)
    }

    /// Shear with `skew_x` in cell (1,0) and `skew_y` in cell (0,1), i.e.
    /// `x' = x + skew_y * y` and `y' = skew_x * x + y`.
    #[must_use]
    pub const fn skewing(skew_x: f64, skew_y: f64) -> Self {
        Self::from_values(1.0, skew_y, 0.0, skew_x, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    pub fn set_values(
        &mut self,
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) {
        *self = Self::from_values(m00, m01, m02, m10, m11, m12, m20, m21, m22);
    }

    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Reads one cell.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is outside `0..3`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    /// Writes one cell.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is outside `0..3`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row][col] = value;
    }

    #[must_use]
    pub const fn rows_count(&self) -> usize {
        Self::ROWS
    }

    #[must_use]
    pub const fn columns_count(&self) -> usize {
        Self::COLUMNS
    }

    /// Elementwise sum.
    pub fn add(&mut self, other: &Matrix) {
        for (row, other_row) in self.cells.iter_mut().zip(other.cells.iter()) {
            for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                *cell += other_cell;
            }
        }
    }

    /// Returns `a × b`.
    #[must_use]
    pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
        let mut out = [[0.0; 3]; 3];
        for (i, out_row) in out.iter_mut().enumerate() {
            for (j, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a.cells[i][k] * b.cells[k][j]).sum();
            }
        }
        Matrix { cells: out }
    }

    /// `self = self × other`.
    pub fn append(&mut self, other: &Matrix) {
        *self = Self::multiply(self, other);
    }

    /// `self = other × self`.
    pub fn prepend(&mut self, other: &Matrix) {
        *self = Self::multiply(other, self);
    }

    /// Canvas `transform(a, b, c, d, e, f)` coefficients taken from cells
    /// `(0,0) (1,0) (0,1) (1,1) (0,2) (1,2)`.
    #[must_use]
    pub fn affine_coefficients(&self) -> [f64; 6] {
        let m = &self.cells;
        [m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2]]
    }

    /// Inverse of [`Matrix::affine_coefficients`]; the bottom row becomes `[0, 0, 1]`.
    #[must_use]
    pub const fn from_affine_coefficients(coefficients: [f64; 6]) -> Self {
        let [a, b, c, d, e, f] = coefficients;
        Self::from_values(a, c, e, b, d, f, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub fn transform_point(&self, point: Vector) -> Vector {
        let m = &self.cells;
        Vector::new(
            m[0][0] * point.x + m[0][1] * point.y + m[0][2],
            m[1][0] * point.x + m[1][1] * point.y + m[1][2],
        )
    }

    #[must_use]
    pub fn is_identity_within(&self, tolerance: f64) -> bool {
        let identity = Self::identity();
        self.cells
            .iter()
            .flatten()
            .zip(identity.cells.iter().flatten())
            .all(|(value, expected)| (value - expected).abs() <= tolerance)
    }
}
