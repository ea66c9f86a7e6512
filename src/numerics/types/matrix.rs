// src/numerics/types/matrix.rs
// Matrix3x3: row-major 3x3 linear map with closed-form inversion.

use core::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::numerics::error::NumericsError;
use crate::numerics::tolerance::SINGULAR_DETERMINANT_EPSILON;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;

/// Row-major 3x3 matrix. `m[(row, column)]` addresses an entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T: FloatingPoint = f32> {
    pub data: [[T; 3]; 3],
}

impl<T: FloatingPoint> Matrix3x3<T> {
    pub fn new(data: [[T; 3]; 3]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    /// Construct a new matrix from 3 columns
    pub fn from_columns(c0: [T; 3], c1: [T; 3], c2: [T; 3]) -> Self {
        Self {
            data: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; 3] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; 3] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx]]
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[T::zero(); 3]; 3] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut m = [[T::zero(); 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Self { data: m }
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.data[0], self.data[1], self.data[2])
    }

    /// Determinant by cofactor expansion.
    ///
    /// The terms are summed in a fixed order; `inverse` relies on getting
    /// the same rounding every time.
    pub fn determinant(&self) -> T {
        let t = self;
        -t[(0, 2)] * t[(1, 1)] * t[(2, 0)]
            + t[(0, 1)] * t[(1, 2)] * t[(2, 0)]
            + t[(0, 2)] * t[(1, 0)] * t[(2, 1)]
            - t[(0, 0)] * t[(1, 2)] * t[(2, 1)]
            - t[(0, 1)] * t[(1, 0)] * t[(2, 2)]
            + t[(0, 0)] * t[(1, 1)] * t[(2, 2)]
    }

    /// Closed-form inverse via the adjugate.
    ///
    /// Returns `(inverse, true)` on success. When `|det| < 1e-25` (see
    /// [`SINGULAR_DETERMINANT_EPSILON`]) returns `(identity, false)`; the
    /// placeholder is well defined but meaningless, so check the flag.
    ///
    /// Every entry is written out in full rather than sharing sub-terms, so
    /// rounding is identical for every entry regardless of the others.
    pub fn inverse(&self) -> (Self, bool) {
        let t = self;
        let det = t.determinant();

        if det.abs().to_f64() < SINGULAR_DETERMINANT_EPSILON {
            tracing::debug!(determinant = det.to_f64(), "inverse: matrix is singular");
            return (Self::identity(), false);
        }

        let mut m = Self::zero();
        m[(0, 0)] = (-t[(1, 2)] * t[(2, 1)] + t[(1, 1)] * t[(2, 2)]) / det;
        m[(0, 1)] = (t[(0, 2)] * t[(2, 1)] - t[(0, 1)] * t[(2, 2)]) / det;
        m[(0, 2)] = (-t[(0, 2)] * t[(1, 1)] + t[(0, 1)] * t[(1, 2)]) / det;
        m[(1, 0)] = (t[(1, 2)] * t[(2, 0)] - t[(1, 0)] * t[(2, 2)]) / det;
        m[(1, 1)] = (-t[(0, 2)] * t[(2, 0)] + t[(0, 0)] * t[(2, 2)]) / det;
        m[(1, 2)] = (t[(0, 2)] * t[(1, 0)] - t[(0, 0)] * t[(1, 2)]) / det;
        m[(2, 0)] = (-t[(1, 1)] * t[(2, 0)] + t[(1, 0)] * t[(2, 1)]) / det;
        m[(2, 1)] = (t[(0, 1)] * t[(2, 0)] - t[(0, 0)] * t[(2, 1)]) / det;
        m[(2, 2)] = (-t[(0, 1)] * t[(1, 0)] + t[(0, 0)] * t[(1, 1)]) / det;

        (m, true)
    }

    /// [`Matrix3x3::inverse`] as a `Result`.
    pub fn try_inverse(&self) -> Result<Self, NumericsError> {
        match self.inverse() {
            (m, true) => Ok(m),
            (_, false) => Err(NumericsError::SingularMatrix {
                determinant: self.determinant().to_f64(),
            }),
        }
    }
}

impl<T: FloatingPoint> Index<(usize, usize)> for Matrix3x3<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.data[row][column]
    }
}

impl<T: FloatingPoint> IndexMut<(usize, usize)> for Matrix3x3<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.data[row][column]
    }
}

impl<T: FloatingPoint> Add for Matrix3x3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl<T: FloatingPoint> Sub for Matrix3x3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        let mut result = self.data;
        for row in result.iter_mut() {
            for entry in row.iter_mut() {
                *entry = *entry * scalar;
            }
        }
        Matrix3x3 { data: result }
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.data[0][0] * rhs.x + self.data[0][1] * rhs.y + self.data[0][2] * rhs.z,
            y: self.data[1][0] * rhs.x + self.data[1][1] * rhs.y + self.data[1][2] * rhs.z,
            z: self.data[2][0] * rhs.x + self.data[2][1] * rhs.y + self.data[2][2] * rhs.z,
        }
    }
}

impl<T: FloatingPoint> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Matrix3x3<T> {
        let mut result = [[T::zero(); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] =
                    self.data[i][0] * rhs.data[0][j] +
                        self.data[i][1] * rhs.data[1][j] +
                        self.data[i][2] * rhs.data[2][j];
            }
        }
        Matrix3x3 { data: result }
    }
}
