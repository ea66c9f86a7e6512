// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::covector::CoVector3;
use super::traits::{FloatingPoint, Triple};
use crate::numerics::error::NumericsError;
use crate::numerics::unary;

/// Vector3 is a free 3D displacement: a direction with a magnitude.
///
/// Vectors and covectors are different types on purpose. The only way from
/// one to the other is [`Vector3::to_covector`] / [`crate::vec_to_cov`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        unary::length_sq(self)
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        unary::length(self)
    }

    /// L-infinity norm.
    pub fn maximum_norm(&self) -> T {
        unary::maximum_norm(self)
    }

    /// See [`unary::unit`]. Not defined for the zero vector.
    pub fn unit(&self) -> Self {
        unary::unit(self)
    }

    /// See [`unary::unit_safe`].
    pub fn unit_safe(&self) -> Self {
        unary::unit_safe(self)
    }

    /// See [`unary::unit_safe_or`].
    pub fn unit_safe_or(&self, fallback: &Self) -> Self {
        unary::unit_safe_or(self, fallback)
    }

    pub fn try_unit(&self) -> Result<Self, NumericsError> {
        unary::try_unit(self)
    }

    /// Some vector orthogonal to this one, not normalized.
    pub fn perpendicular(&self) -> Self {
        unary::perpendicular(self)
    }

    /// Reinterpret the components as a covector (orthonormal basis assumed).
    pub fn to_covector(&self) -> CoVector3<T> {
        CoVector3::new(self.x, self.y, self.z)
    }
}

impl<T: FloatingPoint> Triple for Vector3<T> {
    type Coord = T;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_components(c0: T, c1: T, c2: T) -> Self {
        Self::new(c0, c1, c2)
    }
}

impl<T: FloatingPoint> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", index),
        }
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

// Conversions between Vector3<T> and tuples / arrays

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
