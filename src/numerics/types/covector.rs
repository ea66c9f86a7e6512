// src/numerics/types/covector.rs
// CoVector3: the dual of Vector3. Same storage, different type.

use core::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::traits::{FloatingPoint, Triple};
use super::vector::Vector3;
use crate::numerics::unary;

/// CoVector3 is a linear functional on 3D vectors (a normal, a gradient, a
/// plane coefficient row).
///
/// It is structurally identical to [`Vector3`] but never converts to or from
/// it implicitly. Only the norm family and `unit` are offered; there is no
/// `unit_safe` and no `perpendicular` for covectors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoVector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatingPoint> CoVector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Evaluate the functional on `v`.
    pub fn apply(&self, v: &Vector3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    pub fn length_squared(&self) -> T {
        unary::length_sq(self)
    }

    pub fn length(&self) -> T {
        unary::length(self)
    }

    pub fn maximum_norm(&self) -> T {
        unary::maximum_norm(self)
    }

    /// Not defined for the zero covector.
    pub fn unit(&self) -> Self {
        unary::unit(self)
    }

    /// Reinterpret the components as a vector (orthonormal basis assumed).
    pub fn to_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T: FloatingPoint> Triple for CoVector3<T> {
    type Coord = T;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_components(c0: T, c1: T, c2: T) -> Self {
        Self::new(c0, c1, c2)
    }
}

impl<T: FloatingPoint> Index<usize> for CoVector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("CoVector3 index out of range: {}", index),
        }
    }
}

impl<T: FloatingPoint> Add for CoVector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> Sub for CoVector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for CoVector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Mul<T> for CoVector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Div<T> for CoVector3<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
