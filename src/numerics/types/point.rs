// src/numerics/types/point.rs
// Point3: an affine position. Points differ by vectors.

use core::ops::{Add, Index, Sub};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Point3 is a position in space, not a displacement.
///
/// Points do not add to each other and have no length. Subtracting two
/// points is the one way to obtain a [`Vector3`] from them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatingPoint> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
}

impl<T: FloatingPoint> Index<usize> for Point3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of range: {}", index),
        }
    }
}

/// `p1 - p2` is the vector taking `p2` to `p1`.
impl<T: FloatingPoint> Sub for Point3<T> {
    type Output = Vector3<T>;

    fn sub(self, other: Self) -> Vector3<T> {
        Vector3::new(self[0] - other[0], self[1] - other[1], self[2] - other[2])
    }
}

impl<T: FloatingPoint> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    fn add(self, v: Vector3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: FloatingPoint> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    fn sub(self, v: Vector3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Point3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}
