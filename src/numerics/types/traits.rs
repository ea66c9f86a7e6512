// src/numerics/types/traits.rs
// Numeric capability traits shared by the vector, covector, point and matrix types.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// FloatingPoint is the coordinate capability every numerics type is generic
/// over.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self,
/// plus absolute value and square root for the norm operations.
pub trait FloatingPoint:
Copy + PartialOrd
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
+ Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;

    /// Convert a tolerance constant into the coordinate type.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`, used for threshold tests and diagnostics.
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f32::abs(self) }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn from_f64(value: f64) -> Self { value as f32 }
    fn to_f64(self) -> f64 { self as f64 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f64::abs(self) }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn from_f64(value: f64) -> Self { value }
    fn to_f64(self) -> f64 { self }
}

/// A 3-indexable numeric triple.
///
/// This is the only thing the norm and normalization operations know about
/// their argument. `Vector3` and `CoVector3` both implement it, each on its
/// own, so the formulas are shared while the two types never mix: a function
/// taking `V: Triple` returns the same `V` it was given.
///
/// `Point3` deliberately does not implement it; points have no length.
pub trait Triple: Copy {
    type Coord: FloatingPoint;

    /// Component `index` in `0..3`. Panics on any other index.
    fn component(&self, index: usize) -> Self::Coord;

    fn from_components(c0: Self::Coord, c1: Self::Coord, c2: Self::Coord) -> Self;
}
