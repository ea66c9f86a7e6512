// src/numerics/unary.rs
// Unary operators: norms, normalization and perpendicular construction.

use super::error::NumericsError;
use super::tolerance::UNIT_LENGTH_EPSILON;
use super::types::traits::{FloatingPoint, Triple};
use super::types::vector::Vector3;

/// Squared Euclidean length, `v0² + v1² + v2²`.
///
/// Prefer this over [`length`] when only comparing magnitudes.
pub fn length_sq<V: Triple>(v: &V) -> V::Coord {
    let (c0, c1, c2) = (v.component(0), v.component(1), v.component(2));
    c0 * c0 + c1 * c1 + c2 * c2
}

/// Euclidean length. Zero for the zero triple.
pub fn length<V: Triple>(v: &V) -> V::Coord {
    length_sq(v).sqrt()
}

/// L-infinity norm, the largest absolute component.
pub fn maximum_norm<V: Triple>(v: &V) -> V::Coord {
    let mut max = v.component(0).abs();
    if v.component(1).abs() > max {
        max = v.component(1).abs();
    }
    if v.component(2).abs() > max {
        max = v.component(2).abs();
    }
    max
}

/// `v / length(v)`.
///
/// Unchecked: a zero-length input divides by zero and yields non-finite
/// components. Use [`unit_safe`] or [`unit_safe_or`] when the length is not
/// known to be non-zero.
pub fn unit<V: Triple>(v: &V) -> V {
    let len = length(v);
    V::from_components(v.component(0) / len, v.component(1) / len, v.component(2) / len)
}

/// Normalize `v`, or return `fallback` unchanged when `|length(v)|` is below
/// [`UNIT_LENGTH_EPSILON`].
pub fn unit_safe_or<T: FloatingPoint>(v: &Vector3<T>, fallback: &Vector3<T>) -> Vector3<T> {
    let len = length(v);
    if len.abs() < T::from_f64(UNIT_LENGTH_EPSILON) {
        tracing::trace!(length = len.to_f64(), "unit_safe_or: using caller fallback");
        return *fallback;
    }
    *v / len
}

/// Normalize `v`, or return `v` itself when `|length(v)|` is below
/// [`UNIT_LENGTH_EPSILON`].
///
/// Unlike [`unit_safe_or`] there is no caller-chosen fallback: a degenerate
/// vector is left as it was.
pub fn unit_safe<T: FloatingPoint>(v: &Vector3<T>) -> Vector3<T> {
    let len = length(v);
    if len.abs() < T::from_f64(UNIT_LENGTH_EPSILON) {
        tracing::trace!(length = len.to_f64(), "unit_safe: leaving vector unchanged");
        return *v;
    }
    *v / len
}

/// Checked normalization for callers that propagate errors with `?`.
pub fn try_unit<T: FloatingPoint>(v: &Vector3<T>) -> Result<Vector3<T>, NumericsError> {
    let len = length(v);
    if len.abs() < T::from_f64(UNIT_LENGTH_EPSILON) {
        return Err(NumericsError::DegenerateVector { length: len.to_f64() });
    }
    Ok(*v / len)
}

/// Some vector orthogonal to `v`. Not normalized.
///
/// Two components are kept, swapped and one of them negated; the remaining
/// axis is zeroed. The dominant axis is picked with `>=`, so it goes to the
/// lower axis on a tie, but the second axis is picked with a strict `>`:
/// `(5, 1, 1)` maps to `(-1, 0, 5)`, not `(-1, 5, 0)`. The zero vector maps
/// to the zero vector.
///
/// The `y`-dominant, `|x| <= |z|` branch returns `(0, -z, y)` on purpose.
/// The classic table has `(0, -y, z)` there, which is not orthogonal to `v`
/// (`(1, 5, 1)` would give a dot product of -24); do not restore it.
pub fn perpendicular<T: FloatingPoint>(v: &Vector3<T>) -> Vector3<T> {
    let zero = T::zero();
    let (a, b, c) = (v.x.abs(), v.y.abs(), v.z.abs());

    if a >= b && a >= c {
        if b > c {
            Vector3::new(-v.y, v.x, zero)
        } else {
            Vector3::new(-v.z, zero, v.x)
        }
    } else if b >= c {
        if a > c {
            Vector3::new(-v.y, v.x, zero)
        } else {
            Vector3::new(zero, -v.z, v.y)
        }
    } else if b > a {
        Vector3::new(zero, v.z, -v.y)
    } else {
        Vector3::new(v.z, zero, -v.x)
    }
}
