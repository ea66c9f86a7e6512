// src/numerics/conversion.rs
// Explicit vector <-> covector reinterpretation.
//
// Point - Point -> Vector lives with Point3 as its `Sub` impl.

use super::types::covector::CoVector3;
use super::types::traits::FloatingPoint;
use super::types::vector::Vector3;

/// Reinterpret a vector's components as a covector.
///
/// This identifies the two spaces through the basis, which is only
/// meaningful for an orthonormal basis. It is not a dual-basis transform.
pub fn vec_to_cov<T: FloatingPoint>(v: &Vector3<T>) -> CoVector3<T> {
    CoVector3::new(v[0], v[1], v[2])
}

/// Reinterpret a covector's components as a vector. Inverse of [`vec_to_cov`].
pub fn cov_to_vec<T: FloatingPoint>(cv: &CoVector3<T>) -> Vector3<T> {
    Vector3::new(cv[0], cv[1], cv[2])
}
