// src/numerics/tolerance.rs
// Fixed tolerances used by the fallback paths.

/// Lengths whose absolute value falls below this are treated as zero by
/// `unit_safe` and `unit_safe_or`.
///
/// This is an absolute tolerance, not scaled by the input. It suits
/// geometric coordinates of modest magnitude.
pub const UNIT_LENGTH_EPSILON: f64 = 1e-12;

/// Determinants whose absolute value falls below this make
/// `Matrix3x3::inverse` report failure. Compared in `f64`.
pub const SINGULAR_DETERMINANT_EPSILON: f64 = 1e-25;
