//! # affine3
//!
//! Generic 3D vector, covector, point and matrix primitives: norms,
//! normalization with fallbacks, perpendicular construction, closed-form
//! 3x3 inversion, and the explicit conversions between the types.
//!
//! Everything is generic over a [`FloatingPoint`] coordinate (`f32` or
//! `f64`), pure, and allocation free.
//!
//! ```rust
//! use affine3::{length, unit_safe_or, Matrix3x3, Point3, Vector3};
//!
//! let a = Point3::new(1.0_f64, 2.0, 3.0);
//! let b = Point3::new(1.0_f64, 2.0, 1.0);
//! let dir = unit_safe_or(&(a - b), &Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(dir, Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(length(&dir), 1.0);
//!
//! let (inv, ok) = Matrix3x3::<f64>::zero().inverse();
//! assert!(!ok);
//! assert_eq!(inv, Matrix3x3::identity());
//! ```

pub mod numerics;

pub use numerics::conversion::{cov_to_vec, vec_to_cov};
pub use numerics::error::NumericsError;
pub use numerics::tolerance::{SINGULAR_DETERMINANT_EPSILON, UNIT_LENGTH_EPSILON};
pub use numerics::types::covector::CoVector3;
pub use numerics::types::matrix::Matrix3x3;
pub use numerics::types::point::Point3;
pub use numerics::types::traits::{FloatingPoint, Triple};
pub use numerics::types::vector::Vector3;
pub use numerics::unary::{
    length, length_sq, maximum_norm, perpendicular, try_unit, unit, unit_safe, unit_safe_or,
};
