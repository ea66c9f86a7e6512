// src/numerics/error.rs
// Error type for the checked (`try_*`) entry points.

/// Errors reported by the `Result`-returning variants of the numerics
/// operations. The sentinel-returning operations never produce these.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Singular matrix: |determinant| = {determinant:e} is below the inversion threshold")]
    SingularMatrix { determinant: f64 },

    #[error("Degenerate vector: length {length:e} is too small to normalize")]
    DegenerateVector { length: f64 },
}
