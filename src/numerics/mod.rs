// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules,
// and the operators defined over those types.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
    pub mod covector;
    pub mod point;
    pub mod matrix;
}

pub mod conversion;
pub mod error;
pub mod tolerance;
pub mod unary;
