// tests/integration/mod.rs
// Property tests, one module per operator family.

mod conversion_properties;
mod inverse_properties;
mod norm_properties;

use proptest::prelude::*;

/// Finite coordinates in a sane range, so squares cannot overflow.
pub fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6_f64
}

pub fn triple() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(coordinate())
}
