use affine3::{length, length_sq, maximum_norm, unit, unit_safe, unit_safe_or, CoVector3, Vector3};
use approx::relative_eq;
use proptest::prelude::*;

use super::triple;

proptest! {
    #[test]
    fn length_sq_is_length_squared(c in triple()) {
        let v = Vector3::from(c);
        prop_assert!(relative_eq!(length_sq(&v), length(&v) * length(&v), max_relative = 1e-12));
    }

    #[test]
    fn unit_has_length_one(c in triple()) {
        let v = Vector3::from(c);
        prop_assume!(length(&v) > 1e-3);
        prop_assert!(relative_eq!(length(&unit(&v)), 1.0, max_relative = 1e-9));
    }

    #[test]
    fn covector_norms_match_vector_norms(c in triple()) {
        let v = Vector3::from(c);
        let cv = CoVector3::new(c[0], c[1], c[2]);
        prop_assert_eq!(length(&v), length(&cv));
        prop_assert_eq!(length_sq(&v), length_sq(&cv));
        prop_assert_eq!(maximum_norm(&v), maximum_norm(&cv));
    }

    #[test]
    fn maximum_norm_bounds_every_component(c in triple()) {
        let v = Vector3::from(c);
        let max = maximum_norm(&v);
        prop_assert!(c.iter().all(|x| x.abs() <= max));
        prop_assert!(c.iter().any(|x| x.abs() == max));
    }

    #[test]
    fn unit_safe_agrees_with_unit_away_from_zero(c in triple()) {
        let v = Vector3::from(c);
        prop_assume!(length(&v) > 1e-6);
        let fallback = Vector3::new(0.0, 0.0, 1.0);
        prop_assert_eq!(unit_safe(&v), unit(&v));
        prop_assert_eq!(unit_safe_or(&v, &fallback), unit(&v));
    }
}

#[test]
fn unit_safe_fallback_policies_differ() {
    let tiny = Vector3::new(1e-13_f64, 0.0, 0.0);
    let fallback = Vector3::new(1.0, 0.0, 0.0);

    assert_eq!(unit_safe_or(&Vector3::zero(), &fallback), fallback);
    assert_eq!(unit_safe_or(&tiny, &fallback), fallback);
    assert_eq!(unit_safe(&Vector3::<f64>::zero()), Vector3::zero());
    assert_eq!(unit_safe(&tiny), tiny);
}

#[test]
fn maximum_norm_example() {
    assert_eq!(maximum_norm(&Vector3::new(3.0_f64, -5.0, 4.0)), 5.0);
}
