use affine3::{cov_to_vec, vec_to_cov, Point3, Vector3};
use approx::abs_diff_eq;
use proptest::prelude::*;

use super::triple;

proptest! {
    #[test]
    fn covector_round_trip_is_exact(c in triple()) {
        let v = Vector3::from(c);
        prop_assert_eq!(cov_to_vec(&vec_to_cov(&v)), v);
    }

    #[test]
    fn point_differences_chain(a in triple(), b in triple(), c in triple()) {
        let (p1, p2, p3) = (Point3::from(a), Point3::from(b), Point3::from(c));
        let chained = (p1 - p2) + (p2 - p3);
        let direct = p1 - p3;
        for i in 0..3 {
            prop_assert!(abs_diff_eq!(chained[i], direct[i], epsilon = 1e-6));
        }
    }

    #[test]
    fn point_plus_difference_returns_point(a in triple(), b in triple()) {
        let (p1, p2) = (Point3::from(a), Point3::from(b));
        let back = p2 + (p1 - p2);
        for i in 0..3 {
            prop_assert!(abs_diff_eq!(back[i], p1[i], epsilon = 1e-6));
        }
    }
}
