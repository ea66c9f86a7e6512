use affine3::Matrix3x3;
use approx::abs_diff_eq;
use proptest::prelude::*;

use super::triple;

fn matrix() -> impl Strategy<Value = Matrix3x3<f64>> {
    (triple(), triple(), triple()).prop_map(|(r0, r1, r2)| Matrix3x3::from_rows(r0, r1, r2))
}

proptest! {
    #[test]
    fn inverse_of_diagonal_matrix(d in prop::array::uniform3(0.5..100.0_f64)) {
        let m = Matrix3x3::from_rows([d[0], 0.0, 0.0], [0.0, d[1], 0.0], [0.0, 0.0, d[2]]);
        let (inv, ok) = m.inverse();
        prop_assert!(ok);
        for i in 0..3 {
            prop_assert!(abs_diff_eq!(inv[(i, i)], 1.0 / d[i], epsilon = 1e-12));
        }
    }

    #[test]
    fn inverse_times_matrix_is_identity(m in matrix()) {
        // Keep away from near-singular inputs where the product loses precision.
        let scale = (0..3).flat_map(|i| m.row(i)).fold(0.0_f64, |acc, x| acc.max(x.abs()));
        prop_assume!(scale > 1.0);
        prop_assume!(m.determinant().abs() > 1e-3 * scale * scale * scale);

        let (inv, ok) = m.inverse();
        prop_assert!(ok);
        let product = m * inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!(abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-6));
            }
        }
    }

    #[test]
    fn matrix_with_zero_row_fails(r0 in triple(), r1 in triple()) {
        // every cofactor term picks one entry from the zero row
        let m = Matrix3x3::from_rows(r0, r1, [0.0; 3]);
        let (inv, ok) = m.inverse();
        prop_assert!(!ok);
        prop_assert_eq!(inv, Matrix3x3::identity());
        prop_assert!(m.try_inverse().is_err());
    }
}

#[test]
fn zero_and_identity_matrices() {
    let (inv, ok) = Matrix3x3::<f64>::zero().inverse();
    assert!(!ok);
    assert_eq!(inv, Matrix3x3::identity());

    let (inv, ok) = Matrix3x3::<f64>::identity().inverse();
    assert!(ok);
    assert_eq!(inv, Matrix3x3::identity());
}
