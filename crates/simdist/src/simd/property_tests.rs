//! Property tests: SIMD dispatch vs the scalar reference over generated
//! inputs.

use proptest::prelude::*;

use super::{dispatch, scalar};

/// Two equal-length vectors with values small enough that tolerance scaling
/// stays meaningful.
fn vec_pair(max_len: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (0..=max_len).prop_flat_map(|len| {
        (
            proptest::collection::vec(-100.0_f32..100.0, len),
            proptest::collection::vec(-100.0_f32..100.0, len),
        )
    })
}

/// Tolerance scales with the magnitude of the summed terms, not the result;
/// sign-mixed data cancels in the result while rounding error does not.
fn close(got: f32, want: f32, scale: f32) -> bool {
    (got - want).abs() <= 1e-2 + 1e-4 * scale.max(want.abs())
}

proptest! {
    #[test]
    fn prop_dot_matches_scalar((a, b) in vec_pair(1024)) {
        let got = dispatch::dot_product(&a, &b);
        let want = scalar::dot(&a, &b);
        let scale: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x * y).abs()).sum();
        prop_assert!(close(got, want, scale), "dot: got {}, expected {}", got, want);
    }

    #[test]
    fn prop_squared_l2_matches_scalar((a, b) in vec_pair(1024)) {
        let got = dispatch::squared_l2(&a, &b);
        let want = scalar::squared_l2(&a, &b);
        prop_assert!(close(got, want, want), "l2: got {}, expected {}", got, want);
    }

    #[test]
    fn prop_squared_l2_symmetric((a, b) in vec_pair(512)) {
        prop_assert_eq!(
            dispatch::squared_l2(&a, &b),
            dispatch::squared_l2(&b, &a)
        );
    }

    #[test]
    fn prop_self_distance_zero(a in proptest::collection::vec(-100.0_f32..100.0, 0..512)) {
        prop_assert_eq!(dispatch::squared_l2(&a, &a), 0.0);
    }

    #[test]
    fn prop_squared_l2_non_negative((a, b) in vec_pair(512)) {
        prop_assert!(dispatch::squared_l2(&a, &b) >= 0.0);
    }

    #[test]
    fn prop_dot_commutative((a, b) in vec_pair(512)) {
        // Multiplication commutes lane-wise and the accumulation order is
        // identical for both argument orders.
        prop_assert_eq!(
            dispatch::dot_product(&a, &b),
            dispatch::dot_product(&b, &a)
        );
    }
}
