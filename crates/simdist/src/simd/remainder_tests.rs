//! Remainder correctness: every n from zero through two full bulk chunks.
//!
//! Exercises every boundary between an empty bulk region, a partial final
//! chunk, and exactly-full chunks, for each family's lane width.

use super::scalar;

fn ramp(n: usize, step: f32) -> Vec<f32> {
    (0..n).map(|i| (i as f32 + 1.0) * step).collect()
}

fn assert_close(got: f32, want: f32, context: &str) {
    let tol = 1e-5 + 1e-4 * want.abs();
    assert!(
        (got - want).abs() <= tol,
        "{context}: got {got}, expected {want}"
    );
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_avx512_remainder_sweep() {
    if !is_x86_feature_detected!("avx512f") {
        return;
    }
    // W = 16: cover empty bulk, partial chunk, one and two full chunks.
    for n in 0..=32 {
        let a = ramp(n, 0.5);
        let b = ramp(n, -0.25);
        // SAFETY: avx512f confirmed above.
        unsafe {
            assert_close(
                super::x86_avx512::dot_avx512(&a, &b),
                scalar::dot(&a, &b),
                &format!("avx512 dot n={n}"),
            );
            assert_close(
                super::x86_avx512::squared_l2_avx512(&a, &b),
                scalar::squared_l2(&a, &b),
                &format!("avx512 l2 n={n}"),
            );
        }
    }
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_avx2_remainder_sweep() {
    if !is_x86_feature_detected!("avx2") {
        return;
    }
    // W = 8.
    for n in 0..=16 {
        let a = ramp(n, 0.5);
        let b = ramp(n, -0.25);
        // SAFETY: avx2 confirmed above.
        unsafe {
            assert_close(
                super::x86_avx2::dot_avx2(&a, &b),
                scalar::dot(&a, &b),
                &format!("avx2 dot n={n}"),
            );
            assert_close(
                super::x86_avx2::squared_l2_avx2(&a, &b),
                scalar::squared_l2(&a, &b),
                &format!("avx2 l2 n={n}"),
            );
        }
    }
}

#[cfg(target_arch = "aarch64")]
#[test]
fn test_neon_remainder_sweep() {
    // W = 4, but the dot product strides 8 (two chunks per iteration), so
    // sweep through two full strides to cover its 0..=7 remainder range.
    for n in 0..=16 {
        let a = ramp(n, 0.5);
        let b = ramp(n, -0.25);
        assert_close(
            super::neon::dot_neon(&a, &b),
            scalar::dot(&a, &b),
            &format!("neon dot n={n}"),
        );
        assert_close(
            super::neon::squared_l2_neon(&a, &b),
            scalar::squared_l2(&a, &b),
            &format!("neon l2 n={n}"),
        );
    }
}

#[test]
fn test_dispatch_remainder_sweep() {
    // Whatever family dispatch selected, every n through 2x the widest lane
    // width must match the reference.
    for n in 0..=32 {
        let a = ramp(n, 0.125);
        let b = ramp(n, 0.375);
        assert_close(
            super::dispatch::dot_product(&a, &b),
            scalar::dot(&a, &b),
            &format!("dispatch dot n={n}"),
        );
        assert_close(
            super::dispatch::squared_l2(&a, &b),
            scalar::squared_l2(&a, &b),
            &format!("dispatch l2 n={n}"),
        );
    }
}
