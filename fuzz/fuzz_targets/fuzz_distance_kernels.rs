//! Fuzz target for the SIMD distance kernels.
//!
//! Tests the dispatched kernels with arbitrary vectors to find:
//! - Panics on edge cases (NaN, Inf, very large/small values, odd lengths)
//! - Divergence between the SIMD path and the scalar reference
//! - Remainder handling problems at arbitrary lengths
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_distance_kernels
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use simdist::simd::scalar;
use simdist::{dot_product, squared_l2, try_dot_product, try_squared_l2};

/// Fuzzing input for kernel calls.
#[derive(Arbitrary, Debug)]
struct KernelInput {
    /// First vector (limited to reasonable size)
    vec_a: Vec<f32>,
    /// Second vector (truncated/padded to match vec_a length)
    vec_b: Vec<f32>,
}

fuzz_target!(|input: KernelInput| {
    // Limit vector size to prevent OOM
    let max_dim = 4096;
    let dim = input.vec_a.len().min(max_dim);

    let a: Vec<f32> = input.vec_a.into_iter().take(dim).collect();

    // The checked API must reject mismatched lengths without panicking.
    if input.vec_b.len() != a.len() {
        let _ = try_dot_product(&a, &input.vec_b);
        let _ = try_squared_l2(&a, &input.vec_b);
    }

    let mut b: Vec<f32> = input.vec_b.into_iter().take(dim).collect();
    b.resize(dim, 0.0);

    // Neither operation may panic, whatever the values.
    let dot = dot_product(&a, &b);
    let l2 = squared_l2(&a, &b);

    // Differential check against the scalar reference, only when the data
    // is tame enough for a tolerance to be meaningful.
    let finite = a.iter().chain(b.iter()).all(|x| x.is_finite() && x.abs() < 1e15);
    if finite {
        let dot_ref = scalar::dot(&a, &b);
        let l2_ref = scalar::squared_l2(&a, &b);
        if dot_ref.is_finite() && l2_ref.is_finite() {
            let scale: f32 = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x * y).abs())
                .sum();
            if scale.is_finite() {
                let tol = 1.0_f32.max(scale) * 1e-3;
                assert!(
                    (dot - dot_ref).abs() <= tol,
                    "dot diverged: simd={dot}, scalar={dot_ref}, n={dim}"
                );
            }
            if l2_ref.is_finite() {
                let tol = 1.0_f32.max(l2_ref) * 1e-3;
                assert!(
                    (l2 - l2_ref).abs() <= tol,
                    "l2 diverged: simd={l2}, scalar={l2_ref}, n={dim}"
                );
            }
        }
    }
});
