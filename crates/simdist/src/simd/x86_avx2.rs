//! AVX2 kernel family for x86_64 (W = 8).
//!
//! Mirrors the AVX-512 family at half the lane width: single accumulator,
//! separate multiply and add, horizontal reduction via a stack buffer summed
//! in lane index order. FMA is deliberately not used, so this family rounds
//! like the AVX-512 one and only the grouping of partial sums differs.
//!
//! All functions require runtime AVX2 detection before calling.

#![allow(clippy::similar_names)]

use super::scalar;

/// AVX2 dot product.
///
/// Processes 8 floats per iteration, then hands the trailing `n % 8`
/// elements to the scalar remainder loop.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 (enforced by `#[target_feature]` and runtime detection)
/// - `a.len() == b.len()` (enforced by the public API assert)
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[inline]
pub(crate) unsafe fn dot_avx2(a: &[f32], b: &[f32]) -> f32 {
    // SAFETY: Called only after runtime feature detection confirms AVX2.
    // - `_mm256_loadu_ps` handles unaligned loads
    // - Pointer arithmetic stays within bounds: i + 8 <= bulk <= len
    use std::arch::x86_64::*;

    let len = a.len();
    let bulk = len - len % 8;

    let mut acc = _mm256_setzero_ps();

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let mut i = 0;
    while i < bulk {
        let va = _mm256_loadu_ps(a_ptr.add(i));
        let vb = _mm256_loadu_ps(b_ptr.add(i));
        acc = _mm256_add_ps(acc, _mm256_mul_ps(va, vb));
        i += 8;
    }

    // Lane-extraction buffer, summed in index order.
    let mut lanes = [0.0_f32; 8];
    _mm256_storeu_ps(lanes.as_mut_ptr(), acc);
    let mut result: f32 = lanes.iter().sum();

    result += scalar::dot(&a[bulk..], &b[bulk..]);
    result
}

/// AVX2 squared L2 distance.
///
/// # Safety
///
/// Same requirements as [`dot_avx2`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[inline]
pub(crate) unsafe fn squared_l2_avx2(a: &[f32], b: &[f32]) -> f32 {
    // SAFETY: See `dot_avx2` and the module-level Unsafe Invariants
    // Reference in simd/mod.rs.
    use std::arch::x86_64::*;

    let len = a.len();
    let bulk = len - len % 8;

    let mut acc = _mm256_setzero_ps();

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let mut i = 0;
    while i < bulk {
        let va = _mm256_loadu_ps(a_ptr.add(i));
        let vb = _mm256_loadu_ps(b_ptr.add(i));
        let diff = _mm256_sub_ps(va, vb);
        acc = _mm256_add_ps(acc, _mm256_mul_ps(diff, diff));
        i += 8;
    }

    let mut lanes = [0.0_f32; 8];
    _mm256_storeu_ps(lanes.as_mut_ptr(), acc);
    let mut result: f32 = lanes.iter().sum();

    result += scalar::squared_l2(&a[bulk..], &b[bulk..]);
    result
}
