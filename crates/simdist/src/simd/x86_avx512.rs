//! AVX-512F kernel family for x86_64 (W = 16).
//!
//! Both kernels use a single wide accumulator with separate multiply and
//! add (no FMA), so rounding matches a lane-grouped multiply-then-sum.
//! Horizontal reduction stores the accumulator into a stack buffer and sums
//! the 16 lanes in index order; that order is this family's canonical
//! reduction and is relied on by the equivalence tests.
//!
//! All functions require runtime AVX-512F detection before calling.

#![allow(clippy::incompatible_msrv)]
#![allow(clippy::similar_names)]

use super::scalar;

/// AVX-512 dot product.
///
/// Processes 16 floats per iteration, then hands the trailing `n % 16`
/// elements to the scalar remainder loop.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX-512F (enforced by `#[target_feature]` and runtime detection)
/// - `a.len() == b.len()` (enforced by the public API assert)
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f")]
#[inline]
pub(crate) unsafe fn dot_avx512(a: &[f32], b: &[f32]) -> f32 {
    // SAFETY: Called only after runtime feature detection confirms AVX-512F.
    // - `_mm512_loadu_ps` handles unaligned loads
    // - Pointer arithmetic stays within bounds: i + 16 <= bulk <= len
    use std::arch::x86_64::*;

    let len = a.len();
    let bulk = len - len % 16;

    let mut acc = _mm512_setzero_ps();

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let mut i = 0;
    while i < bulk {
        let va = _mm512_loadu_ps(a_ptr.add(i));
        let vb = _mm512_loadu_ps(b_ptr.add(i));
        acc = _mm512_add_ps(acc, _mm512_mul_ps(va, vb));
        i += 16;
    }

    // Lane-extraction buffer, summed in index order.
    let mut lanes = [0.0_f32; 16];
    _mm512_storeu_ps(lanes.as_mut_ptr(), acc);
    let mut result: f32 = lanes.iter().sum();

    result += scalar::dot(&a[bulk..], &b[bulk..]);
    result
}

/// AVX-512 squared L2 distance.
///
/// Same bulk/remainder shape as [`dot_avx512`]; the per-chunk operation is
/// subtract, square, accumulate.
///
/// # Safety
///
/// Same requirements as [`dot_avx512`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f")]
#[inline]
pub(crate) unsafe fn squared_l2_avx512(a: &[f32], b: &[f32]) -> f32 {
    // SAFETY: See `dot_avx512` and the module-level Unsafe Invariants
    // Reference in simd/mod.rs.
    use std::arch::x86_64::*;

    let len = a.len();
    let bulk = len - len % 16;

    let mut acc = _mm512_setzero_ps();

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let mut i = 0;
    while i < bulk {
        let va = _mm512_loadu_ps(a_ptr.add(i));
        let vb = _mm512_loadu_ps(b_ptr.add(i));
        let diff = _mm512_sub_ps(va, vb);
        acc = _mm512_add_ps(acc, _mm512_mul_ps(diff, diff));
        i += 16;
    }

    let mut lanes = [0.0_f32; 16];
    _mm512_storeu_ps(lanes.as_mut_ptr(), acc);
    let mut result: f32 = lanes.iter().sum();

    result += scalar::squared_l2(&a[bulk..], &b[bulk..]);
    result
}
