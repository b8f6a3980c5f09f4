//! ARM NEON kernel family for aarch64 (W = 4).
//!
//! NEON is always available on aarch64, so no runtime detection is needed.
//!
//! This family differs from the x86 families in two documented ways:
//!
//! - Both kernels accumulate with fused multiply-add (`vfmaq_f32`), so each
//!   product is rounded once instead of twice. Results can differ from the
//!   x86 families in the last bits; this is an accepted throughput/precision
//!   trade-off, not a bug.
//! - The dot product unrolls two 4-lane chunks per iteration into two
//!   independent accumulators (effective stride 8) to hide load latency, and
//!   folds the scalar remainder sum into lane 0 of the first accumulator
//!   *before* the pairwise horizontal reduction. Squared L2 uses a single
//!   accumulator and adds its remainder *after* reduction. The asymmetry is
//!   preserved deliberately; both orders stay within summation tolerance of
//!   the scalar reference.

#![allow(clippy::similar_names)]

use super::scalar;

/// NEON dot product with two-accumulator unrolling.
#[cfg(target_arch = "aarch64")]
#[inline]
pub(crate) fn dot_neon(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::aarch64::*;

    let len = a.len();
    let epochs = len / 8; // two 4-lane chunks per iteration
    let bulk = epochs * 8;

    // SAFETY: NEON intrinsics are always available on aarch64.
    let mut sum0 = unsafe { vdupq_n_f32(0.0) };
    let mut sum1 = unsafe { vdupq_n_f32(0.0) };

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    for i in 0..epochs {
        let offset = i * 8;
        // SAFETY: offset + 8 <= bulk <= len; vld1q_f32 is unaligned-safe.
        unsafe {
            let va0 = vld1q_f32(a_ptr.add(offset));
            let vb0 = vld1q_f32(b_ptr.add(offset));
            sum0 = vfmaq_f32(sum0, va0, vb0);

            let va1 = vld1q_f32(a_ptr.add(offset + 4));
            let vb1 = vld1q_f32(b_ptr.add(offset + 4));
            sum1 = vfmaq_f32(sum1, va1, vb1);
        }
    }

    let tail = scalar::dot(&a[bulk..], &b[bulk..]);

    // Remainder joins lane 0 of the first accumulator before the pairwise
    // reduction (canonical order for this family).
    // SAFETY: Lane access and pairwise adds are always safe on aarch64.
    unsafe {
        sum0 = vsetq_lane_f32::<0>(vgetq_lane_f32::<0>(sum0) + tail, sum0);
        let sum = vaddq_f32(sum0, sum1);
        let sum = vpaddq_f32(sum, sum);
        let sum = vpaddq_f32(sum, sum);
        vgetq_lane_f32::<0>(sum)
    }
}

/// NEON squared L2 distance, single accumulator.
#[cfg(target_arch = "aarch64")]
#[inline]
pub(crate) fn squared_l2_neon(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::aarch64::*;

    let len = a.len();
    let chunks = len / 4;
    let bulk = chunks * 4;

    // SAFETY: NEON intrinsics are always available on aarch64.
    let mut acc = unsafe { vdupq_n_f32(0.0) };

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    for i in 0..chunks {
        let offset = i * 4;
        // SAFETY: offset + 4 <= bulk <= len; vld1q_f32 is unaligned-safe.
        unsafe {
            let va = vld1q_f32(a_ptr.add(offset));
            let vb = vld1q_f32(b_ptr.add(offset));
            let diff = vsubq_f32(va, vb);
            acc = vfmaq_f32(acc, diff, diff);
        }
    }

    // Pairwise reduction: low half + high half, then lane 0 + lane 1.
    // SAFETY: Half extraction and lane reads are always safe on aarch64.
    let mut result = unsafe {
        let halves = vadd_f32(vget_low_f32(acc), vget_high_f32(acc));
        vget_lane_f32::<0>(halves) + vget_lane_f32::<1>(halves)
    };

    result += scalar::squared_l2(&a[bulk..], &b[bulk..]);
    result
}
