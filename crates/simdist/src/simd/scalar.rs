//! Scalar kernels for f32 dot product and squared L2 distance.
//!
//! These functions serve three roles:
//! - Fallback family on CPUs without a usable vector extension
//! - Reference implementations for testing SIMD correctness
//! - Shared remainder contract: every SIMD family hands its trailing
//!   `n % W` elements to these loops

/// Dot product, plain left-to-right accumulation.
///
/// This is the canonical accumulation order the SIMD families are compared
/// against in tests. Operates on `min(a.len(), b.len())` elements.
#[inline]
#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Squared L2 distance, plain left-to-right accumulation.
#[inline]
#[must_use]
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
