//! Runtime SIMD level detection and dispatch wiring.
//!
//! This module provides:
//! - `SimdLevel` enum for representing detected SIMD capability
//! - `simd_level()` for cached runtime detection
//! - `warmup()` for eliminating cold-start latency
//! - The public entry points that route to family-specific kernels
//!
//! Detection runs once per process and the result is held in immutable
//! dispatch state, so no call pays per-invocation probing overhead. The
//! wide-register kernels are invoked only after their feature bit has been
//! confirmed; they perform no capability checks themselves.

use super::scalar;
use crate::error::DistanceError;

/// SIMD capability level detected at runtime.
///
/// Preference order is widest-register first: `Avx512` > `Avx2` > `Neon` >
/// `Scalar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    /// AVX-512F available (x86_64 only).
    Avx512,
    /// AVX2 available (x86_64 only).
    Avx2,
    /// NEON available (aarch64, always true).
    Neon,
    /// Scalar fallback.
    Scalar,
}

impl SimdLevel {
    /// Number of f32 elements per wide register for this level.
    #[must_use]
    pub const fn lane_width(self) -> usize {
        match self {
            SimdLevel::Avx512 => 16,
            SimdLevel::Avx2 => 8,
            SimdLevel::Neon => 4,
            SimdLevel::Scalar => 1,
        }
    }
}

/// Cached SIMD level - detected once at first use.
static SIMD_LEVEL: std::sync::OnceLock<SimdLevel> = std::sync::OnceLock::new();

/// Environment variable that pins dispatch to the scalar path.
///
/// Read once, at detection time. Useful for debugging numeric deltas
/// between SIMD and scalar accumulation and for CI baselines.
pub const FORCE_SCALAR_ENV: &str = "SIMDIST_FORCE_SCALAR";

/// Detects the best available SIMD level for the current CPU.
pub(super) fn detect_simd_level() -> SimdLevel {
    if std::env::var_os(FORCE_SCALAR_ENV).is_some() {
        return SimdLevel::Scalar;
    }

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            return SimdLevel::Avx512;
        }
        // The AVX2 family does not use FMA, so only the avx2 bit is needed.
        if is_x86_feature_detected!("avx2") {
            return SimdLevel::Avx2;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        return SimdLevel::Neon;
    }

    #[allow(unreachable_code)]
    SimdLevel::Scalar
}

/// Returns the cached SIMD capability level.
#[inline]
#[must_use]
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(|| {
        let level = detect_simd_level();
        tracing::debug!(?level, "simd capability detected");
        level
    })
}

/// Warms up the dispatch state to eliminate cold-start latency.
///
/// Call this at application startup to ensure the first distance
/// computations are as fast as subsequent ones.
///
/// # Example
///
/// ```
/// simdist::warmup();
/// ```
#[inline]
pub fn warmup() {
    let _ = simd_level();
    let warmup_size = 768;
    let a: Vec<f32> = vec![0.01; warmup_size];
    let b: Vec<f32> = vec![0.01; warmup_size];
    for _ in 0..3 {
        let _ = dot_product(&a, &b);
        let _ = squared_l2(&a, &b);
    }
}

// =============================================================================
// Public API with cached dispatch
// =============================================================================

/// Dot product with automatic dispatch to the best available SIMD family.
///
/// Returns `Σ a[i] * b[i]`. Empty inputs yield `0.0`.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[allow(clippy::inline_always)]
#[inline(always)]
#[must_use]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    match simd_level() {
        // SAFETY: each arm is reached only after its feature was detected.
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx512 => unsafe { super::x86_avx512::dot_avx512(a, b) },
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { super::x86_avx2::dot_avx2(a, b) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => super::neon::dot_neon(a, b),
        _ => scalar::dot(a, b),
    }
}

/// Squared L2 distance with automatic dispatch to the best available SIMD
/// family.
///
/// Returns `Σ (a[i] - b[i])^2`. Empty inputs yield `0.0`.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[allow(clippy::inline_always)]
#[inline(always)]
#[must_use]
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    match simd_level() {
        // SAFETY: each arm is reached only after its feature was detected.
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx512 => unsafe { super::x86_avx512::squared_l2_avx512(a, b) },
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => unsafe { super::x86_avx2::squared_l2_avx2(a, b) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => super::neon::squared_l2_neon(a, b),
        _ => scalar::squared_l2(a, b),
    }
}

/// Checked dot product: reports a length mismatch instead of panicking.
pub fn try_dot_product(a: &[f32], b: &[f32]) -> Result<f32, DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(dot_product(a, b))
}

/// Checked squared L2 distance: reports a length mismatch instead of
/// panicking.
pub fn try_squared_l2(a: &[f32], b: &[f32]) -> Result<f32, DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(squared_l2(a, b))
}
