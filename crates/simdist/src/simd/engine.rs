//! Capability-polymorphic kernel interface.
//!
//! Models the kernel families as implementations of one abstract
//! two-operation interface, selected behind a single capability-detection
//! indirection resolved once at process start and held as immutable
//! process-wide dispatch state. Callers that want to hold a concrete
//! engine (an index, a batch scorer) take a `&'static dyn DistanceKernel`
//! from [`kernel`] instead of re-matching on [`SimdLevel`] per call.

use super::dispatch::{simd_level, SimdLevel};
use super::scalar;

/// One hardware-specific implementation of the dot-product/squared-L2
/// operation pair.
///
/// Implementations never allocate, never mutate their inputs, and are safe
/// to share across threads.
pub trait DistanceKernel: Send + Sync {
    /// Computes `Σ a[i] * b[i]` over `a.len()` elements.
    fn dot(&self, a: &[f32], b: &[f32]) -> f32;

    /// Computes `Σ (a[i] - b[i])^2` over `a.len()` elements.
    fn squared_l2(&self, a: &[f32], b: &[f32]) -> f32;

    /// Number of f32 elements processed per wide register (1 for scalar).
    fn lane_width(&self) -> usize;
}

/// AVX-512F engine (W = 16).
#[cfg(target_arch = "x86_64")]
struct Avx512Kernel;

#[cfg(target_arch = "x86_64")]
impl DistanceKernel for Avx512Kernel {
    fn dot(&self, a: &[f32], b: &[f32]) -> f32 {
        // SAFETY: this engine is only selected after AVX-512F detection.
        unsafe { super::x86_avx512::dot_avx512(a, b) }
    }

    fn squared_l2(&self, a: &[f32], b: &[f32]) -> f32 {
        // SAFETY: this engine is only selected after AVX-512F detection.
        unsafe { super::x86_avx512::squared_l2_avx512(a, b) }
    }

    fn lane_width(&self) -> usize {
        16
    }
}

/// AVX2 engine (W = 8).
#[cfg(target_arch = "x86_64")]
struct Avx2Kernel;

#[cfg(target_arch = "x86_64")]
impl DistanceKernel for Avx2Kernel {
    fn dot(&self, a: &[f32], b: &[f32]) -> f32 {
        // SAFETY: this engine is only selected after AVX2 detection.
        unsafe { super::x86_avx2::dot_avx2(a, b) }
    }

    fn squared_l2(&self, a: &[f32], b: &[f32]) -> f32 {
        // SAFETY: this engine is only selected after AVX2 detection.
        unsafe { super::x86_avx2::squared_l2_avx2(a, b) }
    }

    fn lane_width(&self) -> usize {
        8
    }
}

/// NEON engine (W = 4).
#[cfg(target_arch = "aarch64")]
struct NeonKernel;

#[cfg(target_arch = "aarch64")]
impl DistanceKernel for NeonKernel {
    fn dot(&self, a: &[f32], b: &[f32]) -> f32 {
        super::neon::dot_neon(a, b)
    }

    fn squared_l2(&self, a: &[f32], b: &[f32]) -> f32 {
        super::neon::squared_l2_neon(a, b)
    }

    fn lane_width(&self) -> usize {
        4
    }
}

/// Scalar engine, available everywhere.
struct ScalarKernel;

impl DistanceKernel for ScalarKernel {
    fn dot(&self, a: &[f32], b: &[f32]) -> f32 {
        scalar::dot(a, b)
    }

    fn squared_l2(&self, a: &[f32], b: &[f32]) -> f32 {
        scalar::squared_l2(a, b)
    }

    fn lane_width(&self) -> usize {
        1
    }
}

/// Resolved engine - selected once from the detected SIMD level.
static KERNEL: std::sync::OnceLock<&'static dyn DistanceKernel> = std::sync::OnceLock::new();

/// Returns the kernel engine for the detected SIMD level.
///
/// The selection is made once and reused for the lifetime of the process;
/// the returned reference is valid forever and cheap to copy around.
#[must_use]
pub fn kernel() -> &'static dyn DistanceKernel {
    *KERNEL.get_or_init(|| match simd_level() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx512 => &Avx512Kernel,
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx2 => &Avx2Kernel,
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => &NeonKernel,
        _ => &ScalarKernel,
    })
}
