//! SIMD kernel families and runtime dispatch.
//!
//! Each kernel family implements the same two-operation contract (dot
//! product, squared L2 distance) at a different hardware lane width:
//!
//! - `x86_avx512` — 512-bit lanes, W = 16 (x86_64 only)
//! - `x86_avx2` — 256-bit lanes, W = 8 (x86_64 only)
//! - `neon` — 128-bit lanes, W = 4, two-accumulator dot product (aarch64 only)
//! - `scalar` — reference implementations; also the shared remainder
//!   contract every SIMD family reduces to for trailing elements
//! - `dispatch` — cached capability detection and public entry points
//! - `engine` — `DistanceKernel` trait resolved once into process-wide
//!   dispatch state
//!
//! Every family splits `[0, n)` into a bulk region of `n - n % W` elements
//! processed in wide registers and a scalar remainder of `n % W` trailing
//! elements, so `bulk + remainder == n` and every element is read exactly
//! once. The kernels allocate nothing, never mutate their inputs, and are
//! safe to call concurrently on shared read-only buffers.

// =============================================================================
// Unsafe Invariants Reference
// =============================================================================
// SAFETY: Shared invariants for SIMD unsafe blocks in this module tree.
// - Condition 1: All pointer arithmetic is derived from slice pointers with
//   loop bounds proving in-range access for each lane width.
// - Condition 2: Target-featured functions are called only after runtime
//   feature checks or on architectures where the feature is guaranteed.
// - Condition 3: Unaligned loads use `*_loadu_*`/`vld1q_f32` intrinsics that
//   permit unaligned access.
// Reason: Intrinsics and pointer math are required for hot-path SIMD
// performance.

pub mod scalar;

#[cfg(target_arch = "x86_64")]
mod x86_avx512;

#[cfg(target_arch = "x86_64")]
mod x86_avx2;

#[cfg(target_arch = "aarch64")]
mod neon;

pub mod dispatch;
mod engine;

pub use dispatch::{
    dot_product, simd_level, squared_l2, try_dot_product, try_squared_l2, warmup, SimdLevel,
};
pub use engine::{kernel, DistanceKernel};

// =============================================================================
// Tests (separate files per project rules)
// =============================================================================




#[cfg(test)]
mod property_tests;

#[cfg(test)]
mod remainder_tests;
