//! # simdist
//!
//! Runtime-dispatched SIMD kernels for the two primitives at the heart of
//! nearest-neighbor search and embedding similarity: the `f32` dot product
//! and the squared Euclidean (L2) distance.
//!
//! Three kernel families cover the common vector ISAs (AVX-512, AVX2 on
//! x86_64; NEON on aarch64), each pairing a wide-register bulk loop with a
//! scalar remainder pass so that vectors of any length are handled
//! consistently. A scalar fallback serves CPUs without a vector extension
//! and doubles as the reference implementation for tests.
//!
//! ## Quick start
//!
//! ```rust
//! use simdist::{dot_product, squared_l2};
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let b = [9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
//!
//! assert!((dot_product(&a, &b) - 165.0).abs() < 1e-4);
//! assert!((squared_l2(&a, &b) - 240.0).abs() < 1e-4);
//! ```
//!
//! ## Numeric contract
//!
//! SIMD accumulation groups partial sums by lane before the horizontal
//! reduction, so results are *not* bit-identical to a left-to-right scalar
//! loop. They agree within floating-point summation tolerance, and each
//! family's reduction order is fixed and documented in its module. Callers
//! that need bit-exact reproducibility across machines should pin dispatch
//! to the scalar path (see [`simd::dispatch`]).

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::unreadable_literal
    )
)]

pub mod error;
pub mod simd;

pub use error::DistanceError;
pub use simd::{
    dot_product, kernel, simd_level, squared_l2, try_dot_product, try_squared_l2, warmup,
    DistanceKernel, SimdLevel,
};
