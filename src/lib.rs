//! A small dense matrix arithmetic library.
//!
//! The central type is [`Matrix`], a row-major grid of [`f64`] values whose shape is fixed at
//! construction. It supports the usual elementwise arithmetic, matrix and scalar multiplication,
//! transposition and the trace, as well as determinants and inverses of 1x1 and 2x2 matrices.
//!
//! # Goals & Non-Goals
//!
//! - Keep the API small. There is a single matrix type with [`f64`] elements, and no separate
//!   vector type: vectors are plain slices, see [`dot_product`].
//! - Every fallible operation returns a [`Result`] carrying a [`MatrixError`] that describes the
//!   offending shapes. Operator overloads (`+`, `-`, `*`) perform the same checks as their named
//!   counterparts and return the same errors.
//! - [`Matrix::determinant`] and [`Matrix::inverse`] are only implemented for matrices up to 2x2.
//!   Larger square matrices are rejected with [`MatrixError::UnsupportedSize`] instead of falling
//!   back to a general (and numerically delicate) algorithm.
//! - No decompositions, sparse storage, broadcasting or SIMD.
//!
//! # Examples
//!
//! ```
//! # use gridmat::*;
//! let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let b = Matrix::new(vec![vec![2.0, 0.0], vec![1.0, 2.0]])?;
//!
//! assert_eq!((&a * &b)?, Matrix::new(vec![vec![4.0, 4.0], vec![10.0, 8.0]])?);
//! assert_eq!(a.determinant()?, -2.0);
//! assert_eq!(a.trace()?, 5.0);
//! assert_eq!(2.0 * &a, &a * 2.0);
//! # Ok::<_, MatrixError>(())
//! ```

use log::LevelFilter;

mod error;
mod matrix;
mod vector;

pub use error::*;
pub use matrix::*;
pub use vector::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `gridmat` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
