//! Float3 Core Library
//!
//! A mutable three-component `f64` vector used as a geometric primitive for
//! positions, directions, extents and colors.
//!
//! ## Overview
//!
//! - [`Vector3`]: three public fields and a library of in-place, chainable
//!   operations (`add`, `scale`, `normalize`, `cross`, ...), pure queries
//!   (`magnitude`, `dot`, `distance`, `angle`, ...) and validity checks
//!   (`is_ok`, `is_unit`, `assert_not_zero`, ...)
//! - [`XyzRecord`]: the structural `{x, y, z}` capability accepted by the free
//!   functions [`dot`], [`distance`] and [`distance_squared`]
//! - [`Vector3Error`]: `InvalidArgument` from record decoding and
//!   `PreconditionViolation` from the `assert_*` family
//!
//! Arithmetic follows IEEE-754 without guards: dividing by zero gives
//! infinities, normalizing a zero vector gives NaN. Check with the predicates
//! when that matters.
//!
//! ```
//! use float3_core::Vector3;
//!
//! let mut dir = Vector3::new(3.0, 4.0, 0.0);
//! dir.assert_not_zero()?;
//! dir.normalize();
//! let angle = dir.angle(&Vector3::new(1.0, 0.0, 0.0))?;
//! assert!((angle - 0.6_f64.acos()).abs() < 1e-12);
//! # Ok::<(), float3_core::Vector3Error>(())
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Re-export core types
pub use core_types::{distance, distance_squared, dot, XyzRecord};
pub use core_types::{Vector3, EPSILON, SHORT_PRECISION, UNIT_ASSERT_TOLERANCE};
pub use error::Vector3Error;
