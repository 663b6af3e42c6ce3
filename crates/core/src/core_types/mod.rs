//! Core types and utilities

pub mod record;
pub mod validation;
pub mod vec3;

pub use record::{distance, distance_squared, dot, XyzRecord};
pub use validation::UNIT_ASSERT_TOLERANCE;
pub use vec3::{Vector3, EPSILON, SHORT_PRECISION};
