//! On-demand validity checks for [`Vector3`].
//!
//! `is_*` predicates are for branching. `assert_*` checks are for enforcing
//! invariants: they return `Ok(&self)` so they can lead a query chain, and a
//! [`Vector3Error::PreconditionViolation`] carrying the rendered vector
//! otherwise.
//!
//! Two unit-length tolerances coexist on purpose. [`Vector3::is_unit`] uses
//! [`EPSILON`] and effectively demands exact unit length, while
//! [`Vector3::assert_unit`] (and therefore [`Vector3::angle`]) accepts
//! anything within [`UNIT_ASSERT_TOLERANCE`]. Callers depend on both.

use super::vec3::{Component, Vector3, EPSILON};
use crate::error::Vector3Error;

/// Magnitude tolerance of [`Vector3::assert_unit`].
pub const UNIT_ASSERT_TOLERANCE: f64 = 0.0001;

impl Vector3 {
    /// All components within [`EPSILON`] of zero.
    pub fn is_zero(&self) -> bool {
        self.x.abs() < EPSILON && self.y.abs() < EPSILON && self.z.abs() < EPSILON
    }

    /// No component is NaN. Infinities pass.
    pub fn is_ok(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan() && !self.z.is_nan()
    }

    /// `|magnitude - 1| < EPSILON`
    pub fn is_unit(&self) -> bool {
        (1.0 - self.magnitude()).abs() < EPSILON
    }

    /// Every component survives truncation to `i32` unchanged.
    ///
    /// Fractions, NaN and values outside the `i32` range are rejected.
    pub fn is_integers(&self) -> bool {
        fn integral(v: f64) -> bool {
            v == f64::from(v as i32)
        }
        integral(self.x) && integral(self.y) && integral(self.z)
    }

    /// Strictly less than `other` on all three axes.
    pub fn is_less_than(&self, other: &Vector3) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    /// Strictly greater than `other` on all three axes.
    pub fn is_greater_than(&self, other: &Vector3) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }

    /// Every component strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.is_greater_than(&Vector3::ZERO)
    }

    /// # Errors
    /// `PreconditionViolation` if any component is NaN.
    pub fn assert_ok(&self) -> Result<&Self, Vector3Error> {
        if !self.is_ok() {
            return Err(Vector3Error::precondition(format!("not OK {self}")));
        }
        Ok(self)
    }

    /// # Errors
    /// `PreconditionViolation` if [`is_zero`](Self::is_zero) holds.
    pub fn assert_not_zero(&self) -> Result<&Self, Vector3Error> {
        if self.is_zero() {
            return Err(Vector3Error::precondition(format!("is zero {self}")));
        }
        Ok(self)
    }

    /// # Errors
    /// `PreconditionViolation` unless `self` is strictly less than `bound` on
    /// every axis. The message names both vectors.
    pub fn assert_less_than(&self, bound: &Vector3) -> Result<&Self, Vector3Error> {
        if !self.is_less_than(bound) {
            return Err(Vector3Error::precondition(format!(
                "not less than {self} !< {bound}"
            )));
        }
        Ok(self)
    }

    /// # Errors
    /// `PreconditionViolation` unless every component is strictly positive.
    pub fn assert_positive(&self) -> Result<&Self, Vector3Error> {
        if !self.is_positive() {
            return Err(Vector3Error::precondition(format!("not positive {self}")));
        }
        Ok(self)
    }

    /// Magnitude must be within [`UNIT_ASSERT_TOLERANCE`] of one.
    ///
    /// # Errors
    /// `PreconditionViolation` naming the vector and its magnitude.
    pub fn assert_unit(&self) -> Result<&Self, Vector3Error> {
        let m = self.magnitude();
        if m.is_nan() || (1.0 - m).abs() > UNIT_ASSERT_TOLERANCE {
            return Err(Vector3Error::precondition(format!(
                "not a unit vector: {self}, magnitude: {}",
                Component(m)
            )));
        }
        Ok(self)
    }

    /// # Errors
    /// `PreconditionViolation` if [`is_integers`](Self::is_integers) fails.
    pub fn assert_integers(&self) -> Result<&Self, Vector3Error> {
        if !self.is_integers() {
            return Err(Vector3Error::precondition(format!("not integers {self}")));
        }
        Ok(self)
    }

    /// Angle in radians between two unit vectors, in `[0, π]`.
    ///
    /// Does not normalize. Normalize both inputs first. Inputs within the
    /// unit tolerance can have a dot product just outside `[-1, 1]`, so it is
    /// clamped before `acos`.
    ///
    /// # Errors
    /// `PreconditionViolation` if either vector fails [`assert_unit`](Self::assert_unit).
    pub fn angle(&self, other: &Vector3) -> Result<f64, Vector3Error> {
        self.assert_unit()?;
        other.assert_unit()?;
        Ok(self.dot(other).clamp(-1.0, 1.0).acos())
    }
}
