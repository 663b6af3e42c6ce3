//! Error type shared by record decoding and the `assert_*` family.

use std::fmt;

/// Errors raised by [`Vector3`](crate::Vector3) conversions and assertions.
///
/// Only two situations are guarded. Everything else follows IEEE-754
/// semantics (overflow to infinity, invalid operations to NaN).
#[derive(Debug, Clone, PartialEq)]
pub enum Vector3Error {
    /// A structural record had a missing or non-numeric component.
    InvalidArgument {
        /// Component name (`"x"`, `"y"` or `"z"`), or `"record"` when the
        /// input is not an object at all.
        field: &'static str,
        /// Rendering of the offending value.
        found: String,
    },
    /// An `assert_*` check (or the unit-length precondition of `angle`) failed.
    ///
    /// The message embeds the vector rendering and the comparison target.
    PreconditionViolation(String),
}

impl Vector3Error {
    /// Build an [`InvalidArgument`](Self::InvalidArgument) error.
    pub(crate) fn invalid_argument(field: &'static str, found: &impl fmt::Display) -> Self {
        Vector3Error::InvalidArgument {
            field,
            found: found.to_string(),
        }
    }

    /// Build a [`PreconditionViolation`](Self::PreconditionViolation), logging it
    /// at debug level.
    pub(crate) fn precondition(message: String) -> Self {
        tracing::debug!(%message, "vector precondition violated");
        Vector3Error::PreconditionViolation(message)
    }

    /// Returns true for [`InvalidArgument`](Self::InvalidArgument).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Vector3Error::InvalidArgument { .. })
    }

    /// Returns true for [`PreconditionViolation`](Self::PreconditionViolation).
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Vector3Error::PreconditionViolation(_))
    }
}

impl fmt::Display for Vector3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vector3Error::InvalidArgument { field, found } => {
                write!(f, "Invalid argument: {field} is not a number: {found}")
            }
            Vector3Error::PreconditionViolation(msg) => write!(f, "Precondition violated: {msg}"),
        }
    }
}

impl std::error::Error for Vector3Error {}
