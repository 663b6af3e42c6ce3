//! Structural `{x, y, z}` records.
//!
//! Two entry points for data that is not already a [`Vector3`]:
//! - [`XyzRecord`] is the static capability: anything with numeric `x`, `y`,
//!   `z` accessors. The free functions here ([`dot`], [`distance`],
//!   [`distance_squared`]) and the in-place arithmetic on `Vector3` accept any
//!   implementor.
//! - [`Vector3::from_record`] decodes a dynamic record (a `serde_json::Value`
//!   coming from configuration or a network payload), checking that every
//!   component is a number.
//!
//! # Usage
//! ```
//! use float3_core::{dot, Vector3, XyzRecord};
//! use serde_json::json;
//!
//! struct Probe { px: f64, py: f64, pz: f64 }
//! impl XyzRecord for Probe {
//!     fn x(&self) -> f64 { self.px }
//!     fn y(&self) -> f64 { self.py }
//!     fn z(&self) -> f64 { self.pz }
//! }
//!
//! let p = Probe { px: 1.0, py: 2.0, pz: 3.0 };
//! assert_eq!(dot(&p, &[1.0, 1.0, 1.0]), 6.0);
//!
//! let v = Vector3::from_record(&json!({ "x": 1, "y": 2.5, "z": -3 })).unwrap();
//! assert_eq!(v.to_array(), [1.0, 2.5, -3.0]);
//! assert!(Vector3::from_record(&json!({ "x": 1, "y": "a", "z": 3 })).is_err());
//! ```

use serde_json::{Map, Value};

use super::vec3::Vector3;
use crate::error::Vector3Error;

/// Anything exposing numeric `x`, `y` and `z` components.
pub trait XyzRecord {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

impl<T: XyzRecord + ?Sized> XyzRecord for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }
}

impl XyzRecord for Vector3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl XyzRecord for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl XyzRecord for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
}

impl XyzRecord for nalgebra::Vector3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl XyzRecord for nalgebra::Point3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

/// Dot product of two records.
#[inline]
pub fn dot(a: &impl XyzRecord, b: &impl XyzRecord) -> f64 {
    (a.x() * b.x()) + (a.y() * b.y()) + (a.z() * b.z())
}

/// Euclidean distance between two records.
#[inline]
pub fn distance(a: &impl XyzRecord, b: &impl XyzRecord) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance between two records.
#[inline]
pub fn distance_squared(a: &impl XyzRecord, b: &impl XyzRecord) -> f64 {
    Vector3::magnitude_squared_of(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
}

const COMPONENTS: [&str; 3] = ["x", "y", "z"];

/// Fetch one numeric component, or describe what was found instead.
fn component(obj: &Map<String, Value>, field: &'static str) -> Result<f64, Vector3Error> {
    match obj.get(field) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| Vector3Error::invalid_argument(field, value)),
        None => Err(Vector3Error::invalid_argument(field, &"undefined")),
    }
}

fn components(obj: &Map<String, Value>) -> Result<Vector3, Vector3Error> {
    Ok(Vector3::new(
        component(obj, "x")?,
        component(obj, "y")?,
        component(obj, "z")?,
    ))
}

impl Vector3 {
    /// Decode a dynamic `{x, y, z}` record.
    ///
    /// Only the type of each component is checked; any JSON number is
    /// accepted. Extra fields are ignored.
    ///
    /// # Errors
    /// `InvalidArgument` if `record` is not an object, or if any of `x`, `y`,
    /// `z` is missing or not a number.
    pub fn from_record(record: &Value) -> Result<Vector3, Vector3Error> {
        let Some(obj) = record.as_object() else {
            tracing::debug!(%record, "rejected vector record: not an object");
            return Err(Vector3Error::invalid_argument("record", record));
        };

        let decoded = components(obj);
        if let Err(err) = &decoded {
            tracing::debug!(%record, %err, "rejected vector record");
        }
        decoded
    }

    /// True when [`from_record`](Self::from_record) would succeed.
    pub fn is_record_like(record: &Value) -> bool {
        record.as_object().is_some_and(|obj| {
            COMPONENTS
                .iter()
                .all(|field| obj.get(*field).is_some_and(Value::is_number))
        })
    }
}

impl TryFrom<&Value> for Vector3 {
    type Error = Vector3Error;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        Vector3::from_record(record)
    }
}

impl TryFrom<Value> for Vector3 {
    type Error = Vector3Error;

    fn try_from(record: Value) -> Result<Self, Self::Error> {
        Vector3::from_record(&record)
    }
}
