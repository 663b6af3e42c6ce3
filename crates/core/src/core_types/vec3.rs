//! Mutable three-component `f64` vector.
//!
//! `Vector3` is a plain value: three public fields, no invariants enforced at
//! construction. NaN and infinities are legal component values; use the
//! predicates in [`validation`](super::validation) to check them on demand.
//!
//! # Chaining
//! Mutating operations take `&mut self` and return `&mut Self`, so a sequence
//! of in-place updates reads as one expression:
//! ```
//! use float3_core::Vector3;
//!
//! let mut v = Vector3::new(1.0, 2.0, 3.0);
//! v.scale(2.0).add_components(1.0, 1.0, 1.0).negate();
//! assert_eq!(v.to_array(), [-3.0, -5.0, -7.0]);
//! ```
//!
//! Use [`Vector3::copy`] to branch off an independent value before mutating:
//! ```
//! use float3_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! let unit = *v.copy().normalize();
//! assert_eq!(v.magnitude(), 5.0);
//! assert!((unit.magnitude() - 1.0).abs() < 1e-12);
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::XyzRecord;

/// Near-equality threshold (`f64::EPSILON`, ~2.22e-16).
///
/// Used by `==`, [`Vector3::is_zero`] and [`Vector3::is_unit`].
pub const EPSILON: f64 = f64::EPSILON;

/// Decimal places used by [`Vector3::to_short_string`].
pub const SHORT_PRECISION: usize = 2;

/// Three-component double-precision vector.
///
/// Equality (`==`) is approximate: two vectors compare equal when every
/// component differs by less than [`EPSILON`]. Vectors with NaN components
/// never compare equal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `min` that propagates NaN from either side instead of discarding it.
#[inline]
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// `max` that propagates NaN from either side instead of discarding it.
#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Renders one component the way the vector's text form expects.
///
/// Shortest round-trip digits, switching to exponent form outside
/// `[1e-6, 1e21)` (`1e+21`, `1.5e-7`). Infinities render as `Infinity` and
/// negative zero as `0`.
pub(crate) struct Component(pub f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v == 0.0 {
            return f.write_str("0");
        }
        let mag = v.abs();
        if (1e-6..1e21).contains(&mag) {
            return write!(f, "{v}");
        }
        let exp = format!("{v:e}");
        match exp.split_once('e') {
            Some((digits, power)) if !power.starts_with('-') => write!(f, "{digits}e+{power}"),
            _ => f.write_str(&exp),
        }
    }
}

/// `v` with `SHORT_PRECISION` decimals, exact ties rounded away from zero.
///
/// A value lies exactly halfway between two outputs only when it is an odd
/// multiple of `2^-(SHORT_PRECISION + 1)`. Everything else keeps the exact
/// decimal rounding of `{:.2}`, so `1.005` (stored just below) stays `1.00`.
fn fixed(v: f64) -> String {
    if !v.is_finite() || v.abs() >= 1e21 {
        return Component(v).to_string();
    }
    let digits = SHORT_PRECISION as u32;
    let halves = v * f64::from(2u32.pow(digits + 1));
    let value = if halves.fract() == 0.0 && halves.rem_euclid(2.0) == 1.0 {
        let scale = f64::from(10u32.pow(digits));
        (v * scale).round() / scale
    } else if v == 0.0 {
        0.0
    } else {
        v
    };
    format!("{value:.p$}", p = SHORT_PRECISION)
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl Vector3 {
    /// `(0, 0, 0)`
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    /// Create a vector from its components. No validation.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// `(0, 0, 0)`
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// `(1, 1, 1)`
    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// Build a vector from any value exposing `x`, `y`, `z`.
    #[inline]
    pub fn from_xyz(record: &impl XyzRecord) -> Self {
        Vector3::new(record.x(), record.y(), record.z())
    }

    /// Independent copy with identical components.
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    /// Euclidean norm of loose components.
    #[inline]
    pub fn magnitude_of(x: f64, y: f64, z: f64) -> f64 {
        Self::magnitude_squared_of(x, y, z).sqrt()
    }

    /// Squared Euclidean norm of loose components.
    #[inline]
    pub fn magnitude_squared_of(x: f64, y: f64, z: f64) -> f64 {
        (x * x) + (y * y) + (z * z)
    }

    /// Distance between two vectors.
    #[inline]
    pub fn distance_between(a: &Vector3, b: &Vector3) -> f64 {
        Self::distance_squared_between(a, b).sqrt()
    }

    /// Squared distance between two vectors.
    #[inline]
    pub fn distance_squared_between(a: &Vector3, b: &Vector3) -> f64 {
        Self::magnitude_squared_of(a.x - b.x, a.y - b.y, a.z - b.z)
    }
}

// ============================================================================
// MUTATING ARITHMETIC
// ============================================================================

impl Vector3 {
    /// Overwrite all components from `other`.
    pub fn set(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.set_components(other.x(), other.y(), other.z())
    }

    pub fn set_components(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn set_x(&mut self, value: f64) -> &mut Self {
        self.x = value;
        self
    }

    pub fn set_y(&mut self, value: f64) -> &mut Self {
        self.y = value;
        self
    }

    pub fn set_z(&mut self, value: f64) -> &mut Self {
        self.z = value;
        self
    }

    /// Component-wise `self += other`.
    pub fn add(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.add_components(other.x(), other.y(), other.z())
    }

    pub fn add_components(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    /// `self += other * scalar`
    pub fn add_scaled(&mut self, scalar: f64, other: &impl XyzRecord) -> &mut Self {
        self.add_components(other.x() * scalar, other.y() * scalar, other.z() * scalar)
    }

    /// `self += other * scale` with the product taken per component.
    pub fn add_multiplied(
        &mut self,
        scale: &impl XyzRecord,
        other: &impl XyzRecord,
    ) -> &mut Self {
        self.add_components(
            other.x() * scale.x(),
            other.y() * scale.y(),
            other.z() * scale.z(),
        )
    }

    pub fn add_x(&mut self, delta: f64) -> &mut Self {
        self.x += delta;
        self
    }

    pub fn add_y(&mut self, delta: f64) -> &mut Self {
        self.y += delta;
        self
    }

    pub fn add_z(&mut self, delta: f64) -> &mut Self {
        self.z += delta;
        self
    }

    /// Component-wise `self -= other`.
    pub fn subtract(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.x -= other.x();
        self.y -= other.y();
        self.z -= other.z();
        self
    }

    /// Flip the sign of every component.
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Replace every component by its reciprocal.
    ///
    /// Zero components become ±infinity.
    pub fn invert(&mut self) -> &mut Self {
        self.x = 1.0 / self.x;
        self.y = 1.0 / self.y;
        self.z = 1.0 / self.z;
        self
    }

    /// Component-wise product.
    pub fn multiply(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.multiply_components(other.x(), other.y(), other.z())
    }

    pub fn multiply_components(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x *= x;
        self.y *= y;
        self.z *= z;
        self
    }

    /// Component-wise quotient.
    pub fn divide(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.divide_components(other.x(), other.y(), other.z())
    }

    pub fn divide_components(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x /= x;
        self.y /= y;
        self.z /= z;
        self
    }

    /// Uniform scalar multiply.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.multiply_components(factor, factor, factor)
    }

    /// Component-wise minimum against `other`. NaN on either side yields NaN.
    pub fn min(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.x = nan_min(self.x, other.x());
        self.y = nan_min(self.y, other.y());
        self.z = nan_min(self.z, other.z());
        self
    }

    /// Component-wise maximum against `other`. NaN on either side yields NaN.
    pub fn max(&mut self, other: &impl XyzRecord) -> &mut Self {
        self.x = nan_max(self.x, other.x());
        self.y = nan_max(self.y, other.y());
        self.z = nan_max(self.z, other.z());
        self
    }

    /// Clamp every component to at most `value`.
    pub fn min_scalar(&mut self, value: f64) -> &mut Self {
        self.min(&[value; 3])
    }

    /// Clamp every component to at least `value`.
    pub fn max_scalar(&mut self, value: f64) -> &mut Self {
        self.max(&[value; 3])
    }

    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self.z = self.z.floor();
        self
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self.z = self.z.ceil();
        self
    }

    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self.z = self.z.abs();
        self
    }

    /// Scale to unit length by multiplying with `1 / magnitude()`.
    ///
    /// A zero vector turns into NaN components; check
    /// [`is_zero`](Self::is_zero) first when that matters.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            tracing::trace!(vector = %self, "normalizing a zero-length vector");
        }
        self.scale(1.0 / mag)
    }

    /// Overwrite `self` with the cross product `self × other`.
    pub fn cross(&mut self, other: &impl XyzRecord) -> &mut Self {
        let (ax, ay, az) = (self.x, self.y, self.z);
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        self.set_components(
            (ay * bz) - (az * by),
            (az * bx) - (ax * bz),
            (ax * by) - (ay * bx),
        )
    }
}

// ============================================================================
// PURE QUERIES
// ============================================================================

impl Vector3 {
    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        Self::magnitude_of(self.x, self.y, self.z)
    }

    /// Sum of squared components; avoids the square root when only comparing.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        Self::magnitude_squared_of(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(&self, other: &impl XyzRecord) -> f64 {
        super::record::dot(self, other)
    }

    #[inline]
    pub fn distance(&self, other: &impl XyzRecord) -> f64 {
        super::record::distance(self, other)
    }

    #[inline]
    pub fn distance_squared(&self, other: &impl XyzRecord) -> f64 {
        super::record::distance_squared(self, other)
    }

    /// Product of the components (volume of a box with this extent).
    #[inline]
    pub fn volume(&self) -> f64 {
        self.x * self.y * self.z
    }

    /// Near-equality against any `x`/`y`/`z` record: every component differs
    /// by less than [`EPSILON`].
    pub fn equals(&self, other: &impl XyzRecord) -> bool {
        (other.x() - self.x).abs() < EPSILON
            && (other.y() - self.y).abs() < EPSILON
            && (other.z() - self.z).abs() < EPSILON
    }

    /// `[x, y, z]`
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// `x,y,z` with two decimals per component.
    ///
    /// Values exactly halfway between two outputs round away from zero
    /// (`0.125` gives `0.13`, `-0.125` gives `-0.13`).
    pub fn to_short_string(self) -> String {
        format!("{},{},{}", fixed(self.x), fixed(self.y), fixed(self.z))
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Full precision, comma separated, no brackets: `1,2.5,-3`.
///
/// Large and tiny magnitudes use exponent form (`1e+21`, `1e-7`), infinities
/// render as `Infinity`. See [`Component`].
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            Component(self.x),
            Component(self.y),
            Component(self.z)
        )
    }
}

// ============================================================================
// OPERATORS
// ============================================================================
// Operators produce new values and leave their operands untouched. The ops
// traits are referenced by path so the in-place `add` method stays the one
// picked up by method-call syntax.

impl std::ops::Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.add_components(rhs.x, rhs.y, rhs.z);
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.subtract(&rhs);
    }
}

impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl std::ops::Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// APPROXIMATE COMPARISON (caller-chosen tolerance)
// ============================================================================

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        assert_eq!(Vector3::zero().to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(Vector3::one().to_array(), [1.0, 1.0, 1.0]);
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_copy_is_independent() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let mut c = v.copy();
        assert_eq!(c, v);
        c.set_x(10.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(c.x, 10.0);
    }

    #[test]
    fn test_set_and_components() {
        let mut v = Vector3::zero();
        v.set(&Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(v.to_array(), [4.0, 5.0, 6.0]);
        v.set_components(7.0, 8.0, 9.0).set_y(0.5).set_z(-1.0);
        assert_eq!(v.to_array(), [7.0, 0.5, -1.0]);
    }

    #[test]
    fn test_add_family() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v.add(&Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [2.0, 3.0, 4.0]);

        v.add_components(-2.0, -3.0, -4.0);
        assert_eq!(v, Vector3::ZERO);

        v.add_scaled(2.0, &Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [2.0, 4.0, 6.0]);

        v.add_multiplied(&Vector3::new(1.0, 0.0, -1.0), &Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(v.to_array(), [7.0, 4.0, 1.0]);

        v.add_x(1.0).add_y(1.0).add_z(1.0);
        assert_eq!(v.to_array(), [8.0, 5.0, 2.0]);
    }

    #[test]
    fn test_subtract_negate_invert() {
        let mut v = Vector3::new(5.0, 5.0, 5.0);
        v.subtract(&Vector3::new(1.0, 3.0, 9.0));
        assert_eq!(v.to_array(), [4.0, 2.0, -4.0]);

        v.negate();
        assert_eq!(v.to_array(), [-4.0, -2.0, 4.0]);

        v.invert();
        assert_eq!(v.to_array(), [-0.25, -0.5, 0.25]);
    }

    #[test]
    fn test_invert_zero_component_is_infinite() {
        let mut v = Vector3::new(0.0, 2.0, -0.0);
        v.invert();
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, 0.5);
        assert_eq!(v.z, f64::NEG_INFINITY);
    }

    #[test]
    fn test_multiply_divide_scale() {
        let mut v = Vector3::new(2.0, 3.0, 4.0);
        v.multiply(&Vector3::new(2.0, 2.0, 0.5));
        assert_eq!(v.to_array(), [4.0, 6.0, 2.0]);

        v.divide(&Vector3::new(4.0, 3.0, 2.0));
        assert_eq!(v, Vector3::ONE);

        v.multiply_components(3.0, 4.0, 5.0).divide_components(3.0, 2.0, 10.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 0.5]);

        v.scale(4.0);
        assert_eq!(v.to_array(), [4.0, 8.0, 2.0]);
    }

    #[test]
    fn test_min_max() {
        let mut v = Vector3::new(1.0, 5.0, -3.0);
        v.min(&Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(v.to_array(), [1.0, 2.0, -3.0]);

        v.max(&Vector3::new(0.0, 4.0, 0.0));
        assert_eq!(v.to_array(), [1.0, 4.0, 0.0]);

        v.min_scalar(2.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 0.0]);

        v.max_scalar(1.5);
        assert_eq!(v.to_array(), [1.5, 2.0, 1.5]);
    }

    #[test]
    fn test_min_propagates_nan() {
        let mut v = Vector3::new(f64::NAN, 1.0, 1.0);
        v.min_scalar(0.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 0.0);

        let mut w = Vector3::ONE;
        w.max(&Vector3::new(0.0, f64::NAN, 0.0));
        assert!(w.y.is_nan());
    }

    #[test]
    fn test_floor_ceil_abs() {
        let mut v = Vector3::new(1.5, -1.5, 2.0);
        assert_eq!(v.copy().floor().to_array(), [1.0, -2.0, 2.0]);
        assert_eq!(v.copy().ceil().to_array(), [2.0, -1.0, 2.0]);
        assert_eq!(v.abs().to_array(), [1.5, 1.5, 2.0]);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0);
        assert_relative_eq!(v, Vector3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn test_normalize_zero_yields_nan() {
        let mut v = Vector3::zero();
        v.normalize();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_cross_basis() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(*x.copy().cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(*y.copy().cross(&x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_with_own_copy_is_zero() {
        let mut v = Vector3::new(2.0, -3.0, 7.0);
        let same = v;
        v.cross(&same);
        assert!(v.is_zero());
    }

    #[test]
    fn test_magnitude_queries() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(Vector3::magnitude_of(2.0, 3.0, 6.0), 7.0);
        assert_eq!(Vector3::magnitude_squared_of(2.0, 3.0, 6.0), 49.0);
    }

    #[test]
    fn test_distance_forms_agree() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(Vector3::distance_between(&a, &b), 5.0);
        assert_eq!(Vector3::distance_squared_between(&b, &a), 25.0);
    }

    #[test]
    fn test_dot_and_volume() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.dot(&Vector3::new(4.0, -5.0, 6.0)), 12.0);
        assert_eq!(Vector3::new(2.0, 3.0, 4.0).volume(), 24.0);
    }

    #[test]
    fn test_equality_is_epsilon_tight() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_ne!(a, Vector3::new(1.0, 2.0, 3.0 + 1e-9));
        assert!(a.equals(&[1.0, 2.0, 3.0]));

        let nan = Vector3::new(f64::NAN, 0.0, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_string_renderings() {
        let v = Vector3::new(1.0, 2.5, -3.0);
        assert_eq!(v.to_string(), "1,2.5,-3");
        assert_eq!(Vector3::new(1.0, 1.0 / 3.0, 2.0).to_short_string(), "1.00,0.33,2.00");
        assert_eq!(v.to_array(), [1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_short_string_ties_round_away_from_zero() {
        assert_eq!(Vector3::new(0.125, -0.125, 2.5).to_short_string(), "0.13,-0.13,2.50");
        assert_eq!(Vector3::new(0.375, -0.625, 0.0).to_short_string(), "0.38,-0.63,0.00");
    }

    #[test]
    fn test_short_string_non_ties_keep_exact_rounding() {
        // 2.675 and 1.005 are stored just below the halfway point.
        assert_eq!(Vector3::new(2.675, 1.005, -1.005).to_short_string(), "2.67,1.00,-1.00");
        assert_eq!(Vector3::new(-0.0, 0.126, 10.0).to_short_string(), "0.00,0.13,10.00");
        assert_eq!(
            Vector3::new(f64::INFINITY, f64::NAN, 1e21).to_short_string(),
            "Infinity,NaN,1e+21"
        );
    }

    #[test]
    fn test_display_extremes() {
        let v = Vector3::new(f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(v.to_string(), "Infinity,-Infinity,NaN");
        assert_eq!(Vector3::new(1e21, 1e-7, -0.0).to_string(), "1e+21,1e-7,0");
        assert_eq!(Vector3::new(-1.5e-7, 1e-6, 1e20).to_string(), "-1.5e-7,0.000001,100000000000000000000");
        assert_eq!(Vector3::new(2.5e300, 123.456, -0.5).to_string(), "2.5e+300,123.456,-0.5");
    }

    #[test]
    fn test_operators_leave_operands_intact() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(3.0, 2.0, 1.0);
        assert_eq!(a + b, Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(a - b, Vector3::new(-2.0, 0.0, 2.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(a.to_array(), [1.0, 2.0, 3.0]);

        let mut c = a;
        c += b;
        c -= Vector3::ONE;
        c *= 0.5;
        assert_eq!(c, Vector3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v[2] = 9.0;
        assert_eq!((v[0], v[1], v[2]), (1.0, 2.0, 9.0));
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of range: 3")]
    fn test_index_out_of_range_panics() {
        let v = Vector3::zero();
        let _ = v[3];
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        let n: nalgebra::Vector3<f64> = v.into();
        assert_eq!(n.cross(&nalgebra::Vector3::x()).z, 2.0);
        let p: nalgebra::Point3<f64> = v.into();
        assert_eq!(Vector3::from(p), v);
        assert_eq!(Vector3::from(n), v);
        assert_eq!(Vector3::from((1.0, -2.0, 0.5)), v);
    }

    #[test]
    fn test_serde_plain_fields() {
        let v = Vector3::new(1.0, 2.0, 3.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.5}"#);
        let back: Vector3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_bytemuck_packed_triple() {
        let v = [Vector3::new(1.0, 2.0, 3.0)];
        let floats: &[f64] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }
}
