use std::f64::consts::TAU;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

use log::trace;
use rand::Rng;

/// Tolerance used by [`Vector2::approx_eq`].
pub const DEFAULT_EPSILON: f64 = 1e-2;
/// Fraction used by [`Vector2::lerp_half`].
pub const DEFAULT_LERP: f64 = 0.5;

/// A mutable 2D vector.
///
/// Every mutating method changes the receiver in place and hands it back as
/// `&mut Self`, so calls chain:
///
/// ```
/// use vector2::Vector2;
///
/// let a = Vector2::new(1.0, 2.0);
/// let b = Vector2::new(3.0, 4.0);
///
/// assert!(a.copy().add(&b).sub(&b).approx_eq(&a));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Vector2 {
        Vector2 {
            x,
            y,
        }
    }

    pub fn splat(value: f64) -> Vector2 {
        Vector2::new(value, value)
    }

    pub fn from_angle(angle: f64) -> Vector2 {
        Vector2::from_polar(angle, 1.0)
    }

    pub fn from_polar(angle: f64, length: f64) -> Vector2 {
        Vector2 {
            x: angle.cos() * length,
            y: angle.sin() * length,
        }
    }

    pub fn random_unit<R: Rng>(rng: &mut R) -> Vector2 {
        Vector2::random(rng, 1.0)
    }

    pub fn random<R: Rng>(rng: &mut R, length: f64) -> Vector2 {
        Vector2::from_polar(rng.gen_range(0.0..TAU), length)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Polar angle in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn set(&mut self, other: &Vector2) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    pub fn copy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn add(&mut self, other: &Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn sub(&mut self, other: &Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn mul(&mut self, other: &Vector2) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    /// Component-wise division. A zero component in `other` gives ±infinity
    /// (or NaN for `0 / 0`) in that component.
    pub fn div(&mut self, other: &Vector2) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    pub fn lerp(&mut self, other: &Vector2, amount: f64) -> &mut Self {
        self.x += (other.x - self.x) * amount;
        self.y += (other.y - self.y) * amount;
        self
    }

    pub fn lerp_half(&mut self, other: &Vector2) -> &mut Self {
        self.lerp(other, DEFAULT_LERP)
    }

    pub fn move_to(&mut self, target: &Vector2, length: f64) -> &mut Self {
        let mut movement = target.copy();
        movement.sub(self).limit(length);
        self.add(&movement)
    }

    pub fn norm(&mut self) -> &mut Self {
        self.set_length(1.0)
    }

    /// Rescales to `target_length` keeping the direction. The zero vector has
    /// no direction and is left untouched.
    pub fn set_length(&mut self, target_length: f64) -> &mut Self {
        let length = self.length();

        if length == 0.0 {
            trace!("set_length({}) on a zero-length vector ignored", target_length);
            return self;
        }

        let inverse_length = target_length / length;
        self.x *= inverse_length;
        self.y *= inverse_length;
        self
    }

    /// Caps the length at `max_length`. A NaN on either side makes the
    /// result NaN, except for the zero vector, which stays put.
    pub fn limit(&mut self, max_length: f64) -> &mut Self {
        let length = self.length();
        // not f64::min, which drops a NaN operand
        let new_length = if length < max_length { length } else { max_length };
        self.set_length(new_length)
    }

    pub fn limit_unit(&mut self) -> &mut Self {
        self.limit(1.0)
    }

    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Mirrors the vector across the line perpendicular to `normal`.
    /// `normal` must already be unit length.
    pub fn reflect(&mut self, normal: &Vector2) -> &mut Self {
        let scalar = 2.0 * self.dot(normal);
        self.x -= normal.x * scalar;
        self.y -= normal.y * scalar;
        self
    }

    pub fn project_scalar(&self, other: &Vector2) -> f64 {
        self.dot(other) / other.length()
    }

    pub fn project(&mut self, other: &Vector2) -> &mut Self {
        let inverse_length = 1.0 / other.length();
        let scalar = self.dot(other) * inverse_length * inverse_length;
        self.x = other.x * scalar;
        self.y = other.y * scalar;
        self
    }

    pub fn reject_scalar(&self, other: &Vector2) -> f64 {
        (self.y * other.x - self.x * other.y) / other.length()
    }

    /// Keeps only the part of the vector orthogonal to `other`.
    pub fn reject(&mut self, other: &Vector2) -> &mut Self {
        let scalar = (self.y * other.x - self.x * other.y) / other.length_sq();
        self.x = -other.y * scalar;
        self.y = other.x * scalar;
        self
    }

    /// Unsigned angle in `[0, π]`. NaN when either vector has zero length.
    pub fn angle_between(&self, other: &Vector2) -> f64 {
        // rounding can push the cosine just past ±1
        let cos_angle = (self.dot(other) / (self.length() * other.length())).clamp(-1.0, 1.0);
        cos_angle.acos()
    }

    /// Counterclockwise rotation by `angle` radians.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let old_x = self.x;

        self.x = cos * self.x - sin * self.y;
        self.y = sin * old_x + cos * self.y;
        self
    }

    pub fn dist(&self, other: &Vector2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn dist_sq(&self, other: &Vector2) -> f64 {
        (other.x - self.x).powi(2) + (other.y - self.y).powi(2)
    }

    pub fn equal_to(&self, other: &Vector2) -> bool {
        self == other
    }

    /// True when `|Δx| + |Δy| <= epsilon`.
    pub fn equal_to_soft(&self, other: &Vector2, epsilon: f64) -> bool {
        let difference_sum = (self.x - other.x).abs() + (self.y - other.y).abs();
        difference_sum <= epsilon
    }

    pub fn approx_eq(&self, other: &Vector2) -> bool {
        self.equal_to_soft(other, DEFAULT_EPSILON)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        Vector2::add(self, &rhs);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        Vector2::sub(self, &rhs);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}
