use serde::{Deserialize, Serialize};
use std::ops::{Mul, Sub};

/// A 2D single-precision vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Componentwise product.
    pub fn mul_pcw(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other`, computed with `hypot` so extreme
    /// component deltas neither overflow nor underflow when squared.
    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Scale to unit length.
    ///
    /// A zero-length input divides by zero and yields NaN components;
    /// callers must supply a non-zero vector.
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sub() {
        let r = Vec2::new(3.0, 5.0) - Vec2::new(1.0, 7.0);
        assert_eq!(r, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_scale_and_mul_pcw() {
        assert_eq!(Vec2::new(1.5, -2.0) * 2.0, Vec2::new(3.0, -4.0));
        assert_eq!(
            Vec2::new(2.0, 3.0).mul_pcw(Vec2::new(4.0, -1.0)),
            Vec2::new(8.0, -3.0)
        );
    }

    #[test]
    fn test_length_equals_distance_from_origin() {
        let origin = Vec2::new(0.0, 0.0);
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-1.0, 2.5),
            Vec2::new(0.0, -7.0),
            Vec2::new(0.3, 0.4),
        ] {
            assert_relative_eq!(v.length(), origin.distance(v), epsilon = 1e-6);
        }
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_distance_avoids_overflow() {
        // Naive sqrt(dx^2 + dy^2) would overflow to infinity here.
        let a = Vec2::new(3.0e38, 0.0);
        let b = Vec2::new(0.0, 0.0);
        assert!(a.distance(b).is_finite());
        assert_relative_eq!(a.distance(b), 3.0e38, epsilon = 1.0e32);
    }

    #[test]
    fn test_normalize_unit_length() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.01, 0.02),
            Vec2::new(1000.0, -2000.0),
        ] {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec2::new(0.0, 0.0).normalize();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn test_glam_round_trip() {
        let v = Vec2::new(1.25, -3.5);
        let g: glam::Vec2 = v.into();
        assert_eq!(Vec2::from(g), v);
    }
}
