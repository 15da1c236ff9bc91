use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A 3D single-precision vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length.
    ///
    /// Same contract as [`crate::Vec2::normalize`]: a zero-length input
    /// yields NaN components.
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Cross product, computed with 4 multiplications instead of the
    /// textbook 6 via an algebraic rearrangement.
    ///
    /// The rearranged form is mathematically identical to
    /// `(u.y*v.z - u.z*v.y, u.z*v.x - u.x*v.z, u.x*v.y - u.y*v.x)` but
    /// accumulates rounding error differently, so results can differ from
    /// the textbook expansion in the last bits. The tests pin this form
    /// and quantify the divergence; do not replace it with the 6-multiply
    /// version.
    pub fn cross(self, rhs: Self) -> Self {
        let t1 = self.x - self.y;
        let t2 = rhs.y + rhs.z;
        let t3 = self.x * rhs.z;
        let t4 = t1 * t2 - t3;
        Self {
            x: rhs.y * (t1 - self.z) - t4,
            y: self.z * rhs.x - t3,
            z: t4 - self.y * (rhs.x - t2),
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}
