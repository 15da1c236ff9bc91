use crate::Vec3;
use serde::{Deserialize, Serialize};

/// A plane in 3D space as a unit normal `n` and offset `d`, with points
/// `q` on the plane satisfying `n.dot(q) == d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub n: Vec3,
    pub d: f32,
}

impl Plane {
    /// Plane through three points, with the normal following the winding
    /// of `a`, `b`, `c`.
    ///
    /// Collinear (or near-collinear) points produce a NaN-laden normal;
    /// no validation is performed.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let n = (b - a).cross(c - a).normalize();
        Self { n, d: n.dot(a) }
    }

    /// Signed distance from `q`, positive on the side `n` points toward.
    ///
    /// The `|n|²` denominator is 1 for planes built by `from_points`, but
    /// keeps the result a true distance for hand-assembled planes whose
    /// normal was never normalized.
    pub fn signed_distance(&self, q: Vec3) -> f32 {
        (self.n.dot(q) - self.d) / self.n.dot(self.n)
    }
}
