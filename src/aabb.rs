use crate::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, stored as its minimum corner (`top_left`)
/// and maximum corner (`bot_right`).
///
/// A properly constructed box satisfies `top_left.x <= bot_right.x` and
/// `top_left.y <= bot_right.y`; nothing here enforces that for boxes
/// assembled by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub top_left: Vec2,
    pub bot_right: Vec2,
}

impl Aabb {
    /// Empty box: corners at the opposite finite extremes, so the first
    /// `expand` always wins both min and max comparisons.
    pub const EMPTY: Self = Self::new(
        Vec2::new(f32::MAX, f32::MAX),
        Vec2::new(-f32::MAX, -f32::MAX),
    );

    pub const fn new(top_left: Vec2, bot_right: Vec2) -> Self {
        Self { top_left, bot_right }
    }

    /// Grow the box to include `p`.
    ///
    /// Per axis, the min corner is tested first and the max corner only
    /// in the else branch, so one call never moves both corners on the
    /// same axis. Expansion therefore behaves only for boxes that start
    /// from [`Aabb::EMPTY`]-style sentinels (as `from_points` does) or
    /// already hold `top_left <= bot_right`.
    pub fn expand(&mut self, p: Vec2) {
        if p.x < self.top_left.x {
            self.top_left.x = p.x;
        } else if p.x > self.bot_right.x {
            self.bot_right.x = p.x;
        }

        if p.y < self.top_left.y {
            self.top_left.y = p.y;
        } else if p.y > self.bot_right.y {
            self.bot_right.y = p.y;
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.bot_right.x + self.top_left.x) * 0.5,
            (self.bot_right.y + self.top_left.y) * 0.5,
        )
    }

    /// Extent per axis; negative on a box violating the corner invariant.
    pub fn size(&self) -> Vec2 {
        self.bot_right - self.top_left
    }

    /// Separating-axis overlap test. Boxes that merely touch along an
    /// edge count as overlapping.
    pub fn overlap(&self, other: &Self) -> bool {
        if self.bot_right.x < other.top_left.x || self.top_left.x > other.bot_right.x {
            return false;
        }
        if self.bot_right.y < other.top_left.y || self.top_left.y > other.bot_right.y {
            return false;
        }

        true
    }

    /// Tight bounding box of a point set.
    ///
    /// Requires at least two points; fewer is a precondition violation
    /// (fatal in debug builds, unchecked in release).
    pub fn from_points(points: &[Vec2]) -> Self {
        debug_assert!(points.len() >= 2);

        let mut bbox = Self::EMPTY;
        for &p in points {
            bbox.expand(p);
        }
        bbox
    }
}
