//! Interval arithmetic for ray parameter ranges.
//!
//! Closed intervals [min, max] describe both the caller's accepted ray-t range
//! and the near/far span a ray spends inside a box.

/// Closed interval [min, max] over ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Empty interval (min > max)
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval. Negative for empty intervals.
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// True when no non-degenerate span remains (`max <= min`, or NaN bounds).
    pub fn is_empty(&self) -> bool {
        !(self.max > self.min)
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Overlap of two intervals. May be empty.
    pub fn intersect(&self, other: Interval) -> Interval {
        Interval::new(self.min.max(other.min), self.max.min(other.max))
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}
