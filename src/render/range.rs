// src/render/range.rs
//! Value-axis range policy.
//!
//! The axis is symmetric about zero and sized from the *whole* path, so it
//! stays fixed while playback reveals the path:
//! ```text
//! half_extent = max(1.2 · max|X|, 0.5)
//! ```

use crate::path::Path;

/// Headroom factor applied to the largest excursion.
pub const RANGE_HEADROOM: f64 = 1.2;

/// Smallest half-extent, so near-flat paths still get a readable axis.
pub const MIN_HALF_EXTENT: f64 = 0.5;

/// Symmetric value range `[-h, h]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    half_extent: f64,
}

impl AxisRange {
    pub fn from_max_abs(max_abs: f64) -> Self {
        AxisRange {
            half_extent: (RANGE_HEADROOM * max_abs).max(MIN_HALF_EXTENT),
        }
    }

    pub fn for_path(path: &Path) -> Self {
        AxisRange::from_max_abs(path.max_abs_value())
    }

    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    pub fn min(&self) -> f64 {
        -self.half_extent
    }

    pub fn max(&self) -> f64 {
        self.half_extent
    }

    pub fn span(&self) -> f64 {
        2.0 * self.half_extent
    }

    pub fn contains(&self, value: f64) -> bool {
        value.abs() <= self.half_extent
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        AxisRange {
            half_extent: MIN_HALF_EXTENT,
        }
    }
}
