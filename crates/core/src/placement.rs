//! Placement representation for positioned blocks.

use crate::geometry::{BlockId, OrientedRectangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A block positioned inside the container.
///
/// Coordinates are the top-left corner, relative to the container origin,
/// with `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedRectangle {
    /// Identity of the source rectangle.
    pub id: BlockId,

    /// Left edge.
    pub x: f64,

    /// Top edge.
    pub y: f64,

    /// Width as placed (after any rotation).
    pub width: f64,

    /// Height as placed (after any rotation).
    pub height: f64,

    /// Whether width and height were swapped relative to the input.
    pub rotated: bool,

    /// Index of the row this block was packed into.
    pub row: usize,
}

impl PlacedRectangle {
    /// Places an oriented rectangle at `(x, y)` in the given row.
    pub fn new(rect: &OrientedRectangle, x: f64, y: f64, row: usize) -> Self {
        Self {
            id: rect.id(),
            x,
            y,
            width: rect.width(),
            height: rect.height(),
            rotated: rect.is_rotated(),
            row,
        }
    }

    /// Returns the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the block extends past `container_width`.
    pub fn overflows(&self, container_width: f64) -> bool {
        self.right() > container_width
    }

    /// Returns true if the two blocks share interior area.
    pub fn overlaps(&self, other: &PlacedRectangle) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of rotated placements.
    pub rotated_count: usize,
    /// Number of placements per row.
    pub row_distribution: std::collections::BTreeMap<usize, usize>,
    /// Rightmost edge over all placements.
    pub max_right: f64,
    /// Bottom edge over all placements.
    pub max_bottom: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[PlacedRectangle]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.rotated {
                stats.rotated_count += 1;
            }
            *stats.row_distribution.entry(p.row).or_insert(0) += 1;
            stats.max_right = stats.max_right.max(p.right());
            stats.max_bottom = stats.max_bottom.max(p.bottom());
        }

        stats
    }
}
