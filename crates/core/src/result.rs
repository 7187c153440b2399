//! Pack result representation.

use crate::geometry::BlockId;
use crate::placement::{PlacedRectangle, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics for a single row (shelf).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowStats {
    /// Index of the row in creation order (0-based).
    pub row_index: usize,
    /// Vertical offset of the row's top edge.
    pub y: f64,
    /// Row height (tallest member).
    pub height: f64,
    /// Sum of member widths.
    pub occupied_width: f64,
    /// Number of blocks in the row.
    pub item_count: usize,
    /// Whether the occupied width exceeds the container width.
    pub overflow: bool,
}

/// Result of a packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Placements in packing order (row by row, left to right).
    pub placements: Vec<PlacedRectangle>,

    /// Per-row statistics in creation order.
    pub rows: Vec<RowStats>,

    /// Width of the container that was packed.
    pub container_width: f64,

    /// Total height of all rows stacked.
    pub packed_height: f64,

    /// Total area of all placed blocks.
    pub total_piece_area: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Strategy used for packing.
    pub strategy: Option<String>,
}

impl PackResult {
    /// Creates a new empty result for a container of the given width.
    pub fn new(container_width: f64) -> Self {
        Self {
            placements: Vec::new(),
            rows: Vec::new(),
            container_width,
            packed_height: 0.0,
            total_piece_area: 0.0,
            computation_time_ms: 0,
            strategy: None,
        }
    }

    /// Returns the number of placed blocks.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of rows used.
    pub fn rows_used(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the number of rotated placements.
    pub fn rotated_count(&self) -> usize {
        self.placements.iter().filter(|p| p.rotated).count()
    }

    /// Returns the number of rows wider than the container.
    pub fn overflow_count(&self) -> usize {
        self.rows.iter().filter(|r| r.overflow).count()
    }

    /// Finds the placement for a block.
    pub fn placement_of(&self, id: BlockId) -> Option<&PlacedRectangle> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Area of the bounding strip: container width times packed height.
    pub fn strip_area(&self) -> f64 {
        self.container_width * self.packed_height
    }

    /// Ratio of block area to strip area (0.0 when nothing was packed).
    pub fn utilization(&self) -> f64 {
        let strip = self.strip_area();
        if strip > 0.0 {
            self.total_piece_area / strip
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Consumes the result, returning only the placements.
    pub fn into_placements(self) -> Vec<PlacedRectangle> {
        self.placements
    }
}

/// Summary statistics for a pack result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Blocks placed.
    pub total_placed: usize,
    /// Rows used.
    pub rows_used: usize,
    /// Blocks placed rotated.
    pub rotated: usize,
    /// Rows wider than the container.
    pub overflowing_rows: usize,
    /// Total packed height.
    pub packed_height: f64,
    /// Utilization percentage of the packed strip.
    pub utilization_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&PackResult> for PackSummary {
    fn from(result: &PackResult) -> Self {
        Self {
            total_placed: result.placed_count(),
            rows_used: result.rows_used(),
            rotated: result.rotated_count(),
            overflowing_rows: result.overflow_count(),
            packed_height: result.packed_height,
            utilization_percent: result.utilization() * 100.0,
            time_ms: result.computation_time_ms,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
