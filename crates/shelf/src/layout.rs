//! Turns packed rows into absolute placements.
//!
//! Rows are stacked in creation order starting at `y = 0`; each row's
//! blocks run left to right from `x = 0` in insertion order.

use crate::row::Row;
use blockfill_core::placement::PlacedRectangle;
use blockfill_core::result::RowStats;

/// Absolute layout of a set of rows.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Placements, row by row.
    pub placements: Vec<PlacedRectangle>,
    /// Per-row statistics.
    pub rows: Vec<RowStats>,
    /// Sum of all row heights.
    pub packed_height: f64,
}

/// Assigns coordinates to every block in `rows`.
pub fn layout_rows(rows: &[Row], container_width: f64) -> Layout {
    let mut layout = Layout {
        placements: Vec::with_capacity(rows.iter().map(Row::len).sum()),
        rows: Vec::with_capacity(rows.len()),
        packed_height: 0.0,
    };

    let mut y = 0.0;
    for (row_index, row) in rows.iter().enumerate() {
        let mut x = 0.0;
        for item in row.items() {
            layout
                .placements
                .push(PlacedRectangle::new(item, x, y, row_index));
            x += item.width();
        }

        let height = row.height();
        layout.rows.push(RowStats {
            row_index,
            y,
            height,
            occupied_width: row.occupied_width(),
            item_count: row.len(),
            overflow: row.overflows(container_width),
        });
        y += height;
    }

    layout.packed_height = y;
    layout
}
