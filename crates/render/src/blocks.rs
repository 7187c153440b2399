//! Coloured, labelled blocks ready for drawing.

use crate::palette::ColorCache;
use blockfill_core::geometry::BlockId;
use blockfill_core::placement::PlacedRectangle;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A placed block with its label and fill colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBlock {
    /// Identity of the source block; also used as draw order.
    pub id: BlockId,
    /// Text shown inside the block.
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `#rrggbb` fill colour.
    pub color: String,
}

/// Renders placements in the order given, colouring by placed size.
pub fn render_blocks<R: Rng>(
    placements: &[PlacedRectangle],
    colors: &mut ColorCache,
    rng: &mut R,
) -> Vec<RenderedBlock> {
    let blocks: Vec<RenderedBlock> = placements
        .iter()
        .map(|p| RenderedBlock {
            id: p.id,
            label: p.id.to_string(),
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            color: colors.color_for(p.width, p.height, rng).to_string(),
        })
        .collect();

    log::debug!(
        "rendered {} blocks with {} distinct colours",
        blocks.len(),
        colors.len()
    );
    blocks
}
