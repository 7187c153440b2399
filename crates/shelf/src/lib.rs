//! # Blockfill Shelf
//!
//! First-fit shelf packing for the blockfill engine.
//!
//! Rectangles are sorted tallest first and dropped into the first row
//! (shelf) that can take them, optionally turned 90 degrees. Rows are then
//! stacked top to bottom.

pub mod layout;
pub mod packer;
pub mod row;

// Re-exports
pub use packer::{pack, RowPacker};
pub use row::{Fit, Row};
pub use blockfill_core::{
    Config, Container, Error, PackResult, Packer, PlacedRectangle, Rectangle, Result,
};
