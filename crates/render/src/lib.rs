//! # Blockfill Render
//!
//! Presentation helpers for packed layouts:
//!
//! - [`ColorCache`]: one colour per distinct placed size, scoped to a session
//! - [`render_blocks`]: placements to coloured, labelled blocks
//! - [`html`]: a standalone HTML page showing the container
//! - [`FullnessReport`]: how much of the container the blocks cover

pub mod blocks;
pub mod fullness;
pub mod html;
pub mod palette;

// Re-exports
pub use blocks::{render_blocks, RenderedBlock};
pub use fullness::{BlockCoordinates, FullnessReport};
pub use palette::{random_hex_color, ColorCache};
