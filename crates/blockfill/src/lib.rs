//! # Blockfill
//!
//! Packs rectangular blocks into rows of a fixed-width container.
//!
//! This crate provides:
//! - **Shelf packing**: first-fit row placement with optional rotation
//! - **Rendering**: size-keyed colours, HTML output and fullness reports
//!
//! ## Quick Start
//!
//! ```rust
//! use blockfill::core::{Container, Packer, Rectangle};
//! use blockfill::shelf::RowPacker;
//!
//! let blocks = Rectangle::from_sizes(&[(60.0, 40.0), (50.0, 30.0), (90.0, 10.0)]);
//! let result = RowPacker::default_config()
//!     .pack(&Container::new(100.0), &blocks)
//!     .unwrap();
//!
//! assert_eq!(result.placed_count(), 3);
//! assert_eq!(result.rows_used(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `shelf` (default): the row packer
//! - `render` (default): colours, HTML and fullness reporting
//! - `serde`: Serialization support for core types

/// Core types and traits.
pub use blockfill_core as core;

/// First-fit shelf packing.
#[cfg(feature = "shelf")]
pub use blockfill_shelf as shelf;

/// Rendering and reporting.
#[cfg(feature = "render")]
pub use blockfill_render as render;

// Re-export commonly used types at root level
pub use blockfill_core::{
    Config, Container, Error, PackResult, Packer, PlacedRectangle, Rectangle, Result,
};

#[cfg(feature = "shelf")]
pub use blockfill_shelf::{pack, RowPacker};
