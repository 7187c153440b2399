//! # Blockfill Core
//!
//! Core types and traits for the blockfill row packing engine.
//!
//! This crate provides the data model shared between the packer, the
//! renderer and the command-line front end.
//!
//! ## Core Components
//!
//! - **Geometry types**: `Rectangle`, `OrientedRectangle`, `Container`
//! - **Placement types**: `PlacedRectangle`, `PlacementStats`
//! - **Packer trait**: Common interface for packing algorithms
//! - **Result types**: `PackResult`, `RowStats`, `PackSummary`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{BlockId, Container, OrientedRectangle, Rectangle};
pub use placement::{PlacedRectangle, PlacementStats};
pub use result::{PackResult, PackSummary, RowStats};
pub use solver::{Config, Packer};
