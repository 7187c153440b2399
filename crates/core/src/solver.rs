//! Packer trait and configuration.

use crate::geometry::{Container, Rectangle};
use crate::result::PackResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for packers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Whether blocks may be turned 90 degrees to fit a row.
    pub allow_rotation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_rotation: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables rotation.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }
}

/// Trait for packing algorithms.
pub trait Packer {
    /// Packs the rectangles into the container.
    ///
    /// Implementations are pure: repeated calls with the same input produce
    /// the same layout, and calls share no state.
    fn pack(&self, container: &Container, rectangles: &[Rectangle]) -> Result<PackResult>;

    /// Short name used in reports.
    fn name(&self) -> &'static str;
}
