//! Rectangle and container types.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a block: its position in the input sequence.
pub type BlockId = usize;

fn check_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// An input block to be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    id: BlockId,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a new rectangle with the given identity and dimensions.
    pub fn new(id: BlockId, width: f64, height: f64) -> Self {
        Self { id, width, height }
    }

    /// Builds rectangles from `(width, height)` pairs, assigning each its
    /// position as identity.
    pub fn from_sizes(sizes: &[(f64, f64)]) -> Vec<Self> {
        sizes
            .iter()
            .enumerate()
            .map(|(id, &(width, height))| Self::new(id, width, height))
            .collect()
    }

    /// Returns the identity.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Validates that both dimensions are positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !check_dimension(self.width) || !check_dimension(self.height) {
            return Err(Error::InvalidGeometry(format!(
                "block {} has dimensions {}x{}; both must be positive",
                self.id, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// A rectangle in the orientation it was inserted into a row.
///
/// Built by value from a [`Rectangle`]; the source is never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientedRectangle {
    id: BlockId,
    width: f64,
    height: f64,
    rotated: bool,
}

impl OrientedRectangle {
    /// Keeps the original orientation.
    pub fn upright(rect: &Rectangle) -> Self {
        Self {
            id: rect.id,
            width: rect.width,
            height: rect.height,
            rotated: false,
        }
    }

    /// Swaps width and height.
    pub fn rotated(rect: &Rectangle) -> Self {
        Self {
            id: rect.id,
            width: rect.height,
            height: rect.width,
            rotated: true,
        }
    }

    /// Returns the identity.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Returns the width in this orientation.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height in this orientation.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns true if width and height were swapped.
    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Returns the area (unchanged by rotation).
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// The fixed-width container blocks are packed into.
///
/// Only the width takes part in packing. The height, when known, is used
/// when reporting how full the container is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    width: f64,
    height: Option<f64>,
}

impl Container {
    /// Creates a container of the given width with no fixed height.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Sets a fixed height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the fixed height, if any.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Area of the container, using `fallback_height` when no height is set.
    pub fn area_with(&self, fallback_height: f64) -> f64 {
        self.width * self.height.unwrap_or(fallback_height)
    }

    /// Validates the container dimensions.
    pub fn validate(&self) -> Result<()> {
        if !check_dimension(self.width) {
            return Err(Error::InvalidBoundary(format!(
                "container width must be positive, got {}",
                self.width
            )));
        }
        if let Some(height) = self.height {
            if !check_dimension(height) {
                return Err(Error::InvalidBoundary(format!(
                    "container height must be positive, got {}",
                    height
                )));
            }
        }
        Ok(())
    }
}
