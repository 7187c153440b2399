//! Rows (shelves) and the fit test.

use blockfill_core::geometry::{OrientedRectangle, Rectangle};

/// How a rectangle can enter a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Fits as given.
    Upright,
    /// Fits after swapping width and height.
    Rotated,
}

impl Fit {
    /// Builds the oriented rectangle for this fit.
    pub fn orient(self, rect: &Rectangle) -> OrientedRectangle {
        match self {
            Fit::Upright => OrientedRectangle::upright(rect),
            Fit::Rotated => OrientedRectangle::rotated(rect),
        }
    }
}

/// A horizontal run of blocks packed left to right.
#[derive(Debug, Clone)]
pub struct Row {
    items: Vec<OrientedRectangle>,
    occupied_width: f64,
}

impl Row {
    /// Opens a new row holding a single block.
    ///
    /// The block is admitted even when it is wider than the container.
    pub fn open(first: OrientedRectangle) -> Self {
        Self {
            occupied_width: first.width(),
            items: vec![first],
        }
    }

    /// Returns the blocks in insertion order.
    pub fn items(&self) -> &[OrientedRectangle] {
        &self.items
    }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the row holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the summed width of all blocks.
    pub fn occupied_width(&self) -> f64 {
        self.occupied_width
    }

    /// Returns the row height: the tallest block.
    pub fn height(&self) -> f64 {
        self.items
            .iter()
            .map(OrientedRectangle::height)
            .fold(0.0, f64::max)
    }

    /// Width still free in a container of `container_width`.
    ///
    /// Negative when the row already overflows.
    pub fn remaining(&self, container_width: f64) -> f64 {
        container_width - self.occupied_width
    }

    /// Tests whether `rect` can be appended.
    ///
    /// The upright test is a strict fit. The rotated test requires the
    /// original height to fit the free space and the original width to be
    /// at most the free space plus the original height; this is a threshold,
    /// not a second fit test, and is kept as is because layouts depend on it.
    pub fn fit(
        &self,
        rect: &Rectangle,
        container_width: f64,
        allow_rotation: bool,
    ) -> Option<Fit> {
        let remaining = self.remaining(container_width);

        if rect.width() <= remaining {
            return Some(Fit::Upright);
        }

        if allow_rotation
            && rect.height() <= remaining
            && rect.width() <= remaining + rect.height()
        {
            return Some(Fit::Rotated);
        }

        None
    }

    /// Appends a block to the right end.
    pub fn push(&mut self, rect: OrientedRectangle) {
        self.occupied_width += rect.width();
        self.items.push(rect);
    }

    /// Returns true if the blocks are wider than the container.
    pub fn overflows(&self, container_width: f64) -> bool {
        self.occupied_width > container_width
    }
}
