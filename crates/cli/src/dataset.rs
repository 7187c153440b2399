//! Block size documents.

use blockfill_core::geometry::Rectangle;
use serde::{Deserialize, Serialize};

/// Width and height of one block as given in the input document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    pub width: f64,
    pub height: f64,
}

/// A parsed set of block sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSet {
    /// Sizes in document order.
    pub sizes: Vec<BlockSize>,
}

impl BlockSet {
    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns true if the document lists no blocks.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of all block areas.
    pub fn total_area(&self) -> f64 {
        self.sizes.iter().map(|s| s.width * s.height).sum()
    }

    /// Converts to rectangles; identity is the position in the document.
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.sizes
            .iter()
            .enumerate()
            .map(|(id, s)| Rectangle::new(id, s.width, s.height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangles_keep_document_order() {
        let set = BlockSet {
            sizes: vec![
                BlockSize {
                    width: 10.0,
                    height: 2.0,
                },
                BlockSize {
                    width: 3.0,
                    height: 4.0,
                },
            ],
        };

        let rects = set.rectangles();
        assert_eq!(rects[0].id(), 0);
        assert_eq!(rects[1].id(), 1);
        assert_eq!(rects[1].width(), 3.0);
        assert_eq!(set.total_area(), 32.0);
    }
}
