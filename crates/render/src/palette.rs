//! Size-keyed colour assignment.

use rand::Rng;
use std::collections::HashMap;

/// Largest value drawn for a colour (exclusive).
const COLOR_RANGE: u32 = 0xFF_FFFF;

/// Draws a random `#rrggbb` colour.
pub fn random_hex_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..COLOR_RANGE))
}

/// Maps placed sizes to colours for one rendering session.
///
/// Keys are `"width-height"` after rotation, so a block and its rotated twin
/// get different colours. The first colour assigned to a key is kept.
#[derive(Debug, Clone, Default)]
pub struct ColorCache {
    colors: HashMap<String, String>,
}

impl ColorCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a placed size.
    pub fn key(width: f64, height: f64) -> String {
        format!("{}-{}", width, height)
    }

    /// Returns the colour for a size, drawing a new one on first use.
    pub fn color_for<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) -> &str {
        self.colors
            .entry(Self::key(width, height))
            .or_insert_with(|| random_hex_color(rng))
            .as_str()
    }

    /// Returns the colour for a size without assigning one.
    pub fn get(&self, width: f64, height: f64) -> Option<&str> {
        self.colors.get(&Self::key(width, height)).map(String::as_str)
    }

    /// Number of distinct sizes seen.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if no colour has been assigned.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
