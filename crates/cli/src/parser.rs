//! Block size document parser.

use crate::dataset::{BlockSet, BlockSize};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading block documents.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid block document: {0}")]
    InvalidFormat(String),
}

/// Parser for block size documents.
#[derive(Debug, Default)]
pub struct SizesParser;

impl SizesParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a document from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<BlockSet, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        log::debug!("read {} bytes from {}", content.len(), path.display());
        self.parse_json(&content)
    }

    /// Parses a document from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<BlockSet, ParseError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        self.convert_raw_document(raw)
    }

    fn convert_raw_document(&self, raw: RawDocument) -> Result<BlockSet, ParseError> {
        let sizes = raw
            .sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| self.convert_raw_size(index, size))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BlockSet { sizes })
    }

    fn convert_raw_size(&self, index: usize, raw: RawSize) -> Result<BlockSize, ParseError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(raw.width) || !valid(raw.height) {
            return Err(ParseError::InvalidFormat(format!(
                "sizes[{}] is {}x{}; width and height must be positive",
                index, raw.width, raw.height
            )));
        }

        Ok(BlockSize {
            width: raw.width,
            height: raw.height,
        })
    }
}

/// Raw document as parsed from JSON. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawDocument {
    sizes: Vec<RawSize>,
}

#[derive(Debug, Deserialize)]
struct RawSize {
    width: f64,
    height: f64,
}
