//! Blockfill command-line support
//!
//! This crate provides:
//! - A parser for block size documents (`{"sizes": [{"width": .., "height": ..}]}`)
//! - A session runner: pack, colour, report
//! - Report and page output

mod dataset;
mod parser;
mod session;

pub use dataset::{BlockSet, BlockSize};
pub use parser::{ParseError, SizesParser};
pub use session::{Session, SessionConfig, SessionOutput};
