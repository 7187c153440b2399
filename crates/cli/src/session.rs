//! One packing session: pack, colour, report.

use crate::dataset::BlockSet;
use anyhow::Context;
use blockfill_core::geometry::Container;
use blockfill_core::solver::{Config, Packer};
use blockfill_core::{PackResult, PackSummary};
use blockfill_render::{html, render_blocks, ColorCache, FullnessReport, RenderedBlock};
use blockfill_shelf::RowPacker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Container to pack into.
    pub container: Container,
    /// Packer configuration.
    pub packer: Config,
    /// Seed for colour generation; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Creates a configuration for a container of the given width.
    pub fn new(width: f64) -> Self {
        Self {
            container: Container::new(width),
            packer: Config::default(),
            seed: None,
        }
    }

    /// Sets a fixed container height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.container = self.container.with_height(height);
        self
    }

    /// Enables or disables rotation.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.packer = self.packer.with_rotation(allow);
        self
    }

    /// Sets the colour seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Runs packing sessions.
///
/// Every run gets its own colour cache, so colours never leak between
/// sessions.
pub struct Session {
    config: SessionConfig,
}

impl Session {
    /// Creates a new session runner.
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Packs and renders a block set.
    pub fn run(&self, set: &BlockSet) -> blockfill_core::Result<SessionOutput> {
        let rectangles = set.rectangles();
        let container = self.config.container;

        let packer = RowPacker::new(self.config.packer.clone());
        let result = packer.pack(&container, &rectangles)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut colors = ColorCache::new();
        let blocks = render_blocks(&result.placements, &mut colors, &mut rng);

        let report = FullnessReport::compute(
            &rectangles,
            &container,
            result.packed_height,
            &result.placements,
        );

        Ok(SessionOutput {
            container,
            result,
            blocks,
            report,
        })
    }
}

/// Everything one session produced.
#[derive(Debug, Clone)]
pub struct SessionOutput {
    pub container: Container,
    pub result: PackResult,
    pub blocks: Vec<RenderedBlock>,
    pub report: FullnessReport,
}

/// On-disk report layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportFile<'a> {
    #[serde(flatten)]
    report: &'a FullnessReport,
    summary: &'a PackSummary,
    blocks: &'a [RenderedBlock],
}

impl SessionOutput {
    /// Summary of the packing run.
    pub fn summary(&self) -> PackSummary {
        PackSummary::from(&self.result)
    }

    /// Prints a human-readable summary.
    pub fn print_summary(&self) {
        let summary = self.summary();
        println!("Blocks:      {}", summary.total_placed);
        println!("Rows:        {}", summary.rows_used);
        println!("Rotated:     {}", summary.rotated);
        if summary.overflowing_rows > 0 {
            println!("Overflowing: {}", summary.overflowing_rows);
        }
        println!("Height:      {}", summary.packed_height);
        println!("Fullness:    {}", self.report.percent());
        println!("{}", self.report.label());
    }

    /// Renders the HTML page.
    pub fn to_html(&self) -> String {
        html::render_document(
            &self.container,
            self.result.packed_height,
            &self.blocks,
            Some(&self.report),
        )
    }

    /// Serializes the report, summary and blocks to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let summary = self.summary();
        serde_json::to_string_pretty(&ReportFile {
            report: &self.report,
            summary: &summary,
            blocks: &self.blocks,
        })
    }

    /// Writes the JSON report.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    /// Writes the HTML page.
    pub fn save_html(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_html()).with_context(|| format!("writing {}", path.display()))
    }
}
