//! First-fit shelf packer.

use crate::layout::layout_rows;
use crate::row::{Fit, Row};
use blockfill_core::geometry::{Container, Rectangle};
use blockfill_core::solver::{Config, Packer};
use blockfill_core::{Error, PackResult, PlacedRectangle, Result};

use std::collections::HashSet;
use std::time::Instant;

/// Packs rectangles into rows of a fixed-width container.
///
/// Rectangles are taken tallest first (ties keep input order) and each one
/// goes into the first existing row that accepts it, upright or rotated.
/// If no row accepts it, a new row is opened for it alone, even when it is
/// wider than the container.
#[derive(Debug, Clone, Default)]
pub struct RowPacker {
    config: Config,
}

impl RowPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Assigns every rectangle to a row.
    pub fn build_rows(&self, container_width: f64, rectangles: &[Rectangle]) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();

        for rect in sort_by_height(rectangles) {
            let slot = rows.iter().enumerate().find_map(|(index, row)| {
                row.fit(rect, container_width, self.config.allow_rotation)
                    .map(|fit| (index, fit))
            });

            match slot {
                Some((index, fit)) => {
                    log::trace!("block {} -> row {} ({:?})", rect.id(), index, fit);
                    rows[index].push(fit.orient(rect));
                }
                None => {
                    if rect.width() > container_width {
                        log::warn!(
                            "block {} ({}x{}) is wider than the container ({}); placing it alone",
                            rect.id(),
                            rect.width(),
                            rect.height(),
                            container_width
                        );
                    }
                    log::trace!("block {} opens row {}", rect.id(), rows.len());
                    rows.push(Row::open(Fit::Upright.orient(rect)));
                }
            }
        }

        rows
    }

    fn validate(container: &Container, rectangles: &[Rectangle]) -> Result<()> {
        container.validate()?;

        let mut seen = HashSet::with_capacity(rectangles.len());
        for rect in rectangles {
            rect.validate()?;
            if !seen.insert(rect.id()) {
                return Err(Error::InvalidGeometry(format!(
                    "duplicate block id {}",
                    rect.id()
                )));
            }
        }
        Ok(())
    }
}

impl Packer for RowPacker {
    fn pack(&self, container: &Container, rectangles: &[Rectangle]) -> Result<PackResult> {
        Self::validate(container, rectangles)?;

        let start = Instant::now();
        let width = container.width();

        let rows = self.build_rows(width, rectangles);
        let layout = layout_rows(&rows, width);

        let mut result = PackResult::new(width).with_strategy(self.name());
        result.total_piece_area = rectangles.iter().map(Rectangle::area).sum();
        result.placements = layout.placements;
        result.rows = layout.rows;
        result.packed_height = layout.packed_height;
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        if result.overflow_count() > 0 {
            log::warn!(
                "{} of {} rows are wider than the container",
                result.overflow_count(),
                result.rows_used()
            );
        }
        log::debug!(
            "packed {} blocks into {} rows (height {}, {} rotated)",
            result.placed_count(),
            result.rows_used(),
            result.packed_height,
            result.rotated_count()
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "FirstFitShelf"
    }
}

/// Packs `rectangles` into a container `container_width` wide with the
/// default configuration, returning placements in packing order.
pub fn pack(container_width: f64, rectangles: &[Rectangle]) -> Result<Vec<PlacedRectangle>> {
    RowPacker::default_config()
        .pack(&Container::new(container_width), rectangles)
        .map(PackResult::into_placements)
}

/// Tallest first; `sort_by` is stable so equal heights keep input order.
fn sort_by_height(rectangles: &[Rectangle]) -> Vec<&Rectangle> {
    let mut sorted: Vec<&Rectangle> = rectangles.iter().collect();
    sorted.sort_by(|a, b| b.height().total_cmp(&a.height()));
    sorted
}
