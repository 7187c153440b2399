//! Container fullness reporting.

use blockfill_core::geometry::{BlockId, Container, Rectangle};
use blockfill_core::placement::PlacedRectangle;
use serde::{Deserialize, Serialize};

/// Edges of a drawn block relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCoordinates {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    /// Position of the block in drawing order.
    pub initial_order: usize,
    /// Identity of the block.
    pub id: BlockId,
}

/// How much of the container the blocks cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullnessReport {
    /// Covered fraction, 0.0 - 1.0 for layouts that fit.
    pub fullness: f64,
    /// Sum of the input blocks' areas.
    pub used_area: f64,
    /// Container area not covered (negative if blocks spill over).
    pub empty_area: f64,
    /// Width times height of the container.
    pub container_area: f64,
    pub block_coordinates: Vec<BlockCoordinates>,
}

impl FullnessReport {
    /// Computes the report.
    ///
    /// `used_area` comes from the original rectangles, so rotation has no
    /// effect on it. When the container has no fixed height, `packed_height`
    /// stands in for it.
    pub fn compute(
        rectangles: &[Rectangle],
        container: &Container,
        packed_height: f64,
        placements: &[PlacedRectangle],
    ) -> Self {
        let used_area: f64 = rectangles.iter().map(Rectangle::area).sum();
        let container_area = container.area_with(packed_height);
        let empty_area = container_area - used_area;

        let total = empty_area + used_area;
        let fullness = if total > 0.0 {
            1.0 - empty_area / total
        } else {
            0.0
        };

        let block_coordinates = placements
            .iter()
            .enumerate()
            .map(|(initial_order, p)| BlockCoordinates {
                top: p.y,
                left: p.x,
                right: p.right(),
                bottom: p.bottom(),
                initial_order,
                id: p.id,
            })
            .collect();

        Self {
            fullness,
            used_area,
            empty_area,
            container_area,
            block_coordinates,
        }
    }

    /// Fullness as a percentage with one decimal, e.g. `"73.4%"`.
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.fullness * 100.0)
    }

    /// Fullness rounded to one decimal of the fraction before scaling,
    /// so 0.734 shows as `"70"`. This is the coarse figure the original
    /// page displayed.
    pub fn legacy_percent(&self) -> String {
        let coarse = (self.fullness * 10.0).round() / 10.0;
        format!("{}", coarse * 100.0)
    }

    /// The line printed above the container.
    pub fn label(&self) -> String {
        format!("Fullness: {}", self.legacy_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use blockfill_core::geometry::OrientedRectangle;

    #[test]
    fn test_fixed_height_container() {
        let rects = Rectangle::from_sizes(&[(60.0, 40.0), (50.0, 30.0)]);
        let container = Container::new(100.0).with_height(100.0);
        let report = FullnessReport::compute(&rects, &container, 50.0, &[]);

        assert_relative_eq!(report.used_area, 3900.0);
        assert_relative_eq!(report.container_area, 10000.0);
        assert_relative_eq!(report.empty_area, 6100.0);
        assert_relative_eq!(report.fullness, 0.39);
        assert_eq!(report.percent(), "39.0%");
        assert_eq!(report.legacy_percent(), "40");
        assert_eq!(report.label(), "Fullness: 40");
    }

    #[test]
    fn test_packed_height_fallback() {
        let rects = Rectangle::from_sizes(&[(50.0, 10.0)]);
        let report = FullnessReport::compute(&rects, &Container::new(100.0), 10.0, &[]);
        assert_relative_eq!(report.fullness, 0.5);
    }

    #[test]
    fn test_empty_is_zero() {
        let report = FullnessReport::compute(&[], &Container::new(100.0), 0.0, &[]);
        assert_eq!(report.fullness, 0.0);
        assert!(report.block_coordinates.is_empty());
    }

    #[test]
    fn test_rotation_does_not_change_used_area() {
        let rect = Rectangle::new(0, 50.0, 30.0);
        let placed = PlacedRectangle::new(&OrientedRectangle::rotated(&rect), 60.0, 0.0, 0);
        let report = FullnessReport::compute(
            &[rect],
            &Container::new(100.0).with_height(50.0),
            50.0,
            &[placed],
        );

        assert_relative_eq!(report.used_area, 1500.0);
        let coords = report.block_coordinates[0];
        assert_eq!(
            (coords.top, coords.left, coords.right, coords.bottom),
            (0.0, 60.0, 90.0, 50.0)
        );
        assert_eq!(coords.initial_order, 0);
    }

    #[test]
    fn test_json_shape() {
        let rect = Rectangle::new(0, 10.0, 10.0);
        let placed = PlacedRectangle::new(&OrientedRectangle::upright(&rect), 0.0, 0.0, 0);
        let report =
            FullnessReport::compute(&[rect], &Container::new(10.0), 10.0, &[placed]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fullness"], 1.0);
        assert_eq!(json["blockCoordinates"][0]["initialOrder"], 0);
        assert_eq!(json["blockCoordinates"][0]["right"], 10.0);
    }
}
