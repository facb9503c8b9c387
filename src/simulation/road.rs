//! Straight multi-lane road with two vertical borders.

use geo::{Coord, Line};

use super::geometry::{Segment, lerp};

/// Stand-in for an unbounded vertical extent.
pub const ROAD_EXTENT: f64 = 10_000_000.0;

/// A straight road running along the y axis.
#[derive(Debug, Clone)]
pub struct Road {
    /// Centre line x.
    pub center_x: f64,
    /// Total width between the borders.
    pub width: f64,
    /// Number of lanes.
    pub lane_count: usize,
    /// Left border x.
    pub left: f64,
    /// Right border x.
    pub right: f64,
    /// Smallest y the borders reach.
    pub top: f64,
    /// Largest y the borders reach.
    pub bottom: f64,
    borders: [Segment; 2],
}

impl Road {
    /// Creates a road centred on `center_x`.
    pub fn new(center_x: f64, width: f64, lane_count: usize) -> Self {
        let left = center_x - width / 2.0;
        let right = center_x + width / 2.0;
        let top = -ROAD_EXTENT;
        let bottom = ROAD_EXTENT;

        let borders = [
            Line::new(Coord { x: left, y: top }, Coord { x: left, y: bottom }),
            Line::new(Coord { x: right, y: top }, Coord { x: right, y: bottom }),
        ];

        Self {
            center_x,
            width,
            lane_count,
            left,
            right,
            top,
            bottom,
            borders,
        }
    }

    /// The left and right border segments.
    pub fn borders(&self) -> &[Segment] {
        &self.borders
    }

    /// Width of a single lane.
    pub fn lane_width(&self) -> f64 {
        self.width / self.lane_count as f64
    }

    /// X coordinate of the centre line of lane `index` (0 = leftmost).
    pub fn lane_center(&self, index: usize) -> f64 {
        let lane_width = self.lane_width();
        self.left + lane_width / 2.0 + index as f64 * lane_width
    }

    /// X coordinates of the dashed dividers between adjacent lanes.
    pub fn lane_divider_xs(&self) -> Vec<f64> {
        (1..self.lane_count)
            .map(|i| lerp(self.left, self.right, i as f64 / self.lane_count as f64))
            .collect()
    }
}
