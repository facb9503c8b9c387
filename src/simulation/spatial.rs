//! Spatial indexing for traffic neighbour queries.
//!
//! Agents only need to look at traffic within sensor range; a KD-tree over
//! traffic centres keeps the narrow-phase ray and polygon tests short.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};

use super::geometry::Point;
use super::vehicle::Vehicle;

/// Type alias for the 2D KD-tree keyed by vehicle index.
pub type Tree2D = KdTree<f64, usize, [f64; 2]>;

/// KD-tree over the centres of a set of vehicles.
pub struct TrafficIndex {
    tree: Tree2D,
}

impl TrafficIndex {
    /// Builds an index over `vehicles`; stored values are slice indices.
    ///
    /// # Returns
    ///
    /// The index, or an error if a vehicle has a non-finite position.
    pub fn build(vehicles: &[Vehicle]) -> Result<Self, KdTreeError> {
        let mut tree = KdTree::with_capacity(2, vehicles.len().max(1));
        for (i, vehicle) in vehicles.iter().enumerate() {
            tree.add([vehicle.x, vehicle.y], i)?;
        }
        Ok(Self { tree })
    }

    /// Indices of vehicles whose centre lies within `radius` of `pos`.
    ///
    /// Results are sorted by distance, nearest first.
    pub fn query(&self, pos: Point, radius: f64) -> Vec<usize> {
        self.tree
            .within(&[pos.x, pos.y], radius.powi(2), &squared_euclidean)
            .unwrap_or_default()
            .into_iter()
            .map(|(_, &idx)| idx)
            .collect()
    }
}
