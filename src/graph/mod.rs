//! The Graph side of a search: the [`RouteGraph`] trait and the provided implementations.

use crate::{Cost, NodeID, PlannerError, Point};

mod neighbor_cache;
pub(crate) use neighbor_cache::NeighborCache;

mod map_graph;
pub use map_graph::{MapGraph, MapGraphBuilder};

mod grid_graph;
pub use grid_graph::{Connectivity, GridGraph};

/// Defines the Graph a [`RoutePlanner`](crate::RoutePlanner) searches on.
///
/// Nodes are addressed by dense [`NodeID`]s in `0..node_count()`. The Graph is only ever read
/// during a search, all per-query state is kept by the search itself, so any number of
/// Planners may share one Graph.
///
/// The provided implementations are [`MapGraph`] for road networks in normalized map space and
/// [`GridGraph`] for rectangular lattices.
pub trait RouteGraph {
    /// The number of Nodes in the Graph
    fn node_count(&self) -> usize;

    /// The position of a Node in the Graph's own coordinates
    fn position(&self, id: NodeID) -> Point;

    /// Finds the Node closest to a point in normalized map space (`[0, 1]` on both axes).
    ///
    /// Fails with [`PlannerError::InvalidInput`] if the Graph has no Nodes.
    fn find_closest_node(&self, point: Point) -> Result<NodeID, PlannerError>;

    /// Provides the Nodes directly connected to `id`.
    ///
    /// Implementations are expected to compute this lazily on first request and return the
    /// same cached slice afterwards.
    fn neighbors(&self, id: NodeID) -> &[NodeID];

    /// The length of the connection between two Nodes in the Graph's own units.
    ///
    /// Must be symmetric and non-negative. Defaults to the straight-line distance between the
    /// positions of the Nodes.
    fn distance(&self, a: NodeID, b: NodeID) -> Cost {
        euclidean(self.position(a), self.position(b))
    }

    /// The factor converting the Graph's distance units into real-world units (e.g. meters)
    fn metric_scale(&self) -> Cost;
}

/// The straight-line distance between two points
pub fn euclidean(a: Point, b: Point) -> Cost {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

fn check_metric_scale(metric_scale: Cost) -> Result<Cost, PlannerError> {
    if metric_scale.is_finite() && metric_scale > 0.0 {
        Ok(metric_scale)
    } else {
        Err(PlannerError::invalid_input(format!(
            "metric scale must be positive, got {}",
            metric_scale
        )))
    }
}

#[test]
fn test_euclidean() {
    assert_eq!(euclidean((0.0, 0.0), (3.0, 4.0)), 5.0);
    assert_eq!(euclidean((3.0, 4.0), (0.0, 0.0)), 5.0);
    assert_eq!(euclidean((0.25, 0.75), (0.25, 0.75)), 0.0);
}
