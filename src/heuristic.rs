//! Estimates of the remaining distance to the goal.

use crate::{graph::RouteGraph, Cost, NodeID};
use std::fmt::Debug;

/// Gives a Heuristic for how far `goal` is from `node`.
///
/// The estimate has to be admissible: it may never be larger than the actual length of the
/// shortest Path between the two Nodes, otherwise A* can miss the best Route.
///
/// If there is no proper way of estimating the distance, use [`Zero`]. This turns the search into
/// Dijkstra's Algorithm, which takes longer but is always correct.
pub trait Heuristic: Debug {
    /// Estimates the distance from `node` to `goal` in the Graph's own units
    fn estimate<G: RouteGraph + ?Sized>(&self, graph: &G, node: NodeID, goal: NodeID) -> Cost;
}

/// The straight-line distance between the two Nodes, as reported by [`RouteGraph::distance`].
///
/// Admissible whenever every connection in the Graph is at least as long as the straight line
/// between its ends, which holds for both provided Graphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StraightLine;

impl Heuristic for StraightLine {
    fn estimate<G: RouteGraph + ?Sized>(&self, graph: &G, node: NodeID, goal: NodeID) -> Cost {
        graph.distance(node, goal)
    }
}

/// Always estimates `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate<G: RouteGraph + ?Sized>(&self, _: &G, _: NodeID, _: NodeID) -> Cost {
        0.0
    }
}
