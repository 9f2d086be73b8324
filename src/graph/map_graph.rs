use super::{check_metric_scale, NeighborCache, RouteGraph};
use crate::{Cost, NodeID, PlannerError, Point};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug)]
struct Node {
    pos: Point,
    /// indices of all ways passing through this Node
    ways: Vec<usize>,
}

/// A road network in normalized map space.
///
/// Nodes sit at positions within `[0, 1]` on both axes and are connected by ways: polylines
/// that link every Node to the ones before and after it. Distances are straight lines between
/// positions, so the straight-line Heuristic is admissible on this Graph.
///
/// ## Examples
/// ```
/// # use route_planner::{prelude::*, PlannerError};
/// # fn main() -> Result<(), PlannerError> {
/// let mut builder = MapGraph::builder();
/// let a = builder.add_node((0.0, 0.0))?;
/// let b = builder.add_node((0.5, 0.0))?;
/// let c = builder.add_node((0.5, 0.5))?;
/// builder.add_way(&[a, b, c])?;
/// let graph = builder.metric_scale(2000.0).build()?;
///
/// assert_eq!(graph.neighbors(b), &[a, c]);
/// assert_eq!(graph.find_closest_node((0.6, 0.4))?, c);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MapGraph {
    nodes: slab::Slab<Node>,
    ways: Vec<Box<[NodeID]>>,
    refs: hashbrown::HashMap<u64, NodeID>,
    metric_scale: Cost,
    neighbors: NeighborCache,
}

impl MapGraph {
    /// Creates an empty [`MapGraphBuilder`]
    pub fn builder() -> MapGraphBuilder {
        MapGraphBuilder::new()
    }

    /// The Node that was added with the external reference `key`, if any
    pub fn node_for_ref(&self, key: u64) -> Option<NodeID> {
        self.refs.get(&key).copied()
    }

    /// The number of ways in the Graph
    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    fn compute_neighbors(&self, id: NodeID) -> Vec<NodeID> {
        let mut neighbors = vec![];
        for &way_index in self.nodes[id].ways.iter() {
            let way = &self.ways[way_index];
            for (i, _) in way.iter().enumerate().filter(|&(_, &node)| node == id) {
                if i > 0 {
                    neighbors.push(way[i - 1]);
                }
                if let Some(&next) = way.get(i + 1) {
                    neighbors.push(next);
                }
            }
        }
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors.retain(|&other| other != id);
        neighbors
    }
}

fn squared_distance(a: Point, b: Point) -> Cost {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

fn closer(a: &(Cost, NodeID), b: &(Cost, NodeID)) -> std::cmp::Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

impl RouteGraph for MapGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[track_caller]
    fn position(&self, id: NodeID) -> Point {
        self.nodes[id].pos
    }

    fn find_closest_node(&self, point: Point) -> Result<NodeID, PlannerError> {
        #[cfg(feature = "parallel")]
        let closest = (0..self.nodes.len())
            .into_par_iter()
            .map(|id| (squared_distance(self.nodes[id].pos, point), id))
            .min_by(closer);

        #[cfg(not(feature = "parallel"))]
        let closest = self
            .nodes
            .iter()
            .map(|(id, node)| (squared_distance(node.pos, point), id))
            .min_by(closer);

        closest
            .map(|(_, id)| id)
            .ok_or_else(|| PlannerError::invalid_input("the graph has no nodes"))
    }

    fn neighbors(&self, id: NodeID) -> &[NodeID] {
        self.neighbors
            .get_or_compute(id, || self.compute_neighbors(id))
    }

    fn metric_scale(&self) -> Cost {
        self.metric_scale
    }
}

/// Collects Nodes and ways for a [`MapGraph`].
///
/// Nodes are either added directly or under an external reference (e.g. an OpenStreetMap node
/// id) that ways can later refer to. References must be added before the ways using them.
#[derive(Clone, Debug)]
pub struct MapGraphBuilder {
    nodes: slab::Slab<Node>,
    ways: Vec<Box<[NodeID]>>,
    refs: hashbrown::HashMap<u64, NodeID>,
    metric_scale: Cost,
}

impl MapGraphBuilder {
    /// Creates an empty builder with a metric scale of `1`
    pub fn new() -> Self {
        Self {
            nodes: slab::Slab::new(),
            ways: vec![],
            refs: hashbrown::HashMap::new(),
            metric_scale: 1.0,
        }
    }

    /// Adds a Node at a normalized position and returns its id.
    ///
    /// Fails with [`PlannerError::InvalidInput`] if the position is outside of `[0, 1]`.
    pub fn add_node(&mut self, pos: Point) -> Result<NodeID, PlannerError> {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        if !(in_range(pos.0) && in_range(pos.1)) {
            return Err(PlannerError::invalid_input(format!(
                "node position ({}, {}) is outside of the normalized map",
                pos.0, pos.1
            )));
        }
        Ok(self.nodes.insert(Node { pos, ways: vec![] }))
    }

    /// Adds a Node under an external reference.
    ///
    /// Fails with [`PlannerError::InvalidInput`] if the reference was already used.
    pub fn add_node_ref(&mut self, key: u64, pos: Point) -> Result<NodeID, PlannerError> {
        if self.refs.contains_key(&key) {
            return Err(PlannerError::invalid_input(format!(
                "node reference {} was added twice",
                key
            )));
        }
        let id = self.add_node(pos)?;
        self.refs.insert(key, id);
        Ok(id)
    }

    /// Adds a way connecting consecutive Nodes of `nodes`.
    pub fn add_way(&mut self, nodes: &[NodeID]) -> Result<(), PlannerError> {
        if let Some(&unknown) = nodes.iter().find(|&&id| !self.nodes.contains(id)) {
            return Err(PlannerError::invalid_input(format!(
                "way refers to unknown node {}",
                unknown
            )));
        }
        let way_index = self.ways.len();
        for &id in nodes {
            let ways = &mut self.nodes[id].ways;
            if ways.last() != Some(&way_index) {
                ways.push(way_index);
            }
        }
        self.ways.push(nodes.into());
        Ok(())
    }

    /// Adds a way between Nodes given by their external references.
    pub fn add_way_refs(&mut self, keys: &[u64]) -> Result<(), PlannerError> {
        let nodes = keys
            .iter()
            .map(|key| {
                self.refs.get(key).copied().ok_or_else(|| {
                    PlannerError::invalid_input(format!("way refers to unknown reference {}", key))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.add_way(&nodes)
    }

    /// Sets the factor converting normalized distances into real-world units
    pub fn metric_scale(&mut self, metric_scale: Cost) -> &mut Self {
        self.metric_scale = metric_scale;
        self
    }

    /// Finishes the Graph.
    ///
    /// Fails with [`PlannerError::InvalidInput`] if the metric scale is not a positive number.
    pub fn build(&self) -> Result<MapGraph, PlannerError> {
        let metric_scale = check_metric_scale(self.metric_scale)?;
        Ok(MapGraph {
            neighbors: NeighborCache::new(self.nodes.len()),
            nodes: self.nodes.clone(),
            ways: self.ways.clone(),
            refs: self.refs.clone(),
            metric_scale,
        })
    }
}

impl Default for MapGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
