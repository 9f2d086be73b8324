use super::{NodeRecord, OpenSet, SearchState};
use crate::utils::{search_debug, search_trace};
use crate::{
    graph::RouteGraph, heuristic::Heuristic, Cost, ExpansionPolicy, NodeID, PlannerError, Route,
    Waypoint,
};

/// The inputs of a single search that stay fixed while it runs.
struct Query<'a, G: ?Sized, H> {
    graph: &'a G,
    heuristic: &'a H,
    policy: ExpansionPolicy,
    end: NodeID,
}

impl<G: RouteGraph + ?Sized, H: Heuristic> Query<'_, G, H> {
    fn heuristic(&self, node: NodeID) -> Cost {
        self.heuristic.estimate(self.graph, node, self.end)
    }
}

/// Searches a [`RouteGraph`] using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Owns the [`SearchState`] and [`OpenSet`] so that their allocations can be reused between
/// queries. The state is **not** reset by [`search`](AStar::search); call
/// [`reset`](AStar::reset) before every query, or use the
/// [`RoutePlanner`](crate::RoutePlanner), which does so on its own.
#[derive(Clone, Debug, Default)]
pub struct AStar {
    state: SearchState,
    open: OpenSet,
    expansions: usize,
}

impl AStar {
    /// Creates an engine with neutral search state for `node_count` Nodes
    pub fn new(node_count: usize) -> AStar {
        AStar {
            state: SearchState::new(node_count),
            open: OpenSet::with_capacity(node_count / 2),
            expansions: 0,
        }
    }

    /// Resets the search state of all Nodes, sized for a Graph with `node_count` Nodes
    pub fn reset(&mut self, node_count: usize) {
        self.state.reset(node_count);
        self.open.clear();
        self.expansions = 0;
    }

    /// The search state left behind by the last search
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The number of Nodes expanded by the last search
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Searches the shortest Route from `start` to `end`.
    ///
    /// ## Arguments
    /// - `graph` - the Graph to search on
    /// - `heuristic` - the estimate of the remaining distance. See [`Heuristic`]
    /// - `policy` - how Nodes that are discovered a second time are treated
    /// - `start` - the starting Node
    /// - `end` - the Goal that this function is supposed to search for
    ///
    /// ## Returns
    /// the Route, if one was found, with its distance converted to real-world units. The first
    /// Waypoint is always `start`, the last one is always `end`. If another Node at the same
    /// position as `end` is reached first, the Route runs through that Node and ends with `end`.
    ///
    /// [`PlannerError::NoRouteFound`] is returned if `end` cannot be reached from `start`.
    pub fn search<G: RouteGraph + ?Sized, H: Heuristic>(
        &mut self,
        graph: &G,
        heuristic: &H,
        policy: ExpansionPolicy,
        start: NodeID,
        end: NodeID,
    ) -> Result<Route, PlannerError> {
        let node_count = graph.node_count();
        if start >= node_count || end >= node_count {
            return Err(PlannerError::invalid_input(format!(
                "nodes {} and {} are not both part of a graph with {} nodes",
                start, end, node_count
            )));
        }
        if self.state.len() < node_count {
            return Err(PlannerError::invalid_input(format!(
                "search state holds {} nodes, but the graph has {}",
                self.state.len(),
                node_count
            )));
        }

        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();
        search_debug!("searching route from node {} to node {}", start, end);

        self.open.clear();
        self.expansions = 0;
        let query = Query {
            graph,
            heuristic,
            policy,
            end,
        };

        let h = query.heuristic(start);
        self.state[start] = NodeRecord {
            visited: true,
            g: 0.0,
            h,
            parent: None,
        };
        self.open.push(start, 0.0, h);
        self.expand_node(&query, start);

        while let Some(entry) = self.open.pop_min() {
            if entry.g > self.state[entry.id].g {
                // queued again with a lower cost since
                continue;
            }
            if entry.id == end || graph.distance(entry.id, end) == 0.0 {
                let mut route = self.reconstruct_path(graph, entry.id);
                if entry.id != end {
                    // reached a different Node at the same position as `end`
                    route.path.push(Waypoint {
                        id: end,
                        pos: graph.position(end),
                    });
                }
                search_debug!(
                    "found route with {} nodes and distance {} after {} expansions in {:?}",
                    route.len(),
                    route.distance,
                    self.expansions,
                    timer.elapsed()
                );
                return Ok(route);
            }
            self.expand_node(&query, entry.id);
        }

        search_debug!(
            "no route from node {} to node {} after {} expansions in {:?}",
            start,
            end,
            self.expansions,
            timer.elapsed()
        );
        Err(PlannerError::NoRouteFound { start, end })
    }

    fn expand_node<G: RouteGraph + ?Sized, H: Heuristic>(
        &mut self,
        query: &Query<G, H>,
        node: NodeID,
    ) {
        self.expansions += 1;
        let current_cost = self.state[node].g;
        search_trace!("expanding node {} (g = {})", node, current_cost);

        for &neighbor in query.graph.neighbors(node) {
            let cost = current_cost + query.graph.distance(node, neighbor);

            let record = &self.state[neighbor];
            let needs_visit = match query.policy {
                ExpansionPolicy::FirstDiscovery => !record.visited,
                ExpansionPolicy::Reopen => !record.visited || cost < record.g,
            };
            if !needs_visit {
                continue;
            }

            let h = query.heuristic(neighbor);
            self.state[neighbor] = NodeRecord {
                visited: true,
                g: cost,
                h,
                parent: Some(node),
            };
            self.open.push(neighbor, cost, h);
        }
    }

    /// Walks the parent links back from `goal` and sums up the distance along the way.
    ///
    /// Parent links always end at the start: the start's record has no parent, and every other
    /// Node reached in this search got its parent from a Node with a cost that is not higher.
    fn reconstruct_path<G: RouteGraph + ?Sized>(&self, graph: &G, goal: NodeID) -> Route {
        let waypoint = |id| Waypoint {
            id,
            pos: graph.position(id),
        };

        let mut steps = vec![];
        let mut distance = 0.0;
        let mut current = goal;

        while let Some(parent) = self.state[current].parent {
            steps.push(waypoint(current));
            distance += graph.distance(current, parent);
            current = parent;
        }
        steps.push(waypoint(current));
        steps.reverse();

        Route::new(steps, distance * graph.metric_scale())
    }
}
