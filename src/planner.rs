use crate::{
    graph::RouteGraph,
    heuristic::{Heuristic, StraightLine},
    search::{AStar, SearchState},
    Cost, NodeID, PlannerConfig, PlannerError, Point, Route,
};

/// Where a [`RoutePlanner`] is in its lifecycle.
///
/// `Found` and `Exhausted` are final until [`run_search`](RoutePlanner::run_search) is called again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// no search was run yet, or the last one was refused because of invalid input
    NotStarted,
    /// a search is running
    Searching,
    /// the last search reached the end Node
    Found,
    /// the last search ran out of Nodes to expand
    Exhausted,
}

/// Finds the Route between two points on a [`RouteGraph`].
///
/// The start and end points are resolved to their closest Nodes once, when the Planner is
/// created. Every call to [`run_search`](RoutePlanner::run_search) starts from freshly reset
/// search state, so repeated calls return the same Route.
///
/// ## Examples
/// ```
/// # use route_planner::{prelude::*, PlannerError};
/// # fn main() -> Result<(), PlannerError> {
/// let mut builder = MapGraph::builder();
/// let a = builder.add_node((0.0, 0.5))?;
/// let b = builder.add_node((0.5, 0.5))?;
/// let c = builder.add_node((1.0, 0.5))?;
/// builder.add_way(&[a, b, c])?;
/// let graph = builder.metric_scale(1000.0).build()?;
///
/// // coordinates are percentages of the map
/// let mut planner = RoutePlanner::new(&graph, (0.0, 50.0), (100.0, 50.0))?;
/// let route = planner.run_search()?;
///
/// assert_eq!(route.ids(), vec![a, b, c]);
/// assert_eq!(route.distance, 1000.0);
/// assert_eq!(planner.phase(), SearchPhase::Found);
/// # Ok(())
/// # }
/// ```
///
/// If the end cannot be reached, [`PlannerError::NoRouteFound`] is returned:
/// ```
/// # use route_planner::{prelude::*, PlannerError};
/// # fn main() -> Result<(), PlannerError> {
/// let mut builder = MapGraph::builder();
/// builder.add_node((0.0, 0.0))?;
/// builder.add_node((1.0, 1.0))?;
/// let graph = builder.build()?;
///
/// let mut planner = RoutePlanner::new(&graph, (0.0, 0.0), (100.0, 100.0))?;
///
/// assert_eq!(
///     planner.run_search(),
///     Err(PlannerError::NoRouteFound { start: 0, end: 1 })
/// );
/// assert!(planner.route().is_empty());
/// assert_eq!(planner.phase(), SearchPhase::Exhausted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RoutePlanner<'g, G: RouteGraph + ?Sized, H: Heuristic = StraightLine> {
    graph: &'g G,
    heuristic: H,
    config: PlannerConfig,
    start: NodeID,
    end: NodeID,
    engine: AStar,
    phase: SearchPhase,
    route: Route,
}

impl<'g, G: RouteGraph + ?Sized> RoutePlanner<'g, G> {
    /// Creates a Planner with the default [`PlannerConfig`].
    ///
    /// `start` and `end` are `(x, y)` percentages (`0` to `100`) of the map's bounding box.
    ///
    /// Fails with [`PlannerError::InvalidInput`] if the Graph has no Nodes or a coordinate is
    /// outside of the map.
    pub fn new(graph: &'g G, start: Point, end: Point) -> Result<Self, PlannerError> {
        RoutePlanner::with_config(graph, start, end, PlannerConfig::default())
    }

    /// Creates a Planner with a custom [`PlannerConfig`]
    ///
    /// ## Examples
    /// ```
    /// # use route_planner::{prelude::*, PlannerError};
    /// # fn main() -> Result<(), PlannerError> {
    /// let grid = GridGraph::new(8, 8, Connectivity::Eight);
    /// let config = PlannerConfig {
    ///     coordinates: CoordinateConfig::NORMALIZED,
    ///     ..PlannerConfig::CLASSICAL
    /// };
    ///
    /// let planner = RoutePlanner::with_config(&grid, (0.0, 0.0), (1.0, 1.0), config)?;
    ///
    /// assert_eq!(planner.start_node(), grid.id_at(0, 0));
    /// assert_eq!(planner.end_node(), grid.id_at(7, 7));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(
        graph: &'g G,
        start: Point,
        end: Point,
        config: PlannerConfig,
    ) -> Result<Self, PlannerError> {
        let node_count = graph.node_count();
        if node_count == 0 {
            return Err(PlannerError::invalid_input(
                "the graph must contain at least one node",
            ));
        }
        let start = graph.find_closest_node(config.coordinates.normalize(start)?)?;
        let end = graph.find_closest_node(config.coordinates.normalize(end)?)?;

        Ok(RoutePlanner {
            graph,
            heuristic: StraightLine,
            config,
            start,
            end,
            engine: AStar::new(node_count),
            phase: SearchPhase::NotStarted,
            route: Route::default(),
        })
    }
}

impl<'g, G: RouteGraph + ?Sized, H: Heuristic> RoutePlanner<'g, G, H> {
    /// Replaces the [`Heuristic`] used by future searches
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> RoutePlanner<'g, G, H2> {
        RoutePlanner {
            graph: self.graph,
            heuristic,
            config: self.config,
            start: self.start,
            end: self.end,
            engine: self.engine,
            phase: SearchPhase::NotStarted,
            route: Route::default(),
        }
    }

    /// Runs the search and returns the Route from the start to the end Node.
    ///
    /// The search state is reset first, so every call starts from scratch. The result is also
    /// kept as [`route`](RoutePlanner::route) until the next call. On failure the kept Route is
    /// empty and [`PlannerError::NoRouteFound`] is returned.
    ///
    /// [`PlannerError::InvalidInput`] is returned without searching if the Graph reported a
    /// start or end Node that is not part of it. The phase is [`SearchPhase::NotStarted`] then.
    pub fn run_search(&mut self) -> Result<Route, PlannerError> {
        self.engine.reset(self.graph.node_count());
        self.phase = SearchPhase::Searching;

        let result = self.engine.search(
            self.graph,
            &self.heuristic,
            self.config.expansion,
            self.start,
            self.end,
        );

        match &result {
            Ok(route) => {
                self.phase = SearchPhase::Found;
                self.route = route.clone();
            }
            Err(PlannerError::NoRouteFound { .. }) => {
                self.phase = SearchPhase::Exhausted;
                self.route = Route::default();
            }
            Err(_) => {
                // the search was refused before it started
                self.phase = SearchPhase::NotStarted;
                self.route = Route::default();
            }
        }
        result
    }

    /// The Heuristic estimate from `node` to the end Node
    pub fn heuristic_value(&self, node: NodeID) -> Cost {
        self.heuristic.estimate(self.graph, node, self.end)
    }

    /// The Node closest to the start coordinate
    pub fn start_node(&self) -> NodeID {
        self.start
    }

    /// The Node closest to the end coordinate
    pub fn end_node(&self) -> NodeID {
        self.end
    }

    /// The current [`SearchPhase`]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The Route of the last search, empty if there was none or it failed
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The config the Planner was created with
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The search state left behind by the last search
    pub fn search_state(&self) -> &SearchState {
        self.engine.state()
    }

    /// The number of Nodes expanded by the last search
    pub fn expansions(&self) -> usize {
        self.engine.expansions()
    }
}
