#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find point-to-point Routes on Map Graphs using A*.
//!
//! ## Introduction
//! A map is represented as a weighted, undirected Graph: every Node has a position, and
//! connected Nodes are as far apart as the straight line between them. The
//! [`RoutePlanner`] takes a start and an end coordinate, snaps both to the closest Nodes of the
//! Graph and runs an [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) between
//! them. The result is a [`Route`]: the ordered Waypoints from start to end and the total length
//! of the Route in real-world units.
//!
//! The Graph is anything that implements [`RouteGraph`](graph::RouteGraph). Two
//! implementations are provided:
//! - [`MapGraph`](graph::MapGraph) for road networks made up of Nodes and ways in normalized map space
//! - [`GridGraph`](graph::GridGraph) for rectangular lattices with optionally blocked cells
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use route_planner::{prelude::*, PlannerError};
//! # fn main() -> Result<(), PlannerError> {
//!
//! // a---b---c
//! //     |
//! //     d---e
//! let mut builder = MapGraph::builder();
//! let a = builder.add_node((0.0, 0.0))?;
//! let b = builder.add_node((0.5, 0.0))?;
//! let c = builder.add_node((1.0, 0.0))?;
//! let d = builder.add_node((0.5, 1.0))?;
//! let e = builder.add_node((1.0, 1.0))?;
//! builder.add_way(&[a, b, c])?;
//! builder.add_way(&[b, d, e])?;
//!
//! // one unit of normalized distance is 2 km
//! let graph = builder.metric_scale(2000.0).build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Pathfinding
//! Start and end are given as percentages of the map's bounding box:
//! ```
//! # use route_planner::{prelude::*, PlannerError};
//! # fn main() -> Result<(), PlannerError> {
//! # let mut builder = MapGraph::builder();
//! # let a = builder.add_node((0.0, 0.0))?;
//! # let b = builder.add_node((0.5, 0.0))?;
//! # let c = builder.add_node((1.0, 0.0))?;
//! # let d = builder.add_node((0.5, 1.0))?;
//! # let e = builder.add_node((1.0, 1.0))?;
//! # builder.add_way(&[a, b, c])?;
//! # builder.add_way(&[b, d, e])?;
//! # let graph = builder.metric_scale(2000.0).build()?;
//! let mut planner = RoutePlanner::new(&graph, (5.0, 0.0), (95.0, 95.0))?;
//! let route = planner.run_search()?;
//!
//! assert_eq!(route.ids(), vec![a, b, d, e]);
//! assert_eq!(route.distance, 4000.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### Configuration
//! The [`PlannerConfig`] decides how input coordinates are interpreted and how the search
//! treats Nodes it reaches a second time. By default, a Node keeps the cost of the first Path
//! that discovered it ([`ExpansionPolicy::FirstDiscovery`]).
//! [`PlannerConfig::CLASSICAL`] switches to classical A*, which reopens Nodes whenever a
//! cheaper Path is found and always returns the shortest Route:
//! ```
//! # use route_planner::{prelude::*, PlannerError};
//! # fn main() -> Result<(), PlannerError> {
//! let grid = GridGraph::from_fn((5, 5), Connectivity::Four, |x, y| x == 2 && y < 4);
//!
//! let mut planner =
//!     RoutePlanner::with_config(&grid, (0.0, 0.0), (100.0, 0.0), PlannerConfig::CLASSICAL)?;
//! let route = planner.run_search()?;
//!
//! assert_eq!(route.distance, 12.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### Reusing search state
//! The [`RoutePlanner`] resets its search state before every search. The lower level
//! [`AStar`](search::AStar) engine leaves that to the caller: running a second query without
//! calling [`reset`](search::AStar::reset) in between is not supported and gives wrong results.
//!
//! ## Crate features
//! - `parallel` (default): closest-Node lookups on a [`MapGraph`](graph::MapGraph) are spread
//!   over all cores using rayon.
//! - `log`: reports every search (and every expansion at the `trace` level) through the `log` crate.

/// The Type used to reference a Node in a Graph
pub type NodeID = usize;

/// A position, either in normalized map space or in a Graph's own coordinates
pub type Point = (f64, f64);

/// The Type used for distances and search costs
pub type Cost = f64;

mod utils;

mod error;
pub use self::error::PlannerError;

pub mod coords;

mod planner_config;
pub use self::planner_config::{ExpansionPolicy, PlannerConfig};

mod path;
pub use self::path::{Path, Route, Waypoint};

pub mod graph;

pub mod heuristic;

pub mod search;

mod planner;
pub use self::planner::{RoutePlanner, SearchPhase};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        coords::{CoordinateConfig, OutOfRange},
        graph::{Connectivity, GridGraph, MapGraph, RouteGraph},
        heuristic::{Heuristic, StraightLine, Zero},
        ExpansionPolicy, PlannerConfig, PlannerError, Route, RoutePlanner, SearchPhase, Waypoint,
    };
}
