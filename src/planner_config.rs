use crate::coords::CoordinateConfig;

/// Decides what happens when a search reaches a Node that was already discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// A Node keeps the parent and cost of the first expansion that discovered it.
    ///
    /// Every Node enters the open set at most once, which keeps the search small, but on Graphs
    /// with several Paths to the same Node the returned Route is not guaranteed to be the
    /// shortest one.
    FirstDiscovery,
    /// A discovered Node is updated and queued again whenever a strictly cheaper way to reach it
    /// is found. This is the classical A* behavior and returns optimal Routes for admissible and
    /// consistent Heuristics.
    Reopen,
}

/// Options for configuring the [`RoutePlanner`](crate::RoutePlanner)
///
/// Default options:
/// ```
/// # use route_planner::{PlannerConfig, ExpansionPolicy, coords::CoordinateConfig};
/// assert_eq!(
///     PlannerConfig {
///         coordinates: CoordinateConfig::PERCENT,
///         expansion: ExpansionPolicy::FirstDiscovery,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    /// How the start and end coordinates are interpreted (defaults to percentages)
    pub coordinates: CoordinateConfig,
    /// How rediscovered Nodes are treated (defaults to [`ExpansionPolicy::FirstDiscovery`])
    pub expansion: ExpansionPolicy,
}

impl PlannerConfig {
    /// a PlannerConfig that runs classical A* with cost-decrease reopening
    ///
    /// Values:
    /// ```
    /// # use route_planner::{PlannerConfig, ExpansionPolicy, coords::CoordinateConfig};
    /// assert_eq!(
    ///     PlannerConfig {
    ///         coordinates: CoordinateConfig::PERCENT,
    ///         expansion: ExpansionPolicy::Reopen,
    ///     },
    ///     PlannerConfig::CLASSICAL
    /// );
    /// ```
    pub const CLASSICAL: PlannerConfig = PlannerConfig {
        coordinates: CoordinateConfig::PERCENT,
        expansion: ExpansionPolicy::Reopen,
    };

    /// Returns a copy of the default config with a different [`ExpansionPolicy`]
    pub fn with_expansion(expansion: ExpansionPolicy) -> PlannerConfig {
        PlannerConfig {
            expansion,
            ..Default::default()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            coordinates: CoordinateConfig::PERCENT,
            expansion: ExpansionPolicy::FirstDiscovery,
        }
    }
}
