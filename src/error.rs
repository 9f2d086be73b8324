use crate::NodeID;
use thiserror::Error;

/// Errors returned while setting up or running a Route search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// The Graph or one of the requested coordinates cannot be used.
    ///
    /// Reported when the Planner is constructed, never from inside the search loop.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The open set ran empty before the goal was reached.
    ///
    /// This is the expected outcome for start and end Nodes in disconnected parts of the Graph.
    #[error("no route found from node {start} to node {end}")]
    NoRouteFound {
        /// the Node the search started at
        start: NodeID,
        /// the Node the search tried to reach
        end: NodeID,
    },
}

impl PlannerError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput(msg.into())
    }
}
