//! The A* search and the data structures it works on.

mod open_set;
pub use open_set::{OpenEntry, OpenSet};

mod state;
pub use state::{NodeRecord, SearchState};

mod a_star;
pub use a_star::AStar;
