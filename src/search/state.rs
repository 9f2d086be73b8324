use crate::{Cost, NodeID};

/// The per-query search data of a single Node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeRecord {
    /// whether the Node was discovered by the current search
    pub visited: bool,
    /// the cost of the best known Path from the start
    pub g: Cost,
    /// the Heuristic estimate to the goal
    pub h: Cost,
    /// the Node this one was reached from, `None` for the start
    pub parent: Option<NodeID>,
}

impl NodeRecord {
    /// The baseline every Node is reset to before a search
    pub const NEUTRAL: NodeRecord = NodeRecord {
        visited: false,
        g: 0.0,
        h: 0.0,
        parent: None,
    };

    /// `g + h`
    pub fn f(&self) -> Cost {
        self.g + self.h
    }
}

impl Default for NodeRecord {
    fn default() -> NodeRecord {
        NodeRecord::NEUTRAL
    }
}

/// Search data for every Node of a Graph, indexed by [`NodeID`].
///
/// Kept apart from the Graph so that the Graph itself is never modified by a search. The records
/// have to be [reset](SearchState::reset) before every new search, otherwise flags and parents
/// from the previous query leak into the next one.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    records: Vec<NodeRecord>,
}

impl SearchState {
    /// Creates neutral records for `node_count` Nodes
    pub fn new(node_count: usize) -> SearchState {
        SearchState {
            records: vec![NodeRecord::NEUTRAL; node_count],
        }
    }

    /// Sets every record back to [`NodeRecord::NEUTRAL`], resizing to `node_count` Nodes
    pub fn reset(&mut self, node_count: usize) {
        self.records.clear();
        self.records.resize(node_count, NodeRecord::NEUTRAL);
    }

    /// Returns `true` if every record is neutral
    pub fn is_neutral(&self) -> bool {
        self.records.iter().all(|record| *record == NodeRecord::NEUTRAL)
    }

    /// The number of Nodes with a record
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all Nodes discovered since the last reset
    pub fn visited(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.visited)
            .map(|(id, _)| id)
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for SearchState {
    type Output = NodeRecord;
    #[track_caller]
    fn index(&self, index: NodeID) -> &NodeRecord {
        &self.records[index]
    }
}
impl IndexMut<NodeID> for SearchState {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut NodeRecord {
        &mut self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset() {
        let mut state = SearchState::new(3);
        assert!(state.is_neutral());

        state[1] = NodeRecord {
            visited: true,
            g: 2.0,
            h: 1.5,
            parent: Some(0),
        };
        assert_eq!(state[1].f(), 3.5);
        assert!(!state.is_neutral());
        assert_eq!(state.visited().collect::<Vec<_>>(), vec![1]);

        state.reset(5);
        assert_eq!(state.len(), 5);
        assert!(state.is_neutral());
        assert_eq!(state.visited().count(), 0);
    }
}
