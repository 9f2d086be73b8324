use crate::{Cost, NodeID};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered Node waiting in the [`OpenSet`].
#[derive(Clone, Copy, Debug)]
pub struct OpenEntry {
    /// the discovered Node
    pub id: NodeID,
    /// the cost from the start at the time the Node was queued
    pub g: Cost,
    /// `g` plus the Heuristic estimate to the goal
    pub f: Cost,
}

impl PartialEq for OpenEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
/// Reversed, so that the [`BinaryHeap`] yields the smallest `f` first.
/// Ties go to the smaller `g`, then to the smaller id.
impl Ord for OpenEntry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.g.total_cmp(&self.g))
            .then_with(|| rhs.id.cmp(&self.id))
    }
}

/// The Nodes that were discovered but not yet expanded, ordered by `f = g + h`.
#[derive(Clone, Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
}

impl OpenSet {
    /// Creates an empty OpenSet
    pub fn new() -> OpenSet {
        OpenSet::default()
    }

    /// Creates an empty OpenSet with space for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> OpenSet {
        OpenSet {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Queues a Node with its cost `g` and Heuristic `h`
    pub fn push(&mut self, id: NodeID, g: Cost, h: Cost) {
        self.heap.push(OpenEntry { id, g, f: g + h });
    }

    /// Removes and returns the entry with the smallest `f`
    pub fn pop_min(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// The number of queued entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no entries are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::OpenSet;

    fn drain(open: &mut OpenSet) -> Vec<usize> {
        std::iter::from_fn(|| open.pop_min()).map(|e| e.id).collect()
    }

    #[test]
    fn smallest_f_first() {
        let mut open = OpenSet::new();
        open.push(0, 3.0, 4.0);
        open.push(1, 1.0, 1.0);
        open.push(2, 0.5, 5.0);
        open.push(3, 2.0, 0.5);

        assert_eq!(open.len(), 4);
        assert_eq!(drain(&mut open), vec![1, 3, 2, 0]);
        assert!(open.is_empty());
    }

    #[test]
    fn ties_prefer_lower_g() {
        let mut open = OpenSet::with_capacity(4);
        open.push(0, 3.0, 1.0);
        open.push(1, 1.0, 3.0);
        open.push(2, 2.0, 2.0);

        assert_eq!(drain(&mut open), vec![1, 2, 0]);
    }

    #[test]
    fn full_ties_prefer_lower_id() {
        let mut open = OpenSet::new();
        open.push(7, 1.0, 1.0);
        open.push(2, 1.0, 1.0);
        open.push(5, 1.0, 1.0);

        assert_eq!(drain(&mut open), vec![2, 5, 7]);
    }

    #[test]
    fn clear() {
        let mut open = OpenSet::new();
        open.push(0, 0.0, 0.0);
        open.clear();
        assert_eq!(open.pop_min(), None);
    }
}
