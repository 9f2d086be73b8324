use crate::NodeID;
use std::sync::OnceLock;

/// Lazily computed adjacency lists, one slot per Node.
#[derive(Clone, Debug, Default)]
pub(crate) struct NeighborCache {
    slots: Vec<OnceLock<Box<[NodeID]>>>,
}

impl NeighborCache {
    pub fn new(node_count: usize) -> Self {
        let mut slots = Vec::with_capacity(node_count);
        slots.resize_with(node_count, OnceLock::new);
        Self { slots }
    }

    /// Returns the cached neighbors of `id`, calling `compute` on the first request only.
    #[track_caller]
    pub fn get_or_compute(&self, id: NodeID, compute: impl FnOnce() -> Vec<NodeID>) -> &[NodeID] {
        self.slots[id].get_or_init(|| compute().into_boxed_slice())
    }

    #[cfg(test)]
    pub fn is_computed(&self, id: NodeID) -> bool {
        self.slots.get(id).map_or(false, |slot| slot.get().is_some())
    }
}
