use std::sync::Arc;

use refind_core::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct KdNode {
    pub(crate) item: Arc<Item>,
    /// The first `k` coordinates of the indexed descriptor.
    pub(crate) key: Box<[f64]>,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) lesser: Option<NodeId>,
    pub(crate) greater: Option<NodeId>,
}

impl KdNode {
    pub(crate) fn leaf(item: Arc<Item>, key: Box<[f64]>, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            item,
            key,
            depth,
            parent,
            lesser: None,
            greater: None,
        }
    }
}

/// Slot storage for tree nodes. Released slots are emptied and recycled by
/// later allocations. A released slot is never reachable from a live link.
#[derive(Debug, Default, Clone)]
pub(crate) struct Arena {
    nodes: Vec<Option<KdNode>>,
    free: Vec<usize>,
}

impl Arena {
    pub(crate) fn alloc(&mut self, node: KdNode) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Empty the slot, dropping the node's item, and queue it for reuse.
    pub(crate) fn release(&mut self, id: NodeId) {
        if self.nodes[id.0].take().is_some() {
            self.free.push(id.0);
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &KdNode {
        match &self.nodes[id.0] {
            Some(node) => node,
            None => panic!("k-d node {} is released but still linked", id.0),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut KdNode {
        match &mut self.nodes[id.0] {
            Some(node) => node,
            None => panic!("k-d node {} is released but still linked", id.0),
        }
    }

    /// Slots currently holding a node.
    pub(crate) fn live(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Number of slots ever allocated, live or free.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
    }
}
