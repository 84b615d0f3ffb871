use std::sync::Arc;

use refind_core::errors::IndexError;
use refind_core::{DescriptorType, IMetric, Item, RefindResult};
use tracing::debug;

use crate::arena::{Arena, KdNode, NodeId};
use crate::results::Candidates;

type Entry = (Arc<Item>, Box<[f64]>);

/// k-d tree over one descriptor type, splitting on axis `depth % k`.
///
/// Node lookup for [`contains`](KdTree::contains) and
/// [`remove`](KdTree::remove) compares only the coordinate on the current
/// splitting axis, so a distinct item sharing that one coordinate with a
/// node on the lookup path is treated as that node.
#[derive(Debug)]
pub struct KdTree {
    k: usize,
    ty: DescriptorType,
    arena: Arena,
    root: Option<NodeId>,
    len: usize,
}

impl KdTree {
    /// An empty tree.
    pub fn new(k: usize, ty: DescriptorType) -> RefindResult<Self> {
        if k == 0 {
            return Err(IndexError::InvalidDimensionality { k }.into());
        }
        Ok(Self {
            k,
            ty,
            arena: Arena::default(),
            root: None,
            len: 0,
        })
    }

    /// Build a tree by recursive median split.
    ///
    /// Every item must carry `ty` with at least `k` values.
    pub fn build(items: Vec<Arc<Item>>, k: usize, ty: DescriptorType) -> RefindResult<Self> {
        let mut tree = Self::new(k, ty)?;
        let entries = items
            .into_iter()
            .map(|item| {
                let key = tree.key_of(&item)?;
                Ok((item, key))
            })
            .collect::<RefindResult<Vec<Entry>>>()?;

        tree.len = entries.len();
        tree.root = tree.build_subtree(entries, 0, None);
        debug!(descriptor = %ty, k, size = tree.len, height = tree.height(), "built k-d tree");
        Ok(tree)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn descriptor_type(&self) -> DescriptorType {
        self.ty
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let node = self.arena.get(id);
            stack.extend(node.lesser.map(|c| (c, level + 1)));
            stack.extend(node.greater.map(|c| (c, level + 1)));
        }
        height
    }

    /// Every indexed item, in no particular order.
    pub fn items(&self) -> Vec<Arc<Item>> {
        let mut ids = Vec::with_capacity(self.len);
        if let Some(root) = self.root {
            self.collect_subtree(root, &mut ids);
        }
        ids.into_iter()
            .map(|id| Arc::clone(&self.arena.get(id).item))
            .collect()
    }

    /// Add an item as a new leaf. Coordinates equal to a node's go to its
    /// lesser side.
    pub fn insert(&mut self, item: Arc<Item>) -> RefindResult<()> {
        let key = self.key_of(&item)?;
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.alloc(KdNode::leaf(item, key, 0, None)));
            self.len = 1;
            return Ok(());
        };

        loop {
            let node = self.arena.get(current);
            let axis = node.depth % self.k;
            let go_lesser = key[axis] <= node.key[axis];
            let next = if go_lesser { node.lesser } else { node.greater };
            match next {
                Some(child) => current = child,
                None => {
                    let depth = node.depth + 1;
                    debug!(item = item.id(), depth, "k-d tree insert");
                    let id = self.arena.alloc(KdNode::leaf(item, key, depth, Some(current)));
                    let parent = self.arena.get_mut(current);
                    if go_lesser {
                        parent.lesser = Some(id);
                    } else {
                        parent.greater = Some(id);
                    }
                    break;
                }
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Whether a node matching the item on the splitting coordinates of its
    /// lookup path exists.
    pub fn contains(&self, item: &Item) -> RefindResult<bool> {
        let key = self.key_of(item)?;
        Ok(self.find(&key).is_some())
    }

    /// Remove the node found for `item` and rebuild the subtree below it at
    /// the same depth. Returns `false` when no node matches.
    ///
    /// The replacement subtree is fully built before it is linked in.
    pub fn remove(&mut self, item: &Item) -> RefindResult<bool> {
        let key = self.key_of(item)?;
        let Some(target) = self.find(&key) else {
            return Ok(false);
        };
        let (depth, parent) = {
            let node = self.arena.get(target);
            (node.depth, node.parent)
        };

        let mut doomed = Vec::new();
        self.collect_subtree(target, &mut doomed);
        let survivors: Vec<Entry> = doomed
            .iter()
            .filter(|id| **id != target)
            .map(|id| {
                let node = self.arena.get(*id);
                (Arc::clone(&node.item), node.key.clone())
            })
            .collect();
        let rebuilt = survivors.len();

        let replacement = self.build_subtree(survivors, depth, parent);
        match parent {
            None => self.root = replacement,
            Some(p) => {
                let parent_node = self.arena.get_mut(p);
                if parent_node.lesser == Some(target) {
                    parent_node.lesser = replacement;
                } else {
                    parent_node.greater = replacement;
                }
            }
        }
        for id in doomed {
            self.arena.release(id);
        }
        self.len -= 1;
        if self.len == 0 {
            self.arena.clear();
        }

        debug!(
            item = item.id(),
            depth,
            rebuilt,
            size = self.len,
            live_slots = self.arena.live(),
            "k-d tree remove"
        );
        Ok(true)
    }

    /// Up to `num` items nearest to `query`, closest first.
    pub fn search_knn(
        &self,
        query: &Item,
        num: usize,
        metric: &dyn IMetric,
        ty: DescriptorType,
    ) -> RefindResult<Vec<Arc<Item>>> {
        Ok(self
            .nearest(query, num, metric, ty)?
            .into_iter()
            .map(|(item, _)| item)
            .collect())
    }

    /// Like [`search_knn`](KdTree::search_knn), with each item's distance.
    pub fn nearest(
        &self,
        query: &Item,
        num: usize,
        metric: &dyn IMetric,
        ty: DescriptorType,
    ) -> RefindResult<Vec<(Arc<Item>, f64)>> {
        if ty != self.ty {
            return Err(IndexError::TypeMismatch {
                indexed: self.ty,
                requested: ty,
            }
            .into());
        }
        let Some(root) = self.root else {
            return Ok(Vec::new());
        };
        if num == 0 {
            return Ok(Vec::new());
        }
        let key = self.key_of(query)?;

        // Leaf that would host the query.
        let mut leaf = root;
        loop {
            let node = self.arena.get(leaf);
            let axis = node.depth % self.k;
            let next = if key[axis] <= node.key[axis] {
                node.lesser
            } else {
                node.greater
            };
            match next {
                Some(child) => leaf = child,
                None => break,
            }
        }

        let mut search = Search {
            tree: self,
            query,
            key: &key,
            metric,
            candidates: Candidates::new(num),
            examined: vec![false; self.arena.capacity()],
        };
        let mut current = Some(leaf);
        while let Some(id) = current {
            if !search.examined[id.0] {
                search.visit(id)?;
            }
            current = self.arena.get(id).parent;
        }

        let visited = search.examined.iter().filter(|e| **e).count();
        let results: Vec<(Arc<Item>, f64)> = search
            .candidates
            .into_sorted()
            .into_iter()
            .map(|(distance, id)| (Arc::clone(&self.arena.get(id).item), distance))
            .collect();
        debug!(
            metric = metric.name(),
            size = self.len,
            num,
            visited,
            returned = results.len(),
            "k-NN search"
        );
        Ok(results)
    }

    fn key_of(&self, item: &Item) -> RefindResult<Box<[f64]>> {
        let values = item.values(self.ty)?;
        if values.len() < self.k {
            return Err(IndexError::AxisOutOfRange {
                axis: self.k - 1,
                len: values.len(),
            }
            .into());
        }
        Ok(values[..self.k].into())
    }

    fn build_subtree(
        &mut self,
        mut entries: Vec<Entry>,
        depth: usize,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        if entries.is_empty() {
            return None;
        }
        let axis = depth % self.k;
        entries.sort_by(|a, b| a.1[axis].total_cmp(&b.1[axis]));

        let median = entries.len() / 2;
        let greater = entries.split_off(median + 1);
        let (item, key) = entries.pop()?;

        let id = self.arena.alloc(KdNode::leaf(item, key, depth, parent));
        let lesser_id = self.build_subtree(entries, depth + 1, Some(id));
        let greater_id = self.build_subtree(greater, depth + 1, Some(id));
        let node = self.arena.get_mut(id);
        node.lesser = lesser_id;
        node.greater = greater_id;
        Some(id)
    }

    fn find(&self, key: &[f64]) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.arena.get(id);
            let axis = node.depth % self.k;
            if key[axis] == node.key[axis] {
                return Some(id);
            }
            current = if key[axis] > node.key[axis] {
                node.greater
            } else {
                node.lesser
            };
        }
        None
    }

    fn collect_subtree(&self, root: NodeId, out: &mut Vec<NodeId>) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            let node = self.arena.get(id);
            stack.extend(node.lesser);
            stack.extend(node.greater);
        }
    }
}

/// State of one k-NN search.
struct Search<'a> {
    tree: &'a KdTree,
    query: &'a Item,
    key: &'a [f64],
    metric: &'a dyn IMetric,
    candidates: Candidates,
    examined: Vec<bool>,
}

impl Search<'_> {
    /// Examine `start` and every node below it that may still hold an item
    /// closer than the current worst candidate.
    ///
    /// Pending nodes carry the lower bound of their side of the splitting
    /// plane and are re-checked when popped, since the worst distance only
    /// shrinks while the search runs. Near-side children carry a bound of 0.
    fn visit(&mut self, start: NodeId) -> RefindResult<()> {
        let tree = self.tree;
        let ty = tree.ty;
        self.examined[start.0] = true;
        let mut pending = vec![(start, 0.0)];

        while let Some((id, bound)) = pending.pop() {
            if bound > self.candidates.worst() {
                continue;
            }
            let node = tree.arena.get(id);
            let distance = self.metric.distance(&node.item, self.query, ty)?;
            self.candidates.offer(distance, id);

            let axis = node.depth % tree.k;
            let gap = self.key[axis] - node.key[axis];
            let far_bound = self.metric.axis_lower_bound(gap, axis, ty);

            // Greater is pushed first so the lesser side is examined first.
            for (child, far_side) in [(node.greater, gap < 0.0), (node.lesser, gap > 0.0)] {
                let Some(child) = child else { continue };
                if self.examined[child.0] {
                    continue;
                }
                self.examined[child.0] = true;
                let child_bound = if far_side { far_bound } else { 0.0 };
                if child_bound <= self.candidates.worst() {
                    pending.push((child, child_bound));
                }
            }
        }
        Ok(())
    }
}
