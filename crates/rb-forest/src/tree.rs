use std::fmt;

use log::debug;

use crate::arena::Arena;
use crate::error::{InvariantViolation, TreeError};
use crate::tree_node::TreeNode;
use crate::types::{Links, LinksMut, NodeId, NIL};
use crate::util::{self, Keys};

/// Plain (unbalanced) binary search tree.
///
/// Equal keys are kept and go to the right subtree. Nothing is rebalanced, so
/// sorted input degenerates into a chain.
pub struct OrderedTree<K> {
    root: u32,
    arena: Arena<TreeNode<K>>,
}

impl<K: Ord> Links for OrderedTree<K> {
    type Key = K;

    fn root(&self) -> u32 {
        self.root
    }

    fn p(&self, i: u32) -> u32 {
        if i == NIL {
            NIL
        } else {
            self.arena[i].p
        }
    }

    fn l(&self, i: u32) -> u32 {
        if i == NIL {
            NIL
        } else {
            self.arena[i].l
        }
    }

    fn r(&self, i: u32) -> u32 {
        if i == NIL {
            NIL
        } else {
            self.arena[i].r
        }
    }

    fn key(&self, i: u32) -> &K {
        &self.arena[i].k
    }
}

impl<K: Ord> LinksMut for OrderedTree<K> {
    fn set_root(&mut self, root: u32) {
        self.root = root;
    }

    fn set_p(&mut self, i: u32, v: u32) {
        // "No node" has no parent to record.
        if i != NIL {
            self.arena[i].p = v;
        }
    }

    fn set_l(&mut self, i: u32, v: u32) {
        self.arena[i].l = v;
    }

    fn set_r(&mut self, i: u32, v: u32) {
        self.arena[i].r = v;
    }
}

impl<K: Ord> OrderedTree<K> {
    pub fn new() -> Self {
        Self {
            root: NIL,
            arena: Arena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.handle(self.root)
    }

    fn handle(&self, i: u32) -> Option<NodeId> {
        (i != NIL).then(|| self.arena.id(i))
    }

    /// Inserts `key` as a new leaf and returns its handle.
    pub fn insert(&mut self, key: K) -> Result<NodeId, TreeError> {
        let id = self.arena.alloc(TreeNode::new(key))?;
        util::attach(self, id.index);
        debug!("ordered: inserted node {id}, {} nodes", self.len());
        Ok(id)
    }

    /// Iterative top-down search.
    pub fn search(&self, key: &K) -> Option<NodeId> {
        util::find(self, key).and_then(|i| self.handle(i))
    }

    /// Recursive top-down search; same result as [`OrderedTree::search`].
    pub fn search_recursive(&self, key: &K) -> Option<NodeId> {
        util::find_recursive(self, self.root, key).and_then(|i| self.handle(i))
    }

    pub fn contains(&self, key: &K) -> bool {
        util::find(self, key).is_some()
    }

    /// Key of a live node.
    ///
    /// # Panics
    ///
    /// If `id` does not name a live node of this tree.
    pub fn key_of(&self, id: NodeId) -> &K {
        &self.arena[self.arena.expect_live(id)].k
    }

    /// Key of `id`, or `None` for a stale handle.
    pub fn get(&self, id: NodeId) -> Option<&K> {
        self.arena.resolve(id).ok().map(|i| &self.arena[i].k)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.handle(self.arena[self.arena.expect_live(id)].p)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.handle(self.arena[self.arena.expect_live(id)].l)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.handle(self.arena[self.arena.expect_live(id)].r)
    }

    pub fn first(&self) -> Option<NodeId> {
        util::first(self).and_then(|i| self.handle(i))
    }

    pub fn last(&self) -> Option<NodeId> {
        util::last(self).and_then(|i| self.handle(i))
    }

    /// Smallest node of the subtree rooted at `subtree`.
    ///
    /// # Panics
    ///
    /// If `subtree` is not a live node of this tree.
    pub fn min(&self, subtree: NodeId) -> NodeId {
        let i = self.arena.expect_live(subtree);
        self.arena.id(util::min(self, i))
    }

    /// Largest node of the subtree rooted at `subtree`.
    ///
    /// # Panics
    ///
    /// If `subtree` is not a live node of this tree.
    pub fn max(&self, subtree: NodeId) -> NodeId {
        let i = self.arena.expect_live(subtree);
        self.arena.id(util::max(self, i))
    }

    /// In-order successor, `None` for the maximum.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        let i = self.arena.expect_live(id);
        util::next(self, i).and_then(|n| self.handle(n))
    }

    /// In-order predecessor, `None` for the minimum.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let i = self.arena.expect_live(id);
        util::prev(self, i).and_then(|n| self.handle(n))
    }

    /// Unlinks and releases the node `id`, returning its key.
    ///
    /// A stale handle is reported and leaves the tree untouched.
    pub fn delete_node(&mut self, id: NodeId) -> Result<K, TreeError> {
        let z = self.arena.resolve(id)?;
        util::remove(self, z);
        let node = self.arena.release(z);
        debug!("ordered: deleted node {id}, {} nodes", self.len());
        Ok(node.k)
    }

    /// Deletes the node [`OrderedTree::search`] finds for `key`.
    pub fn delete(&mut self, key: &K) -> Result<K, TreeError> {
        let z = util::find(self, key).ok_or(TreeError::KeyNotFound)?;
        let id = self.arena.id(z);
        self.delete_node(id)
    }

    /// Releases every node, children before parents. No-op when empty.
    pub fn clear(&mut self) {
        if self.root == NIL {
            return;
        }
        let order = util::post_order(self);
        for &i in &order {
            self.arena.release(i);
        }
        self.root = NIL;
        debug!("ordered: released {} nodes", order.len());
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Keys<'_, Self> {
        Keys::new(self, self.len())
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(self)
    }

    /// Checks key order and parent links.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let reachable = util::check_links(self)?;
        if reachable != self.len() {
            return Err(InvariantViolation::CountMismatch {
                reachable,
                len: self.len(),
            });
        }
        Ok(())
    }

    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        util::render(self, |i| self.arena[i].k.to_string())
    }
}

impl<K: Ord> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for OrderedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K: Ord> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, OrderedTree<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(keys: &[i32]) -> OrderedTree<i32> {
        let mut t = OrderedTree::new();
        for &k in keys {
            t.insert(k).unwrap();
        }
        t
    }

    #[test]
    fn transplant_replaces_child_slot_only() {
        let mut t = tree(&[10, 5, 20, 3]);
        let five = util::find(&t, &5).unwrap();
        let three = util::find(&t, &3).unwrap();
        util::transplant(&mut t, five, three);
        assert_eq!(t.l(t.root), three);
        assert_eq!(t.p(three), t.root);
        // The replaced node keeps its own child link.
        assert_eq!(t.l(five), three);
    }

    #[test]
    fn transplant_of_root_moves_root() {
        let mut t = tree(&[10, 20]);
        let twenty = util::find(&t, &20).unwrap();
        let ten = t.root;
        util::transplant(&mut t, ten, twenty);
        assert_eq!(t.root, twenty);
        assert_eq!(t.p(twenty), NIL);
    }

    #[test]
    fn writes_to_nil_parent_are_dropped() {
        let mut t = tree(&[1]);
        t.set_p(NIL, 1);
        assert_eq!(t.p(NIL), NIL);
    }
}
