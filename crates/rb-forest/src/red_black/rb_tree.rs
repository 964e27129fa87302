use std::fmt;

use log::debug;

use crate::arena::Arena;
use crate::error::{InvariantViolation, TreeError};
use crate::types::{Color, Links, LinksMut, NodeId, RbLinks, RbLinksMut, NIL};
use crate::util::{self, Keys};

use super::types::{RbNode, Sentinel};
use super::util::{check_red_black, delete_fixup, insert_fixup};

/// Red-black tree over an arena, with a shared black sentinel at [`NIL`].
///
/// Equal keys are kept and go to the right on insert. Every insert and delete
/// leaves the five red-black properties intact, so the height stays within
/// `2 * log2(n + 1)`.
pub struct RbTree<K> {
    root: u32,
    nil: Sentinel,
    arena: Arena<RbNode<K>>,
}

impl<K: Ord> Links for RbTree<K> {
    type Key = K;

    fn root(&self) -> u32 {
        self.root
    }

    fn p(&self, i: u32) -> u32 {
        if i == NIL {
            self.nil.p
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

impl<K: Ord> LinksMut for RbTree<K> {
    fn set_root(&mut self, root: u32) {
        self.root = root;
    }

    fn set_p(&mut self, i: u32, v: u32) {
        if i == NIL {
            self.nil.p = v;
        } else {
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

impl<K: Ord> RbLinks for RbTree<K> {
    fn color(&self, i: u32) -> Color {
        if i == NIL {
            Sentinel::COLOR
        } else {
            self.arena[i].color
        }
    }
}

impl<K: Ord> RbLinksMut for RbTree<K> {
    fn set_color(&mut self, i: u32, color: Color) {
        if i == NIL {
            debug_assert!(color.is_black(), "sentinel must stay black");
        } else {
            self.arena[i].color = color;
        }
    }
}

impl<K: Ord> RbTree<K> {
    pub fn new() -> Self {
        Self {
            root: NIL,
            nil: Sentinel::default(),
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

    /// Inserts `key` as a red leaf, then rebalances.
    pub fn insert(&mut self, key: K) -> Result<NodeId, TreeError> {
        let id = self.arena.alloc(RbNode::new(key))?;
        util::attach(self, id.index);
        insert_fixup(self, id.index);
        debug!("red-black: inserted node {id}, {} nodes", self.len());
        Ok(id)
    }

    /// Iterative top-down search.
    pub fn search(&self, key: &K) -> Option<NodeId> {
        util::find(self, key).and_then(|i| self.handle(i))
    }

    /// Recursive top-down search; same result as [`RbTree::search`].
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

    /// Color of a live node.
    ///
    /// # Panics
    ///
    /// If `id` does not name a live node of this tree.
    pub fn color_of(&self, id: NodeId) -> Color {
        self.arena[self.arena.expect_live(id)].color
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

    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        let i = self.arena.expect_live(id);
        util::next(self, i).and_then(|n| self.handle(n))
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let i = self.arena.expect_live(id);
        util::prev(self, i).and_then(|n| self.handle(n))
    }

    /// Unlinks and releases the node `id`, then rebalances.
    ///
    /// A stale handle is reported and leaves the tree untouched.
    pub fn delete_node(&mut self, id: NodeId) -> Result<K, TreeError> {
        let z = self.arena.resolve(id)?;

        // Color of the node that actually leaves its position: `z` itself,
        // or its successor when `z` has two children.
        let (zl, zr) = (self.l(z), self.r(z));
        let spliced_color = if zl != NIL && zr != NIL {
            self.color(util::min(self, zr))
        } else {
            self.color(z)
        };

        let removal = util::remove(self, z);
        if let Some(s) = removal.successor {
            let zc = self.color(z);
            self.set_color(s, zc);
        }
        if spliced_color.is_black() {
            delete_fixup(self, removal.x);
        }
        self.nil.p = NIL;

        let node = self.arena.release(z);
        debug!("red-black: deleted node {id}, {} nodes", self.len());
        Ok(node.k)
    }

    /// Deletes the node [`RbTree::search`] finds for `key`.
    pub fn delete(&mut self, key: &K) -> Result<K, TreeError> {
        let z = util::find(self, key).ok_or(TreeError::KeyNotFound)?;
        let id = self.arena.id(z);
        self.delete_node(id)
    }

    /// Releases every node, children before parents. The sentinel stays.
    pub fn clear(&mut self) {
        if self.root == NIL {
            return;
        }
        let order = util::post_order(self);
        for &i in &order {
            self.arena.release(i);
        }
        self.root = NIL;
        self.nil.p = NIL;
        debug!("red-black: released {} nodes", order.len());
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Keys<'_, Self> {
        Keys::new(self, self.len())
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(self)
    }

    /// Black nodes on any path from the root down to the sentinel, the
    /// sentinel included and the root excluded. Zero for an empty tree.
    pub fn black_height(&self) -> usize {
        if self.root == NIL {
            return 0;
        }
        let mut count = 1;
        let mut i = self.l(self.root);
        while i != NIL {
            if self.is_black(i) {
                count += 1;
            }
            i = self.l(i);
        }
        count
    }

    /// Checks key order, parent links and the red-black coloring rules.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let reachable = util::check_links(self)?;
        if reachable != self.len() {
            return Err(InvariantViolation::CountMismatch {
                reachable,
                len: self.len(),
            });
        }
        check_red_black(self)?;
        Ok(())
    }

    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        util::render(self, |i| {
            let n = &self.arena[i];
            format!("{} {}", n.k, n.color)
        })
    }

    #[cfg(test)]
    pub(crate) fn alloc_detached(&mut self, key: K) -> u32 {
        match self.arena.alloc(RbNode::new(key)) {
            Ok(id) => id.index,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K: Ord> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K: Ord> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, RbTree<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_reads_black_and_childless() {
        let t = RbTree::<i32>::new();
        assert_eq!(t.color(NIL), Color::Black);
        assert_eq!(t.l(NIL), NIL);
        assert_eq!(t.r(NIL), NIL);
    }

    #[test]
    fn transplant_records_parent_on_sentinel() {
        let mut t = RbTree::new();
        for k in [10, 5, 20] {
            t.insert(k).unwrap();
        }
        let five = util::find(&t, &5).unwrap();
        util::transplant(&mut t, five, NIL);
        assert_eq!(t.p(NIL), t.root);
        assert_eq!(t.l(t.root), NIL);
    }

    #[test]
    fn delete_leaves_sentinel_parent_cleared() {
        let mut t = RbTree::new();
        for k in [10, 5, 20, 1] {
            t.insert(k).unwrap();
        }
        t.delete(&5).unwrap();
        assert_eq!(t.nil.p, NIL);
        t.validate().unwrap();
    }
}
