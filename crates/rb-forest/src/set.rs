//! The operations a front end may call on either tree.

use std::fmt;

use crate::error::TreeError;
use crate::red_black::RbTree;
use crate::tree::OrderedTree;
use crate::types::NodeId;
use crate::util::Keys;

/// Ordered multiset of keys backed by a binary search tree.
pub trait SearchTree {
    type Key: Ord;
    type Iter<'a>: Iterator<Item = &'a Self::Key>
    where
        Self: 'a;

    /// Short name for messages and logs.
    fn kind(&self) -> &'static str;

    fn insert(&mut self, key: Self::Key) -> Result<NodeId, TreeError>;

    fn contains(&self, key: &Self::Key) -> bool;

    /// Removes one node holding `key`. Absent keys leave the tree untouched.
    fn remove(&mut self, key: &Self::Key) -> Result<Self::Key, TreeError>;

    /// Keys in ascending order.
    fn keys(&self) -> Self::Iter<'_>;

    /// Releases every node. Safe on an empty tree.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn height(&self) -> usize;

    fn render(&self) -> String
    where
        Self::Key: fmt::Display;
}

impl<K: Ord> SearchTree for OrderedTree<K> {
    type Key = K;
    type Iter<'a>
        = Keys<'a, OrderedTree<K>>
    where
        Self: 'a;

    fn kind(&self) -> &'static str {
        "ordered"
    }

    fn insert(&mut self, key: K) -> Result<NodeId, TreeError> {
        OrderedTree::insert(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        OrderedTree::contains(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<K, TreeError> {
        self.delete(key)
    }

    fn keys(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn clear(&mut self) {
        OrderedTree::clear(self)
    }

    fn len(&self) -> usize {
        OrderedTree::len(self)
    }

    fn height(&self) -> usize {
        OrderedTree::height(self)
    }

    fn render(&self) -> String
    where
        K: fmt::Display,
    {
        OrderedTree::render(self)
    }
}

impl<K: Ord> SearchTree for RbTree<K> {
    type Key = K;
    type Iter<'a>
        = Keys<'a, RbTree<K>>
    where
        Self: 'a;

    fn kind(&self) -> &'static str {
        "red-black"
    }

    fn insert(&mut self, key: K) -> Result<NodeId, TreeError> {
        RbTree::insert(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        RbTree::contains(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<K, TreeError> {
        self.delete(key)
    }

    fn keys(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn clear(&mut self) {
        RbTree::clear(self)
    }

    fn len(&self) -> usize {
        RbTree::len(self)
    }

    fn height(&self) -> usize {
        RbTree::height(self)
    }

    fn render(&self) -> String
    where
        K: fmt::Display,
    {
        RbTree::render(self)
    }
}
