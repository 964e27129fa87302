use std::iter::FusedIterator;

use crate::types::{Links, NIL};

use super::{first, next};

/// Ascending in-order walk over the keys of a tree.
///
/// Lazy: each step follows successor links from the previous node. Calling
/// `iter()` again on the tree starts a fresh walk.
pub struct Keys<'a, T: Links + ?Sized> {
    tree: &'a T,
    curr: u32,
    remaining: usize,
}

impl<'a, T: Links + ?Sized> Keys<'a, T> {
    pub(crate) fn new(tree: &'a T, len: usize) -> Self {
        Self {
            tree,
            curr: first(tree).unwrap_or(NIL),
            remaining: len,
        }
    }
}

impl<'a, T: Links + ?Sized> Iterator for Keys<'a, T> {
    type Item = &'a T::Key;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr == NIL {
            return None;
        }
        let i = self.curr;
        self.curr = next(self.tree, i).unwrap_or(NIL);
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.tree.key(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Links + ?Sized> ExactSizeIterator for Keys<'_, T> {}

impl<T: Links + ?Sized> FusedIterator for Keys<'_, T> {}
