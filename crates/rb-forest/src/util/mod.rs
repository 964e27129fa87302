//! Tree algorithms shared by the plain and the red-black tree.
//!
//! Everything here is written against [`Links`], so the same descent,
//! transplant and three-case removal drive both trees. The only behavioral
//! difference comes from the trait implementations: writes to the parent of
//! [`NIL`] are dropped by the plain tree and land on the sentinel in the
//! red-black tree.

pub mod iter;
pub mod next;
pub mod print;
pub mod validate;

use crate::types::{Links, LinksMut, NIL};

pub use iter::Keys;
pub use next::{next, prev};
pub use print::render;
pub use validate::check_links;

/// Leftmost node of the subtree rooted at `i`. `i` must not be [`NIL`].
pub fn min<T: Links + ?Sized>(t: &T, mut i: u32) -> u32 {
    debug_assert_ne!(i, NIL, "min of an empty subtree");
    loop {
        let l = t.l(i);
        if l == NIL {
            return i;
        }
        i = l;
    }
}

/// Rightmost node of the subtree rooted at `i`. `i` must not be [`NIL`].
pub fn max<T: Links + ?Sized>(t: &T, mut i: u32) -> u32 {
    debug_assert_ne!(i, NIL, "max of an empty subtree");
    loop {
        let r = t.r(i);
        if r == NIL {
            return i;
        }
        i = r;
    }
}

/// Leftmost node in the tree.
pub fn first<T: Links + ?Sized>(t: &T) -> Option<u32> {
    match t.root() {
        NIL => None,
        root => Some(min(t, root)),
    }
}

/// Rightmost node in the tree.
pub fn last<T: Links + ?Sized>(t: &T) -> Option<u32> {
    match t.root() {
        NIL => None,
        root => Some(max(t, root)),
    }
}

/// Finds a node by key.
///
/// Stops at the first equal key on the descent path; with duplicates that is
/// the shallowest one, not necessarily the latest inserted.
pub fn find<T: Links + ?Sized>(t: &T, key: &T::Key) -> Option<u32> {
    let mut curr = t.root();
    while curr != NIL {
        let curr_key = t.key(curr);
        if key == curr_key {
            return Some(curr);
        }
        curr = if key < curr_key { t.l(curr) } else { t.r(curr) };
    }
    None
}

/// Recursive form of [`find`]. Stack depth is bounded by the tree height.
pub fn find_recursive<T: Links + ?Sized>(t: &T, node: u32, key: &T::Key) -> Option<u32> {
    if node == NIL {
        return None;
    }
    let node_key = t.key(node);
    if key == node_key {
        Some(node)
    } else if key < node_key {
        find_recursive(t, t.l(node), key)
    } else {
        find_recursive(t, t.r(node), key)
    }
}

/// Attaches the detached node `n` as a leaf in key order.
///
/// Strictly smaller keys go left, everything else (duplicates included) goes
/// right. Sets `n`'s parent, or makes `n` the root of an empty tree. `n`'s own
/// children are left as they are.
pub(crate) fn attach<T: LinksMut + ?Sized>(t: &mut T, n: u32) {
    let mut parent = NIL;
    let mut left = false;
    let mut curr = t.root();
    {
        let key = t.key(n);
        while curr != NIL {
            parent = curr;
            left = key < t.key(curr);
            curr = if left { t.l(curr) } else { t.r(curr) };
        }
    }

    t.set_p(n, parent);
    if parent == NIL {
        t.set_root(n);
    } else if left {
        t.set_l(parent, n);
    } else {
        t.set_r(parent, n);
    }
}

/// Puts `v` where `u` hangs from its parent (or at the root).
///
/// Only the parent side is relinked: `u`'s children are untouched and
/// migrating them is the caller's job.
pub(crate) fn transplant<T: LinksMut + ?Sized>(t: &mut T, u: u32, v: u32) {
    let up = t.p(u);
    if up == NIL {
        t.set_root(v);
    } else if t.l(up) == u {
        t.set_l(up, v);
    } else {
        t.set_r(up, v);
    }
    t.set_p(v, up);
}

/// Outcome of [`remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Removal {
    /// Node (possibly [`NIL`]) now occupying the vacated position.
    pub x: u32,
    /// In-order successor that took the removed node's place, when the
    /// removed node had two children.
    pub successor: Option<u32>,
}

/// Unlinks `z` from the tree.
///
/// With at most one child, that child takes `z`'s place. With two children
/// the in-order successor `s` does: if `s` is deeper than `z.right` it is
/// first replaced by its own right child and adopts `z.right`, then it takes
/// `z`'s place and adopts `z.left`. `x.parent` is always left pointing at
/// `x`'s new parent, which matters when `x` is the sentinel.
pub(crate) fn remove<T: LinksMut + ?Sized>(t: &mut T, z: u32) -> Removal {
    let zl = t.l(z);
    let zr = t.r(z);

    if zl == NIL {
        transplant(t, z, zr);
        return Removal {
            x: zr,
            successor: None,
        };
    }
    if zr == NIL {
        transplant(t, z, zl);
        return Removal {
            x: zl,
            successor: None,
        };
    }

    let s = min(t, zr);
    let x = t.r(s);
    if t.p(s) == z {
        t.set_p(x, s);
    } else {
        transplant(t, s, x);
        t.set_r(s, zr);
        t.set_p(zr, s);
    }
    transplant(t, z, s);
    t.set_l(s, zl);
    t.set_p(zl, s);

    Removal {
        x,
        successor: Some(s),
    }
}

/// Every node of the tree, children before their parent.
pub fn post_order<T: Links + ?Sized>(t: &T) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    if t.root() != NIL {
        stack.push(t.root());
    }
    while let Some(i) = stack.pop() {
        out.push(i);
        let (l, r) = (t.l(i), t.r(i));
        if l != NIL {
            stack.push(l);
        }
        if r != NIL {
            stack.push(r);
        }
    }
    out.reverse();
    out
}

/// Number of nodes on the longest root-to-leaf path. Empty tree is 0.
pub fn height<T: Links + ?Sized>(t: &T) -> usize {
    let mut best = 0;
    let mut stack = Vec::new();
    if t.root() != NIL {
        stack.push((t.root(), 1));
    }
    while let Some((i, depth)) = stack.pop() {
        best = best.max(depth);
        let (l, r) = (t.l(i), t.r(i));
        if l != NIL {
            stack.push((l, depth + 1));
        }
        if r != NIL {
            stack.push((r, depth + 1));
        }
    }
    best
}
