//! Rotations, fixup passes and invariant checks for sentinel-backed trees.

use std::collections::HashMap;

use log::trace;

use crate::error::InvariantViolation;
use crate::types::{Color, RbLinks, RbLinksMut, NIL};
use crate::util;

/// Rotates `x` down to the left; its right child takes its place.
pub(crate) fn rotate_left<T: RbLinksMut + ?Sized>(t: &mut T, x: u32) {
    let y = t.r(x);
    debug_assert_ne!(y, NIL, "rotate_left without a right child");
    let yl = t.l(y);

    t.set_r(x, yl);
    if yl != NIL {
        t.set_p(yl, x);
    }

    let xp = t.p(x);
    t.set_p(y, xp);
    if xp == NIL {
        t.set_root(y);
    } else if t.l(xp) == x {
        t.set_l(xp, y);
    } else {
        t.set_r(xp, y);
    }

    t.set_l(y, x);
    t.set_p(x, y);
    trace!("rotate left at {x}");
}

/// Rotates `x` down to the right; its left child takes its place.
pub(crate) fn rotate_right<T: RbLinksMut + ?Sized>(t: &mut T, x: u32) {
    let y = t.l(x);
    debug_assert_ne!(y, NIL, "rotate_right without a left child");
    let yr = t.r(y);

    t.set_l(x, yr);
    if yr != NIL {
        t.set_p(yr, x);
    }

    let xp = t.p(x);
    t.set_p(y, xp);
    if xp == NIL {
        t.set_root(y);
    } else if t.l(xp) == x {
        t.set_l(xp, y);
    } else {
        t.set_r(xp, y);
    }

    t.set_r(y, x);
    t.set_p(x, y);
    trace!("rotate right at {x}");
}

/// Restores the red-black properties after `z` was attached as a red leaf.
///
/// Only "red node with red parent" (or a red root) can be broken on entry.
/// The sentinel is black, so the loop stops once `z` is the root.
pub(crate) fn insert_fixup<T: RbLinksMut + ?Sized>(t: &mut T, mut z: u32) {
    while t.is_red(t.p(z)) {
        let p = t.p(z);
        let g = t.p(p);
        if p == t.l(g) {
            let u = t.r(g);
            if t.is_red(u) {
                trace!("insert fixup at {z}: red uncle {u}, recolor");
                t.set_color(p, Color::Black);
                t.set_color(u, Color::Black);
                t.set_color(g, Color::Red);
                z = g;
                continue;
            }
            if z == t.r(p) {
                trace!("insert fixup at {z}: inner child, rotate parent {p}");
                z = p;
                rotate_left(t, z);
            }
            let p = t.p(z);
            let g = t.p(p);
            trace!("insert fixup at {z}: outer child, rotate grandparent {g}");
            t.set_color(p, Color::Black);
            t.set_color(g, Color::Red);
            rotate_right(t, g);
        } else {
            let u = t.l(g);
            if t.is_red(u) {
                trace!("insert fixup at {z}: red uncle {u}, recolor");
                t.set_color(p, Color::Black);
                t.set_color(u, Color::Black);
                t.set_color(g, Color::Red);
                z = g;
                continue;
            }
            if z == t.l(p) {
                trace!("insert fixup at {z}: inner child, rotate parent {p}");
                z = p;
                rotate_right(t, z);
            }
            let p = t.p(z);
            let g = t.p(p);
            trace!("insert fixup at {z}: outer child, rotate grandparent {g}");
            t.set_color(p, Color::Black);
            t.set_color(g, Color::Red);
            rotate_left(t, g);
        }
    }
    let root = t.root();
    t.set_color(root, Color::Black);
}

/// Restores the red-black properties after a black node was spliced out.
///
/// `x` is the node (possibly the sentinel, with its parent link set) that took
/// the spliced node's position and carries the missing black.
pub(crate) fn delete_fixup<T: RbLinksMut + ?Sized>(t: &mut T, mut x: u32) {
    while x != t.root() && t.is_black(x) {
        let p = t.p(x);
        if x == t.l(p) {
            let mut w = t.r(p);
            if t.is_red(w) {
                trace!("delete fixup at {x}: red sibling {w}");
                t.set_color(w, Color::Black);
                t.set_color(p, Color::Red);
                rotate_left(t, p);
                w = t.r(p);
            }
            if t.is_black(t.l(w)) && t.is_black(t.r(w)) {
                trace!("delete fixup at {x}: black nephews, push up to {p}");
                t.set_color(w, Color::Red);
                x = p;
                continue;
            }
            if t.is_black(t.r(w)) {
                trace!("delete fixup at {x}: red near nephew, rotate sibling {w}");
                let wl = t.l(w);
                t.set_color(wl, Color::Black);
                t.set_color(w, Color::Red);
                rotate_right(t, w);
                w = t.r(p);
            }
            trace!("delete fixup at {x}: red far nephew, rotate parent {p}");
            let pc = t.color(p);
            t.set_color(w, pc);
            t.set_color(p, Color::Black);
            let wr = t.r(w);
            t.set_color(wr, Color::Black);
            rotate_left(t, p);
            x = t.root();
        } else {
            let mut w = t.l(p);
            if t.is_red(w) {
                trace!("delete fixup at {x}: red sibling {w}");
                t.set_color(w, Color::Black);
                t.set_color(p, Color::Red);
                rotate_right(t, p);
                w = t.l(p);
            }
            if t.is_black(t.r(w)) && t.is_black(t.l(w)) {
                trace!("delete fixup at {x}: black nephews, push up to {p}");
                t.set_color(w, Color::Red);
                x = p;
                continue;
            }
            if t.is_black(t.l(w)) {
                trace!("delete fixup at {x}: red near nephew, rotate sibling {w}");
                let wr = t.r(w);
                t.set_color(wr, Color::Black);
                t.set_color(w, Color::Red);
                rotate_left(t, w);
                w = t.l(p);
            }
            trace!("delete fixup at {x}: red far nephew, rotate parent {p}");
            let pc = t.color(p);
            t.set_color(w, pc);
            t.set_color(p, Color::Black);
            let wl = t.l(w);
            t.set_color(wl, Color::Black);
            rotate_right(t, p);
            x = t.root();
        }
    }
    t.set_color(x, Color::Black);
}

/// Checks the coloring rules and returns the black height of the root.
///
/// Black height follows the usual convention: black nodes below the root on
/// any path, counting the sentinel. Structure and key order are checked
/// separately by [`util::check_links`].
pub fn check_red_black<T: RbLinks + ?Sized>(t: &T) -> Result<usize, InvariantViolation> {
    if !t.is_black(NIL) {
        return Err(InvariantViolation::SentinelNotBlack);
    }
    let root = t.root();
    if root == NIL {
        return Ok(0);
    }
    if !t.is_black(root) {
        return Err(InvariantViolation::RootNotBlack { index: root });
    }

    // Black nodes from a node down to the sentinel, the node included.
    let mut heights: HashMap<u32, usize> = HashMap::new();
    let height_of = |heights: &HashMap<u32, usize>, i: u32| -> usize {
        if i == NIL {
            0
        } else {
            heights[&i]
        }
    };

    for i in util::post_order(t) {
        let (l, r) = (t.l(i), t.r(i));
        if t.is_red(i) && (t.is_red(l) || t.is_red(r)) {
            return Err(InvariantViolation::RedRed { index: i });
        }
        let left = height_of(&heights, l);
        let right = height_of(&heights, r);
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                index: i,
                left,
                right,
            });
        }
        heights.insert(i, left + usize::from(t.is_black(i)));
    }

    // The root is black, so counting it instead of the sentinel is the same number.
    Ok(heights[&root])
}
