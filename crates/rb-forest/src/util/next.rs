use crate::types::{Links, NIL};

use super::{max, min};

/// In-order successor of `curr`.
pub fn next<T: Links + ?Sized>(t: &T, mut curr: u32) -> Option<u32> {
    let r = t.r(curr);
    if r != NIL {
        return Some(min(t, r));
    }
    let mut p = t.p(curr);
    while p != NIL && t.r(p) == curr {
        curr = p;
        p = t.p(p);
    }
    (p != NIL).then_some(p)
}

/// In-order predecessor of `curr`.
pub fn prev<T: Links + ?Sized>(t: &T, mut curr: u32) -> Option<u32> {
    let l = t.l(curr);
    if l != NIL {
        return Some(max(t, l));
    }
    let mut p = t.p(curr);
    while p != NIL && t.l(p) == curr {
        curr = p;
        p = t.p(p);
    }
    (p != NIL).then_some(p)
}
