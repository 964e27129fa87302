use crate::error::InvariantViolation;
use crate::types::{Links, NIL};

use super::{first, next};

/// Checks parent consistency and key order; returns the number of nodes.
pub fn check_links<T: Links + ?Sized>(t: &T) -> Result<usize, InvariantViolation> {
    let root = t.root();
    if root == NIL {
        return Ok(0);
    }
    if t.p(root) != NIL {
        return Err(InvariantViolation::RootHasParent { index: root });
    }

    let mut reachable = 0;
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        reachable += 1;
        for child in [t.l(i), t.r(i)] {
            if child == NIL {
                continue;
            }
            if t.p(child) != i {
                return Err(InvariantViolation::BrokenParentLink {
                    parent: i,
                    child,
                });
            }
            stack.push(child);
        }
    }

    let mut walked = 0;
    let mut prev: Option<u32> = None;
    let mut curr = first(t);
    while let Some(i) = curr {
        walked += 1;
        if walked > reachable {
            return Err(InvariantViolation::CountMismatch {
                reachable,
                len: walked,
            });
        }
        if let Some(p) = prev {
            if t.key(p) > t.key(i) {
                return Err(InvariantViolation::OrderViolated { index: i });
            }
        }
        prev = Some(i);
        curr = next(t, i);
    }

    Ok(reachable)
}
