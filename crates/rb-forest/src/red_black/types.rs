use crate::types::{Color, NIL};

/// Node of the red-black tree. New nodes start red with sentinel links.
///
/// ```compile_fail
/// use rb_forest::red_black::RbNode;
/// ```
#[derive(Clone, Debug)]
pub(crate) struct RbNode<K> {
    pub p: u32,
    pub l: u32,
    pub r: u32,
    pub k: K,
    pub color: Color,
}

impl<K> RbNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: NIL,
            l: NIL,
            r: NIL,
            k,
            color: Color::Red,
        }
    }
}

/// The shared boundary node at index [`NIL`].
///
/// It has no key and no children, and is always black. Only its parent link
/// is mutable: removal points it at the vacated position so the delete fixup
/// can climb from an empty child.
///
/// ```compile_fail
/// use rb_forest::red_black::Sentinel;
/// ```
#[derive(Clone, Debug, Default)]
pub(crate) struct Sentinel {
    pub p: u32,
}

impl Sentinel {
    pub const COLOR: Color = Color::Black;
}
