use crate::types::NIL;

/// Node of the plain binary search tree. Only the tree itself sees it.
///
/// ```compile_fail
/// use rb_forest::TreeNode;
/// ```
#[derive(Clone, Debug)]
pub(crate) struct TreeNode<K> {
    pub p: u32,
    pub l: u32,
    pub r: u32,
    pub k: K,
}

impl<K> TreeNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: NIL,
            l: NIL,
            r: NIL,
            k,
        }
    }
}
