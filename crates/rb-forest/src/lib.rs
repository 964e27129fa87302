//! Arena-based binary search trees.
//!
//! Two trees share one data model and one set of algorithms:
//!
//! - [`OrderedTree`]: plain binary search tree. No rebalancing.
//! - [`RbTree`]: red-black tree. Absent children and the parent of the root
//!   all point at a single black sentinel, so rotations and fixups read
//!   colors and parents without special-casing the boundary.
//!
//! Nodes live in an arena owned by the tree and link to each other by `u32`
//! slot index. Callers hold [`NodeId`] handles; a handle to a deleted node is
//! detected rather than silently resolving to a reused slot, and a handle
//! issued by another tree is rejected the same way.
//!
//! Keys may repeat. Insertion sends equal keys to the right subtree, while
//! search stops at the first equal key on the descent path.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`NodeId`], [`Color`], [`NIL`], the [`Links`] / [`RbLinks`] traits |
//! | [`util`] | descent, min/max, successor, transplant, removal, walks, printing |
//! | [`tree`] | [`OrderedTree`] |
//! | [`red_black`] | [`RbTree`], rotations, insert and delete fixups, coloring checks |
//! | [`set`] | [`SearchTree`], the operations a front end uses |
//! | [`shell`] | interactive menu loop behind the `rb-shell` binary |
//!
//! # Example
//!
//! ```
//! use rb_forest::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [10, 5, 20, 3, 7] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 5, 7, 10, 20]);
//! assert!(tree.contains(&7));
//! assert_eq!(tree.delete(&7), Ok(7));
//! tree.validate().unwrap();
//! ```

mod arena;
pub mod error;
pub mod red_black;
pub mod set;
pub mod shell;
pub mod tree;
mod tree_node;
pub mod types;
pub mod util;

pub use error::{InvariantViolation, TreeError};
pub use red_black::RbTree;
pub use set::SearchTree;
pub use tree::OrderedTree;
pub use types::{Color, Links, NodeId, RbLinks, NIL};
