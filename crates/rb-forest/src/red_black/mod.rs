//! Red-black tree: the plain tree's descent and removal plus coloring,
//! rotations and the insert/delete fixup passes.

mod rb_tree;
mod types;
pub mod util;

pub use rb_tree::RbTree;
pub use util::check_red_black;
