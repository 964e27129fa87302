//! Node handles, colors and the link trait shared by both trees.
//!
//! Nodes live in an arena and refer to each other by `u32` slot index.
//! Index [`NIL`] is reserved: the plain tree treats it as "no node", the
//! red-black tree keeps its sentinel there.

use std::fmt;

/// Reserved slot index for the boundary marker (absent child, parent of root).
pub const NIL: u32 = 0;

/// Handle to a node owned by a tree.
///
/// The generation changes every time a slot is released, so a handle to a
/// deleted node never resolves to whatever node reuses the slot later. The
/// owner names the tree that issued the handle; other trees reject it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) owner: u64,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Red-black node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[must_use]
    pub fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    #[must_use]
    pub fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

/// Read access to the parent/left/right links of a tree, by slot index.
///
/// The algorithms in [`crate::util`] are written once against this trait.
/// For the plain tree [`NIL`] reads as "no node"; for the red-black tree it
/// is the sentinel.
pub trait Links {
    type Key: Ord;

    fn root(&self) -> u32;
    fn p(&self, i: u32) -> u32;
    fn l(&self, i: u32) -> u32;
    fn r(&self, i: u32) -> u32;
    fn key(&self, i: u32) -> &Self::Key;
}

/// Link writes. Crate-private so only tree operations can relink nodes.
///
/// The plain tree drops writes to the parent of [`NIL`]; the red-black tree
/// stores them on the sentinel.
pub(crate) trait LinksMut: Links {
    fn set_root(&mut self, root: u32);
    fn set_p(&mut self, i: u32, v: u32);
    fn set_l(&mut self, i: u32, v: u32);
    fn set_r(&mut self, i: u32, v: u32);
}

/// Color reads on top of [`Links`]. [`NIL`] always reads as [`Color::Black`].
pub trait RbLinks: Links {
    fn color(&self, i: u32) -> Color;

    #[inline]
    fn is_red(&self, i: u32) -> bool {
        self.color(i).is_red()
    }

    #[inline]
    fn is_black(&self, i: u32) -> bool {
        self.color(i).is_black()
    }
}

pub(crate) trait RbLinksMut: RbLinks + LinksMut {
    fn set_color(&mut self, i: u32, color: Color);
}
