//! Slot arena owning every node of a tree.
//!
//! Slot [`NIL`] is never handed out. Released slots go onto a free list and
//! are reused by later allocations with a bumped generation. A slot whose
//! generation is exhausted is retired instead of reused.
//!
//! Every arena draws a process-unique owner id, and handles carry it, so a
//! handle issued by one tree never resolves in another.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TreeError;
use crate::types::{NodeId, NIL};

struct Slot<N> {
    generation: u32,
    node: Option<N>,
}

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

pub(crate) struct Arena<N> {
    owner: u64,
    slots: Vec<Slot<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            slots: vec![Slot {
                generation: 0,
                node: None,
            }],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores `node` and returns its slot.
    ///
    /// Fails without touching the arena when the slot vector cannot grow.
    pub fn alloc(&mut self, node: N) -> Result<NodeId, TreeError> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            self.len += 1;
            return Ok(NodeId {
                owner: self.owner,
                index,
                generation: slot.generation,
            });
        }

        let index = u32::try_from(self.slots.len()).map_err(|_| TreeError::AllocationFailed)?;
        self.slots
            .try_reserve(1)
            .map_err(|_| TreeError::AllocationFailed)?;
        // Keeps `release` from ever having to grow the free list.
        self.free
            .try_reserve(self.slots.len() - self.free.len())
            .map_err(|_| TreeError::AllocationFailed)?;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        self.len += 1;
        Ok(NodeId {
            owner: self.owner,
            index,
            generation: 0,
        })
    }

    /// Takes the node out of slot `index` and retires the slot's generation.
    ///
    /// A slot already at the last generation stays vacant for good, so no
    /// old handle can ever match it again.
    pub fn release(&mut self, index: u32) -> N {
        let slot = &mut self.slots[index as usize];
        let Some(node) = slot.node.take() else {
            panic!("release of vacant slot {index}");
        };
        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            self.free.push(index);
        }
        self.len -= 1;
        node
    }

    /// Slot index of `id` if it still names a live node.
    pub fn resolve(&self, id: NodeId) -> Result<u32, TreeError> {
        if id.owner != self.owner || id.index == NIL {
            return Err(TreeError::stale(id));
        }
        match self.slots.get(id.index as usize) {
            Some(slot) if slot.generation == id.generation && slot.node.is_some() => Ok(id.index),
            _ => Err(TreeError::stale(id)),
        }
    }

    /// Like [`Arena::resolve`], but a dead handle is a contract violation.
    pub fn expect_live(&self, id: NodeId) -> u32 {
        match self.resolve(id) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Handle for the live node at `index`.
    pub fn id(&self, index: u32) -> NodeId {
        NodeId {
            owner: self.owner,
            index,
            generation: self.slots[index as usize].generation,
        }
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, index: u32) -> &N {
        match &self.slots[index as usize].node {
            Some(node) => node,
            None => panic!("access to vacant slot {index}"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, index: u32) -> &mut N {
        match &mut self.slots[index as usize].node {
            Some(node) => node,
            None => panic!("access to vacant slot {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_skips_reserved_slot() {
        let mut arena = Arena::new();
        let a = arena.alloc("a").unwrap();
        let b = arena.alloc("b").unwrap();
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 2);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[2], "b");
    }

    #[test]
    fn released_slot_is_reused_with_new_generation() {
        let mut arena = Arena::new();
        let a = arena.alloc(10).unwrap();
        assert_eq!(arena.release(a.index()), 10);
        assert_eq!(arena.len(), 0);
        assert!(arena.resolve(a).is_err());

        let b = arena.alloc(20).unwrap();
        assert_eq!(b.index(), a.index());
        assert_ne!(b.generation(), a.generation());
        assert_eq!(arena.resolve(b), Ok(b.index()));
        assert_eq!(
            arena.resolve(a),
            Err(TreeError::StaleNode {
                index: a.index(),
                generation: a.generation()
            })
        );
    }

    #[test]
    fn handle_from_another_arena_is_rejected() {
        let mut a = Arena::new();
        let mut b = Arena::new();
        let from_a = a.alloc(1).unwrap();
        let from_b = b.alloc(2).unwrap();
        assert_eq!(from_a.index(), from_b.index());
        assert_eq!(from_a.generation(), from_b.generation());
        assert_ne!(from_a, from_b);

        assert_eq!(
            b.resolve(from_a),
            Err(TreeError::StaleNode {
                index: from_a.index(),
                generation: from_a.generation()
            })
        );
        assert_eq!(a.resolve(from_a), Ok(from_a.index()));
        assert_eq!(b.id(from_b.index()), from_b);
    }

    #[test]
    fn exhausted_generation_retires_slot() {
        let mut arena = Arena::new();
        let a = arena.alloc(1).unwrap();
        arena.slots[a.index() as usize].generation = u32::MAX;
        let last = arena.id(a.index());
        assert_eq!(arena.resolve(last), Ok(a.index()));

        arena.release(a.index());
        assert!(arena.free.is_empty());
        assert_eq!(arena.slots[a.index() as usize].generation, u32::MAX);

        let b = arena.alloc(2).unwrap();
        assert_ne!(b.index(), a.index());
        assert!(arena.resolve(last).is_err());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn nil_never_resolves() {
        let arena = Arena::<u8>::new();
        let nil = NodeId {
            owner: arena.owner,
            index: NIL,
            generation: 0,
        };
        assert!(arena.resolve(nil).is_err());
    }

    #[test]
    #[should_panic(expected = "vacant slot")]
    fn vacant_access_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1).unwrap();
        arena.release(a.index());
        let _value: i32 = arena[a.index()];
    }
}
