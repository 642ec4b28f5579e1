//! Arena-backed doubly linked list used as the recency chain.
//!
//! Nodes live in a `Vec` and refer to their neighbours by [`SlotId`] rather
//! than by pointer, so no entry can dangle and no entry can be freed twice.
//! Vacated slots go on a free list and are handed out again by the next
//! insertion, so a cache that has reached its capacity stops allocating.
//!
//! The front of the list is the most recently used entry and the back is the
//! least recently used one. Links are named after that ordering: `older`
//! points towards the back, `newer` towards the front.

extern crate alloc;

use crate::error::InvariantError;
use alloc::vec::Vec;
use core::fmt;

/// Stable handle to a node in a [`List`].
///
/// A handle stays valid until the node it names is popped or the list is
/// cleared; after that the slot may be reused for a different value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

impl SlotId {
    /// Position of the slot in the arena.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Neighbour links of one node. `None` marks a chain end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Links {
    older: Option<SlotId>,
    newer: Option<SlotId>,
}

/// A doubly linked list whose nodes are stored in an index-addressed arena.
///
/// Every reordering is a detach followed by an attach at the front, both of
/// which only rewrite a constant number of links.
pub(crate) struct List<T> {
    /// Links for every slot, occupied or not. Indexed by `SlotId`.
    links: Vec<Links>,
    /// Values for every slot; `None` for vacated slots.
    values: Vec<Option<T>>,
    /// Vacated slots, reused before the arena grows.
    free: Vec<SlotId>,
    /// Most recently used node.
    head: Option<SlotId>,
    /// Least recently used node.
    tail: Option<SlotId>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        List {
            links: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of linked nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no nodes.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the arena has handed out so far, occupied or vacated.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.values.len()
    }

    /// Handle of the least recently used node.
    #[inline]
    pub(crate) fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Value at the front (most recently used end).
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Value at the back (least recently used end).
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the value stored in `id`, or `None` if the slot is vacant.
    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.values.get(id.0)?.as_ref()
    }

    /// Returns the value stored in `id` mutably, or `None` if the slot is vacant.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.values.get_mut(id.0)?.as_mut()
    }

    /// Stores `value` in a fresh or recycled slot and links it at the front.
    pub(crate) fn push_front(&mut self, value: T) -> SlotId {
        let id = self.alloc(value);
        self.attach_front(id);
        self.len += 1;
        id
    }

    /// Moves `id` to the front. A node already at the front is left alone.
    pub(crate) fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) {
            return;
        }
        self.detach(id);
        self.attach_front(id);
    }

    /// Unlinks the back node, vacates its slot and returns its value.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.detach(id);
        self.free.push(id);
        self.len -= 1;
        self.values[id.0].take()
    }

    /// Drops every node and releases all slots.
    pub(crate) fn clear(&mut self) {
        self.links.clear();
        self.values.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates values from the front (most recent) to the back (least recent).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Walks the chain from the back and verifies that every link is mirrored
    /// by its neighbour and that both ends are terminated.
    ///
    /// Returns the number of nodes reached.
    pub(crate) fn check_links(&self) -> Result<usize, InvariantError> {
        match (self.head, self.tail) {
            (None, None) if self.len == 0 => return Ok(0),
            (Some(head), Some(tail)) => {
                if self.links[head.0].newer.is_some() || self.links[tail.0].older.is_some() {
                    return Err(InvariantError::BrokenEnds);
                }
            }
            _ => return Err(InvariantError::BrokenEnds),
        }

        let mut reached = 0;
        let mut previous = None;
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            // More steps than nodes means a cycle or a node missing from `len`.
            if reached == self.len {
                return Err(InvariantError::LengthMismatch {
                    index: self.len,
                    chain: reached + 1,
                });
            }
            let links = self
                .links
                .get(id.0)
                .ok_or(InvariantError::BrokenLink { slot: id.0 })?;
            if links.older != previous || self.get(id).is_none() {
                return Err(InvariantError::BrokenLink { slot: id.0 });
            }
            reached += 1;
            previous = Some(id);
            cursor = links.newer;
        }

        if previous != self.head {
            return Err(InvariantError::BrokenEnds);
        }
        Ok(reached)
    }

    fn alloc(&mut self, value: T) -> SlotId {
        match self.free.pop() {
            Some(id) => {
                self.values[id.0] = Some(value);
                id
            }
            None => {
                self.links.push(Links::default());
                self.values.push(Some(value));
                SlotId(self.values.len() - 1)
            }
        }
    }

    /// Reconnects the neighbours of `id` to each other and clears its links.
    fn detach(&mut self, id: SlotId) {
        let Links { older, newer } = self.links[id.0];
        match older {
            Some(o) => self.links[o.0].newer = newer,
            None => self.tail = newer,
        }
        match newer {
            Some(n) => self.links[n.0].older = older,
            None => self.head = older,
        }
        self.links[id.0] = Links::default();
    }

    /// Links a detached `id` in front of the current head.
    fn attach_front(&mut self, id: SlotId) {
        self.links[id.0] = Links {
            older: self.head,
            newer: None,
        };
        match self.head {
            Some(h) => self.links[h.0].newer = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.values.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.list.links[id.0].older;
        self.list.get(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.list.links[id.0].newer;
        self.list.get(id)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
