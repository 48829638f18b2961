//! Fixed-capacity doubly linked list over an index arena.
//!
//! Nodes live in a `heapless::Vec` and link to each other by index, so
//! `next`/`prev` are explicit accessors instead of a field-naming
//! convention, and there are no pointers to dangle. Removed slots go on a
//! free list and are reused by later inserts.
//!
//! A [`NodeId`] stays valid until its node is removed. After that it may
//! refer to a different node once the slot is reused.

use heapless::Vec;

use crate::error::{Error, Result};

/// Handle to a node in an [`IndexList`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct NodeId(u16);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Doubly linked list holding at most `N` values.
#[derive(Debug)]
pub struct IndexList<T, const N: usize> {
    slots: Vec<Slot<T>, N>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    free: Option<NodeId>,
    len: usize,
}

impl<T, const N: usize> IndexList<T, N> {
    const CAPACITY_FITS: () = assert!(N <= u16::MAX as usize, "IndexList capacity must fit in u16");

    pub const fn new() -> Self {
        let () = Self::CAPACITY_FITS;
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize { self.len }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    #[inline]
    pub const fn is_full(&self) -> bool { self.len == N }

    #[inline]
    pub const fn capacity(&self) -> usize { N }

    #[inline]
    pub const fn head(&self) -> Option<NodeId> { self.head }

    #[inline]
    pub const fn tail(&self) -> Option<NodeId> { self.tail }

    /// Node after `id`, or `None` at the tail or for a stale handle.
    pub fn next(
        &self,
        id: NodeId,
    ) -> Option<NodeId> {
        self.node(id).ok()?.next
    }

    /// Node before `id`, or `None` at the head or for a stale handle.
    pub fn prev(
        &self,
        id: NodeId,
    ) -> Option<NodeId> {
        self.node(id).ok()?.prev
    }

    pub fn get(
        &self,
        id: NodeId,
    ) -> Option<&T> {
        self.node(id).ok().map(|n| &n.value)
    }

    pub fn get_mut(
        &mut self,
        id: NodeId,
    ) -> Option<&mut T> {
        self.node_mut(id).ok().map(|n| &mut n.value)
    }

    /// Append to the tail.
    pub fn push_back(
        &mut self,
        value: T,
    ) -> Result<NodeId> {
        let id = self.alloc(value)?;
        match self.tail {
            Some(tail) => self.link_after(tail, id)?,
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
        }
        Ok(id)
    }

    /// Prepend at the head.
    pub fn push_front(
        &mut self,
        value: T,
    ) -> Result<NodeId> {
        let id = self.alloc(value)?;
        match self.head {
            Some(old_head) => {
                self.node_mut(id)?.next = Some(old_head);
                self.node_mut(old_head)?.prev = Some(id);
                self.head = Some(id);
            }
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
        }
        Ok(id)
    }

    /// Insert `value` right after `anchor`.
    pub fn insert_after(
        &mut self,
        anchor: NodeId,
        value: T,
    ) -> Result<NodeId> {
        self.node(anchor)?;
        let id = self.alloc(value)?;
        self.link_after(anchor, id)?;
        Ok(id)
    }

    /// Unlink `id` and return its value.
    pub fn remove(
        &mut self,
        id: NodeId,
    ) -> Result<T> {
        let (prev, next) = {
            let node = self.node(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.node_mut(p)?.next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n)?.prev = prev,
            None => self.tail = prev,
        }

        let slot = core::mem::replace(&mut self.slots[id.index()], Slot::Vacant { next_free: self.free });
        self.free = Some(id);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => Ok(node.value),
            Slot::Vacant { .. } => Err(Error::InvalidNode),
        }
    }

    /// Remove and return the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.remove(head).ok()
    }

    /// Iterate values from head to tail.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn alloc(
        &mut self,
        value: T,
    ) -> Result<NodeId> {
        let node = Slot::Occupied(Node {
            value,
            next: None,
            prev: None,
        });
        let id = match self.free {
            Some(id) => {
                let slot = core::mem::replace(&mut self.slots[id.index()], node);
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => None,
                };
                id
            }
            None => {
                let id = NodeId(self.slots.len() as u16);
                self.slots.push(node).map_err(|_| Error::Full)?;
                id
            }
        };
        self.len += 1;
        Ok(id)
    }

    fn link_after(
        &mut self,
        anchor: NodeId,
        id: NodeId,
    ) -> Result<()> {
        let after = self.node(anchor)?.next;
        {
            let node = self.node_mut(id)?;
            node.prev = Some(anchor);
            node.next = after;
        }
        self.node_mut(anchor)?.next = Some(id);
        match after {
            Some(a) => self.node_mut(a)?.prev = Some(id),
            None => self.tail = Some(id),
        }
        Ok(())
    }

    fn node(
        &self,
        id: NodeId,
    ) -> Result<&Node<T>> {
        match self.slots.get(id.index()) {
            Some(Slot::Occupied(node)) => Ok(node),
            _ => Err(Error::InvalidNode),
        }
    }

    fn node_mut(
        &mut self,
        id: NodeId,
    ) -> Result<&mut Node<T>> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Occupied(node)) => Ok(node),
            _ => Err(Error::InvalidNode),
        }
    }
}

impl<T, const N: usize> Default for IndexList<T, N> {
    fn default() -> Self { Self::new() }
}

/// Iterator over list values, head to tail.
pub struct Iter<'a, T, const N: usize> {
    list: &'a IndexList<T, N>,
    cursor: Option<NodeId>,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?).ok()?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a IndexList<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<const N: usize>(list: &IndexList<u32, N>) -> Vec<u32, N> { list.iter().copied().collect() }

    #[test]
    fn test_push_back_and_front() {
        let mut list: IndexList<u32, 8> = IndexList::new();
        assert!(list.is_empty());
        list.push_back(2).unwrap();
        list.push_back(3).unwrap();
        list.push_front(1).unwrap();
        assert_eq!(values(&list).as_slice(), &[1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_next_prev_traversal() {
        let mut list: IndexList<u32, 4> = IndexList::new();
        let a = list.push_back(10).unwrap();
        let b = list.push_back(20).unwrap();
        let c = list.push_back(30).unwrap();

        assert_eq!(list.head(), Some(a));
        assert_eq!(list.next(a), Some(b));
        assert_eq!(list.next(b), Some(c));
        assert_eq!(list.next(c), None);
        assert_eq!(list.prev(c), Some(b));
        assert_eq!(list.prev(a), None);
        assert_eq!(list.tail(), Some(c));
    }

    #[test]
    fn test_insert_after() {
        let mut list: IndexList<u32, 4> = IndexList::new();
        let a = list.push_back(1).unwrap();
        let c = list.push_back(3).unwrap();
        let b = list.insert_after(a, 2).unwrap();
        assert_eq!(values(&list).as_slice(), &[1, 2, 3]);
        assert_eq!(list.prev(c), Some(b));

        let d = list.insert_after(c, 4).unwrap();
        assert_eq!(list.tail(), Some(d));
    }

    #[test]
    fn test_remove_relinks() {
        let mut list: IndexList<u32, 4> = IndexList::new();
        let a = list.push_back(1).unwrap();
        let b = list.push_back(2).unwrap();
        let c = list.push_back(3).unwrap();

        assert_eq!(list.remove(b), Ok(2));
        assert_eq!(list.next(a), Some(c));
        assert_eq!(list.prev(c), Some(a));

        assert_eq!(list.remove(a), Ok(1));
        assert_eq!(list.head(), Some(c));
        assert_eq!(list.remove(c), Ok(3));
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_stale_handle() {
        let mut list: IndexList<u32, 4> = IndexList::new();
        let a = list.push_back(1).unwrap();
        list.remove(a).unwrap();
        assert_eq!(list.remove(a), Err(Error::InvalidNode));
        assert_eq!(list.get(a), None);
        assert_eq!(list.insert_after(a, 5), Err(Error::InvalidNode));
        assert!(list.is_empty());
    }

    #[test]
    fn test_capacity_and_slot_reuse() {
        let mut list: IndexList<u32, 2> = IndexList::new();
        let a = list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        assert!(list.is_full());
        assert_eq!(list.push_back(3), Err(Error::Full));
        assert_eq!(list.len(), 2);

        list.remove(a).unwrap();
        let reused = list.push_front(0).unwrap();
        assert_eq!(reused, a);
        assert_eq!(values(&list).as_slice(), &[0, 2]);
    }

    #[test]
    fn test_get_mut_and_pop_front() {
        let mut list: IndexList<u32, 4> = IndexList::new();
        let a = list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        *list.get_mut(a).unwrap() = 100;
        assert_eq!(list.pop_front(), Some(100));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
    }
}
