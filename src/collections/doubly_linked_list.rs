//! A doubly-linked list of `i32` values backed by an arena of nodes.
//!
//! Nodes live in a single `Vec` and refer to their neighbours by slot index
//! rather than by pointer, so the list can be walked in either direction and
//! relinked in place without any `unsafe` code. Slots freed by a removal are
//! recycled by the next insertion.
//!
//! Besides the usual positional operations, the list offers a handful of
//! whole-list transformations (reverse, partition, pairwise swap) that only
//! rewrite links and never move or allocate nodes.
//!
//! The list is plain owned data. It performs no internal synchronisation, so
//! sharing one across threads for mutation requires an external lock.

use std::fmt;

use core::hash::{Hash, Hasher};
use core::mem;

/// Creates a `DoublyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use dlist::prelude::*;
///
/// let list = dlist![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().eq([&1, &2, &3]));
/// ```
///
/// ```
/// use dlist::prelude::*;
///
/// let list = dlist![7; 4];
/// assert_eq!(list.len(), 4);
/// assert!(list.iter().eq([&7, &7, &7, &7]));
/// ```
#[macro_export]
macro_rules! dlist {
    () => {
        $crate::collections::doubly_linked_list::DoublyLinkedList::new()
    };
    ($($elem:expr)=>+) => {{
        let mut list = $crate::collections::doubly_linked_list::DoublyLinkedList::new();
        $(list.append($elem);)+
        list
    }};
    ($elem:expr; $n:expr) => {{
        // Ensure the expression is only evaluated once.
        let count = $n;

        let mut list = $crate::collections::doubly_linked_list::DoublyLinkedList::new();
        list.extend(::core::iter::repeat($elem).take(count));
        list
    }};
}

/// A doubly-linked list of `i32` values.
///
/// The list tracks both ends, so appending, prepending and removing at either
/// end take *constant* time. Positional access walks from whichever end is
/// closer to the requested index.
#[derive(Clone)]
pub struct DoublyLinkedList {
    /// Node storage. A slot is either part of the chain or on the free list.
    slots: Vec<Slot>,
    /// First vacant slot, if any.
    free: Option<usize>,
    /// Slot of the first node.
    head: Option<usize>,
    /// Slot of the last node.
    tail: Option<usize>,
    /// Number of linked nodes.
    len: usize,
}

/// A single element of a [`DoublyLinkedList`].
///
/// Nodes borrowed from a list expose their value and whether they have
/// neighbours. Nodes returned by a removal are detached: both links are
/// cleared.
#[derive(Debug, Clone)]
pub struct Node {
    /// Slot of the successor.
    next: Option<usize>,
    /// Slot of the predecessor.
    prev: Option<usize>,
    /// The node's data.
    value: i32,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// Head and tail of a chain being rebuilt out of existing slots.
#[derive(Debug, Default, Clone, Copy)]
struct Chain {
    head: Option<usize>,
    tail: Option<usize>,
}

/// An iterator over the values of a `DoublyLinkedList`, from head to tail.
///
/// Created by [`DoublyLinkedList::iter`]. Calling `rev` on it walks the list
/// backwards from the tail.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a DoublyLinkedList,
    /// Next slot to yield from the front.
    head: Option<usize>,
    /// Next slot to yield from the back.
    tail: Option<usize>,
    /// Number of values not yet yielded.
    len: usize,
}

/// An iterator that moves values out of a `DoublyLinkedList`.
#[derive(Debug)]
pub struct IntoIter {
    list: DoublyLinkedList,
}

impl Node {
    /// Returns the value stored in this node.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns `true` if this node has a successor.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if this node has a predecessor.
    #[inline]
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Consumes the node, returning its value.
    #[inline]
    pub fn into_value(self) -> i32 {
        self.value
    }

    fn new(value: i32) -> Self {
        Self {
            next: None,
            prev: None,
            value,
        }
    }
}

impl DoublyLinkedList {
    /// Constructs a new, empty `DoublyLinkedList`.
    ///
    /// The list will not allocate until values are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = DoublyLinkedList::new();
    /// assert!(list.is_empty());
    /// assert!(list.head().is_none());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Constructs a new, empty `DoublyLinkedList` with room for at least
    /// `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Constructs a list holding the single `value`, which is both its head
    /// and its tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = DoublyLinkedList::with_value(4);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.head().map(|n| n.value()), Some(4));
    /// assert_eq!(list.tail().map(|n| n.value()), Some(4));
    /// ```
    pub fn with_value(value: i32) -> Self {
        let mut list = Self::with_capacity(1);
        list.append(value);
        list
    }

    /// Returns the first node of the list, or [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn head(&self) -> Option<&Node> {
        self.head.map(|idx| self.node(idx))
    }

    /// Returns the last node of the list, or [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn tail(&self) -> Option<&Node> {
        self.tail.map(|idx| self.node(idx))
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` after the current tail.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// assert!(list.iter().eq([&1, &2]));
    /// ```
    pub fn append(&mut self, value: i32) {
        let idx = self.alloc(value);

        match self.tail {
            Some(tail) => {
                self.node_mut(tail).next = Some(idx);
                self.node_mut(idx).prev = Some(tail);
            }
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);
        self.len += 1;
    }

    /// Adds `value` before the current head.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.prepend(1);
    /// list.prepend(2);
    ///
    /// assert!(list.iter().eq([&2, &1]));
    /// ```
    pub fn prepend(&mut self, value: i32) {
        let idx = self.alloc(value);

        match self.head {
            Some(head) => {
                self.node_mut(head).prev = Some(idx);
                self.node_mut(idx).next = Some(head);
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
        self.len += 1;
    }

    /// Detaches the last node and returns it, or [`None`] if the list is
    /// empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2];
    ///
    /// let node = list.remove_last().unwrap();
    /// assert_eq!(node.value(), 2);
    /// assert!(!node.has_prev());
    ///
    /// assert_eq!(list.remove_last().map(|n| n.value()), Some(1));
    /// assert!(list.remove_last().is_none());
    /// ```
    pub fn remove_last(&mut self) -> Option<Node> {
        let tail = self.tail?;

        self.tail = self.node(tail).prev;
        match self.tail {
            Some(new_tail) => self.node_mut(new_tail).next = None,
            None => self.head = None,
        }

        self.len -= 1;
        Some(self.release(tail))
    }

    /// Detaches the first node and returns it, or [`None`] if the list is
    /// empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2];
    ///
    /// let node = list.remove_first().unwrap();
    /// assert_eq!(node.value(), 1);
    /// assert!(!node.has_next());
    ///
    /// assert_eq!(list.head().map(|n| n.value()), Some(2));
    /// ```
    pub fn remove_first(&mut self) -> Option<Node> {
        let head = self.head?;

        self.head = self.node(head).next;
        match self.head {
            Some(new_head) => self.node_mut(new_head).prev = None,
            None => self.tail = None,
        }

        self.len -= 1;
        Some(self.release(head))
    }

    /// Returns the node at `index`, or [`None`] if `index >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(min(*i*, *n* - *i*)) time. The walk starts from the head for
    /// indices in the first half of the list and from the tail otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![10 => 20 => 30];
    ///
    /// assert_eq!(list.get(0).map(|n| n.value()), Some(10));
    /// assert_eq!(list.get(2).map(|n| n.value()), Some(30));
    /// assert!(list.get(3).is_none());
    /// ```
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.locate(index).map(|idx| self.node(idx))
    }

    /// Returns a mutable reference to the value at `index`, or [`None`] if
    /// `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        let idx = self.locate(index)?;
        Some(&mut self.node_mut(idx).value)
    }

    /// Overwrites the value at `index`, returning `false` if `index` is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3];
    ///
    /// assert!(list.set(1, 9));
    /// assert!(!list.set(3, 9));
    /// assert!(list.iter().eq([&1, &9, &3]));
    /// ```
    pub fn set(&mut self, index: usize, value: i32) -> bool {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                log::debug!("set: index {} out of range for length {}", index, self.len);
                false
            }
        }
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Valid positions are `0..=len`; inserting at `len` appends. Returns
    /// `false` and leaves the list untouched for any other index.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, dominated by locating the predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 3];
    ///
    /// assert!(list.insert(2, 1));
    /// assert!(list.insert(4, 3));
    /// assert!(!list.insert(5, 9));
    ///
    /// assert!(list.iter().eq([&1, &2, &3, &4]));
    /// ```
    pub fn insert(&mut self, value: i32, index: usize) -> bool {
        if index > self.len {
            log::debug!("insert: index {} out of range for length {}", index, self.len);
            return false;
        }
        if index == 0 {
            self.prepend(value);
            return true;
        }
        if index == self.len {
            self.append(value);
            return true;
        }

        // Interior position: both neighbours exist.
        let Some(before) = self.locate(index - 1) else {
            return false;
        };
        let Some(after) = self.node(before).next else {
            return false;
        };

        let idx = self.alloc(value);
        let node = self.node_mut(idx);
        node.prev = Some(before);
        node.next = Some(after);

        self.node_mut(before).next = Some(idx);
        self.node_mut(after).prev = Some(idx);
        self.len += 1;

        true
    }

    /// Detaches the node at `index` and returns it, or [`None`] if
    /// `index >= len`.
    ///
    /// Exactly one node is removed per call. The ends are handled by
    /// [`remove_first`](Self::remove_first) and
    /// [`remove_last`](Self::remove_last).
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, dominated by locating the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3 => 4];
    ///
    /// assert_eq!(list.remove(1).map(|n| n.value()), Some(2));
    /// assert_eq!(list.remove(0).map(|n| n.value()), Some(1));
    /// assert!(list.remove(2).is_none());
    ///
    /// assert!(list.iter().eq([&3, &4]));
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index >= self.len {
            log::debug!("remove: index {} out of range for length {}", index, self.len);
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }
        if index == self.len - 1 {
            return self.remove_last();
        }

        let idx = self.locate(index)?;
        let node = self.node(idx);
        let (before, after) = (node.prev?, node.next?);

        self.node_mut(before).next = Some(after);
        self.node_mut(after).prev = Some(before);
        self.len -= 1;

        Some(self.release(idx))
    }

    /// Removes every node from the list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns `true` if some node in the list holds `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|v| *v == value)
    }

    /// Returns `true` if the values read the same from either end.
    ///
    /// Empty and single-node lists are palindromes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time and *O*(1) space. Two cursors walk in from the head
    /// and the tail and meet in the middle.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// assert!(dlist![1 => 2 => 1].is_palindrome());
    /// assert!(!dlist![1 => 2 => 3].is_palindrome());
    /// ```
    pub fn is_palindrome(&self) -> bool {
        let mut forward = self.head;
        let mut backward = self.tail;

        for _ in 0..self.len / 2 {
            let (Some(front), Some(back)) = (forward, backward) else {
                break;
            };
            let (front, back) = (self.node(front), self.node(back));

            if front.value != back.value {
                return false;
            }

            forward = front.next;
            backward = back.prev;
        }

        true
    }

    /// Reverses the order of the nodes in place.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time and *O*(1) space.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3];
    /// list.reverse();
    ///
    /// assert!(list.iter().eq([&3, &2, &1]));
    /// ```
    pub fn reverse(&mut self) {
        log::trace!("reverse: {} nodes", self.len);

        let mut curr = self.head;
        while let Some(idx) = curr {
            let node = self.node_mut(idx);
            mem::swap(&mut node.next, &mut node.prev);
            // The old successor is now stored in `prev`.
            curr = node.prev;
        }

        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Reorders the nodes so that every value less than `threshold` comes
    /// before every value greater than or equal to it.
    ///
    /// The partition is stable: relative order within each group is kept.
    /// Existing nodes are relinked; nothing is allocated.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time and *O*(1) space.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![5 => 3 => 8 => 6 => 2];
    /// list.partition(3);
    ///
    /// assert!(list.iter().eq([&2, &5, &3, &8, &6]));
    /// ```
    pub fn partition(&mut self, threshold: i32) {
        log::trace!("partition: {} nodes around {}", self.len, threshold);

        let mut below = Chain::default();
        let mut rest = Chain::default();

        let mut curr = self.head;
        while let Some(idx) = curr {
            let node = self.node(idx);
            curr = node.next;

            if node.value < threshold {
                self.link_back(&mut below, idx);
            } else {
                self.link_back(&mut rest, idx);
            }
        }

        match below.tail {
            Some(below_tail) => {
                self.node_mut(below_tail).next = rest.head;
                if let Some(rest_head) = rest.head {
                    self.node_mut(rest_head).prev = Some(below_tail);
                }

                self.head = below.head;
                self.tail = rest.tail.or(below.tail);
            }
            None => {
                self.head = rest.head;
                self.tail = rest.tail;
            }
        }
    }

    /// Swaps every two adjacent nodes (first with second, third with fourth,
    /// and so on). A trailing odd node stays where it is.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time and *O*(1) space.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let mut list = dlist![1 => 2 => 3 => 4 => 5];
    /// list.swap_pairs();
    ///
    /// assert!(list.iter().eq([&2, &1, &4, &3, &5]));
    /// ```
    pub fn swap_pairs(&mut self) {
        log::trace!("swap_pairs: {} nodes", self.len);

        let mut swapped = Chain::default();

        let mut curr = self.head;
        while let Some(first) = curr {
            match self.node(first).next {
                Some(second) => {
                    curr = self.node(second).next;
                    self.link_back(&mut swapped, second);
                    self.link_back(&mut swapped, first);
                }
                None => {
                    curr = None;
                    self.link_back(&mut swapped, first);
                }
            }
        }

        self.head = swapped.head;
        self.tail = swapped.tail;
    }

    /// Returns a front-to-back iterator over the values in the list.
    ///
    /// Each call starts a fresh traversal from the head; use `rev` to walk
    /// from the tail instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::prelude::*;
    ///
    /// let list = dlist![1 => 2 => 3];
    ///
    /// assert!(list.iter().eq([&1, &2, &3]));
    /// assert!(list.iter().rev().eq([&3, &2, &1]));
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }

    /// Finds the slot holding position `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut curr = self.head?;
            for _ in 0..index {
                curr = self.node(curr).next?;
            }
            Some(curr)
        } else {
            let mut curr = self.tail?;
            for _ in index + 1..self.len {
                curr = self.node(curr).prev?;
            }
            Some(curr)
        }
    }

    /// Moves the node in slot `idx` to the end of `chain`, overwriting both of
    /// its links.
    fn link_back(&mut self, chain: &mut Chain, idx: usize) {
        let prev = chain.tail;

        match prev {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => chain.head = Some(idx),
        }

        let node = self.node_mut(idx);
        node.prev = prev;
        node.next = None;

        chain.tail = Some(idx);
    }

    /// Places a fresh unlinked node in a vacant slot, growing the arena if
    /// none is free.
    fn alloc(&mut self, value: i32) -> usize {
        match self.free {
            Some(idx) => {
                let slot = mem::replace(&mut self.slots[idx], Slot::Occupied(Node::new(value)));
                if let Slot::Vacant { next_free } = slot {
                    self.free = next_free;
                }
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(Node::new(value)));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates slot `idx` and returns its node with both links cleared.
    ///
    /// The caller must already have unlinked the node from the chain.
    fn release(&mut self, idx: usize) -> Node {
        let slot = mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(idx);

        match slot {
            Slot::Occupied(mut node) => {
                node.next = None;
                node.prev = None;
                node
            }
            Slot::Vacant { .. } => unreachable!("released vacant slot {idx}"),
        }
    }

    fn node(&self, idx: usize) -> &Node {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked to vacant slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked to vacant slot {idx}"),
        }
    }
}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl FromIterator<i32> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<const N: usize> From<[i32; N]> for DoublyLinkedList {
    fn from(values: [i32; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl Eq for DoublyLinkedList {}

impl Hash for DoublyLinkedList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl IntoIterator for DoublyLinkedList {
    type IntoIter = IntoIter;
    type Item = i32;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type IntoIter = Iter<'a>;
    type Item = &'a i32;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|idx| {
            let node = self.list.node(idx);
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|idx| {
            let node = self.list.node(idx);
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.len
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().map(Node::into_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().map(Node::into_value)
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.list.len
    }
}
