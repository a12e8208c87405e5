use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::{sort, Iter, Link, Node, NodePtr};
use crate::collections::traits::{Collection, Iterable, List, SubList};
use crate::compare::Comparator;
#[doc(inline)]
pub use crate::util::error::{EmptyContainer, IndexOrEmpty, IndexOutOfBounds};

/// A singly linked list with links from head to tail, ordered and searched by a caller-supplied
/// [`Comparator`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `at` / `replace_at` | `O(i)` |
/// | `remove_at` | `O(i)` |
/// | `contains` / `index_of` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `sort` | `O(n log n)` |
///
/// Sorting relinks nodes rather than moving values, so it never clones or drops an element.
///
/// As a general note, modern computer architecture isn't kind to linked lists, because all `O(i)`
/// and `O(n)` operations consist primarily of cache misses. For this reason,
/// [`ArrayList`](crate::collections::contiguous::ArrayList) should be preferred unless the `O(1)`
/// end operations are being heavily utilized.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    cmp: Comparator<T>,
    _phantom: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new(cmp: Comparator<T>) -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            cmp,
            _phantom: PhantomData,
        }
    }

    /// Creates a LinkedList holding a clone of every element of `source`, visited in the source's
    /// natural order.
    pub fn from_iterable(source: &dyn Iterable<T>, cmp: Comparator<T>) -> LinkedList<T>
    where
        T: Clone,
    {
        let mut list = LinkedList::new(cmp);
        source.for_each(&mut |element, _| list.push_back(element.clone()));
        list
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparator this list orders and searches by.
    pub const fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| node.value())
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| node.value())
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodePtr::from_node(Node { value, next: None });

        match self.tail {
            Some(tail) => *tail.next_mut() = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;
        self.head = *node.next();
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.take_node().value)
    }

    /// Moves the element at `index` out of the list, relinking its neighbors. Returns [`None`] —
    /// without mutating anything — if `index` is out of bounds.
    pub fn take_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        let prev = self.seek(index - 1)?;
        let node = (*prev.next())?;
        *prev.next_mut() = *node.next();
        if prev.next().is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Some(node.take_node().value)
    }

    /// Removes the first element comparing equal to `element` under the list's comparator.
    /// Returns true if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => self.take_at(index).is_some(),
            None => false,
        }
    }

    /// Returns a borrowed iterator over the list.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub(crate) const fn head_link(&self) -> Link<T> {
        self.head
    }

    /// Walks `index` links from the head, returning the node there if the chain is long enough.
    fn seek(&self, index: usize) -> Option<NodePtr<T>> {
        let mut node = self.head?;
        for _ in 0..index {
            node = (*node.next())?;
        }
        Some(node)
    }
}

impl<T> Collection<T> for LinkedList<T> {
    fn add(&mut self, element: T) {
        self.push_back(element);
    }

    fn clear(&mut self) {
        let mut curr = self.head;
        while let Some(node) = curr {
            curr = *node.next();
            // SAFETY: The walk has already moved past this node, and no other pointer to it
            // survives the reset below.
            unsafe {
                node.drop_node();
            }
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn contains(&self, element: &T) -> bool {
        self.iter().any(|value| self.cmp.eq(value, element))
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Iterable<T> for LinkedList<T> {
    fn for_each(&self, visit: &mut dyn FnMut(&T, usize)) {
        for (index, element) in self.iter().enumerate() {
            visit(element, index);
        }
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|value| self.cmp.eq(element, value))
    }
}

impl<T> List<T> for LinkedList<T> {
    fn at(&self, index: usize) -> Result<&T, IndexOrEmpty> {
        // An empty list has no valid index at all, which is reported as its own condition rather
        // than as a bounds failure.
        if self.len == 0 {
            return Err(EmptyContainer.into());
        }
        match self.seek(index) {
            Some(node) => Ok(node.value()),
            None => Err(IndexOutOfBounds {
                index,
                len: self.len,
            }
            .into()),
        }
    }

    fn remove_at(&mut self, index: usize) -> bool {
        self.take_at(index).is_some()
    }

    fn replace_at(&mut self, index: usize, element: T) -> bool {
        match self.seek(index) {
            Some(mut node) => {
                *node.value_mut() = element;
                true
            },
            None => false,
        }
    }

    fn sort(&mut self) {
        self.head = sort::merge_sort(self.head, &self.cmp);

        // Relinking leaves the old tail pointer stale; walk to the new last node.
        let mut tail = self.head;
        while let Some(node) = tail {
            match *node.next() {
                Some(next) => tail = Some(next),
                None => break,
            }
        }
        self.tail = tail;
    }

    fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            curr = mem::replace(node.next_mut(), prev);
            prev = Some(node);
        }
        self.tail = self.head;
        self.head = prev;
    }

    fn some(&self, predicate: &mut dyn FnMut(&T, usize) -> bool) -> bool {
        let mut result = false;
        for (index, element) in self.iter().enumerate() {
            result = result || predicate(element, index);
        }
        result
    }

    fn filter(&self, predicate: &mut dyn FnMut(&T) -> bool) -> LinkedList<T>
    where
        T: Clone,
    {
        let mut list = LinkedList::new(self.cmp.clone());
        for element in self.iter() {
            if predicate(element) {
                list.push_back(element.clone());
            }
        }
        list
    }

    fn sub_list(&self, start: usize, end: usize) -> SubList<'_, LinkedList<T>>
    where
        T: Clone,
    {
        if start > self.len || end > self.len || start > end {
            return SubList::Whole(self);
        }

        let mut list = LinkedList::new(self.cmp.clone());
        for element in self.iter().take(end).skip(start) {
            list.push_back(element.clone());
        }
        SubList::Range(list)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head;
        while let Some(node) = curr {
            curr = *node.next();
            // SAFETY: The walk has already moved past this node, and the list is going away.
            unsafe {
                node.drop_node();
            }
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new(self.cmp.clone());
        for element in self {
            list.push_back(element.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a LinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("LinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in self {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "({element:?})")?;
            first = false;
        }
        Ok(())
    }
}
