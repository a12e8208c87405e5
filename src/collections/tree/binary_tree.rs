use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Branch, Cursor};
use crate::collections::traits::Collection;
use crate::compare::Comparator;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// An unbalanced binary search tree, ordered by a caller-supplied [`Comparator`]. Values
/// comparing equal to one already in the tree are dropped on insertion, so the tree never holds
/// duplicates.
///
/// No rebalancing is performed: the shape of the tree is entirely determined by insertion order,
/// and a sorted insertion sequence degenerates into a chain.
///
/// Every node carries a back-pointer to its parent, which is what lets the [`Cursor`] returned by
/// [`iterator`](BinaryTree::iterator) walk upwards as well as down.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinaryTree.
/// - `h`: The height of the tree — between `log n` and `n`, depending on insertion order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(h)` |
/// | `min` / `max` | `O(h)` |
/// | `has` / `contains` | `O(n)` |
///
/// `has` scans every node rather than descending by comparison, so membership is linear even
/// when the tree happens to be balanced.
pub struct BinaryTree<T> {
    root: Branch<T>,
    len: usize,
    cmp: Comparator<T>,
}

impl<T> BinaryTree<T> {
    /// Creates a new BinaryTree with no nodes.
    pub const fn new(cmp: Comparator<T>) -> BinaryTree<T> {
        BinaryTree {
            root: Branch(None),
            len: 0,
            cmp,
        }
    }

    /// Returns the number of nodes in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no nodes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparator the tree is ordered by.
    pub const fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    /// Inserts the provided value, descending by comparison until a free branch is found. A value
    /// comparing equal to one already present is dropped and the tree is left unchanged.
    pub fn add(&mut self, value: T) {
        if self.root.insert(value, &self.cmp, None) {
            self.len += 1;
        }
    }

    /// Inserts every value of `values` in order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    /// Returns true if any node holds a value comparing equal to `value`. This is a full scan of
    /// the tree; see the type-level complexity table.
    pub fn has(&self, value: &T) -> bool {
        self.root.has_value(value, &self.cmp)
    }

    /// Returns the smallest value in the tree, failing with [`EmptyContainer`] if it has no
    /// nodes.
    pub fn min(&self) -> Result<&T, EmptyContainer> {
        self.root.first_value().ok_or(EmptyContainer)
    }

    /// Returns the largest value in the tree, failing with [`EmptyContainer`] if it has no
    /// nodes.
    pub fn max(&self) -> Result<&T, EmptyContainer> {
        self.root.last_value().ok_or(EmptyContainer)
    }

    /// Returns a [`Cursor`] positioned at the root. The cursor borrows the tree, so the tree
    /// cannot be modified while any cursor is alive.
    pub fn iterator(&self) -> Cursor<'_, T> {
        Cursor {
            node: self.root.as_deref().map(NonNull::from),
            _phantom: PhantomData,
        }
    }
}

impl<T> Collection<T> for BinaryTree<T> {
    fn add(&mut self, element: T) {
        BinaryTree::add(self, element);
    }

    fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    fn contains(&self, element: &T) -> bool {
        self.has(element)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        BinaryTree {
            root: self.root.clone_with_parent(None),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("contents", &self.root)
            .field("len", &self.len)
            .finish()
    }
}
