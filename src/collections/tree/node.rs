use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::compare::Comparator;

/// An optional edge to a subtree. Children are owned through [`Box`], so node addresses are
/// stable for as long as the node is in the tree; parent edges are raw back-pointers into those
/// allocations.
pub(crate) struct Branch<T>(pub Option<Box<TreeNode<T>>>);

pub(crate) struct TreeNode<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub parent: Option<NonNull<TreeNode<T>>>,
    pub value: T,
}

impl<T> Branch<T> {
    /// Inserts `value` below this branch, keeping the search order of `cmp`. A value comparing
    /// equal to one already present is dropped. Returns true if a node was created.
    ///
    /// `parent` is the node this branch hangs off, [`None`] only at the root.
    pub fn insert(
        &mut self,
        value: T,
        cmp: &Comparator<T>,
        parent: Option<NonNull<TreeNode<T>>>,
    ) -> bool {
        match &mut self.0 {
            Some(node) => {
                let node_ptr = NonNull::from(&mut **node);
                match cmp.compare(&node.value, &value) {
                    Ordering::Less => node.right.insert(value, cmp, Some(node_ptr)),
                    Ordering::Greater => node.left.insert(value, cmp, Some(node_ptr)),
                    Ordering::Equal => false,
                }
            },
            None => {
                self.0 = Some(Box::new(TreeNode {
                    left: Branch(None),
                    right: Branch(None),
                    parent,
                    value,
                }));
                true
            },
        }
    }

    /// Returns true if any node of this subtree holds a value comparing equal to `value`.
    ///
    /// Both children are visited regardless of the search order, so this is a full `O(n)` scan
    /// rather than a guided descent.
    pub fn has_value(&self, value: &T, cmp: &Comparator<T>) -> bool {
        match &self.0 {
            Some(node) => {
                cmp.eq(&node.value, value)
                    || node.left.has_value(value, cmp)
                    || node.right.has_value(value, cmp)
            },
            None => false,
        }
    }

    /// Returns the leftmost value of this subtree, if it has any nodes.
    pub fn first_value(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first_value() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    /// Returns the rightmost value of this subtree, if it has any nodes.
    pub fn last_value(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.right.last_value() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    /// Deep-clones this subtree, rebuilding the parent edges to point into the new allocations.
    pub fn clone_with_parent(&self, parent: Option<NonNull<TreeNode<T>>>) -> Branch<T>
    where
        T: Clone,
    {
        match &self.0 {
            Some(node) => {
                let mut new = Box::new(TreeNode {
                    left: Branch(None),
                    right: Branch(None),
                    parent,
                    value: node.value.clone(),
                });
                let new_ptr = NonNull::from(&mut *new);
                new.left = node.left.clone_with_parent(Some(new_ptr));
                new.right = node.right.clone_with_parent(Some(new_ptr));
                Branch(Some(new))
            },
            None => Branch(None),
        }
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<TreeNode<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(f, "({:?} {:?} {:?})", node.left, node.value, node.right),
            None => f.write_str("-"),
        }
    }
}
