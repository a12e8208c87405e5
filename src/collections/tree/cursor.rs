use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{BinaryTree, TreeNode};
#[doc(inline)]
pub use crate::util::error::{Direction, EmptyCursor, NoSuchNeighbor};

/// A navigation handle over a [`BinaryTree`], stepping along its edges: down to either child or
/// up to the parent. Obtained from [`BinaryTree::iterator`], positioned at the root.
///
/// Every step returns the value arrived at, and a failed step — asking for a neighbor that
/// doesn't exist — leaves the position unchanged. On a tree with no nodes the cursor holds no
/// position at all, and every step fails.
///
/// The cursor borrows its tree, so the borrow checker prevents the tree from being modified (and
/// its nodes from moving or being freed) while a cursor is alive.
pub struct Cursor<'a, T> {
    pub(crate) node: Option<NonNull<TreeNode<T>>>,
    pub(crate) _phantom: PhantomData<&'a BinaryTree<T>>,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the value at the current position, failing with [`EmptyCursor`] if the tree has no
    /// nodes.
    pub fn current(&self) -> Result<&'a T, EmptyCursor> {
        match self.node_ref() {
            Some(node) => Ok(&node.value),
            None => Err(EmptyCursor),
        }
    }

    /// Returns true if the current node has a left child.
    pub fn has_left(&self) -> bool {
        self.node_ref().is_some_and(|node| node.left.is_some())
    }

    /// Returns true if the current node has a right child.
    pub fn has_right(&self) -> bool {
        self.node_ref().is_some_and(|node| node.right.is_some())
    }

    /// Returns true if the current node has a parent, i.e. isn't the root.
    pub fn has_parent(&self) -> bool {
        self.node_ref().is_some_and(|node| node.parent.is_some())
    }

    /// Steps to the left child and returns its value. Fails — leaving the position unchanged —
    /// if there is no left child.
    pub fn left(&mut self) -> Result<&'a T, NoSuchNeighbor> {
        match self.node_ref().and_then(|node| node.left.as_deref()) {
            Some(child) => {
                self.node = Some(NonNull::from(child));
                Ok(&child.value)
            },
            None => Err(NoSuchNeighbor {
                direction: Direction::Left,
            }),
        }
    }

    /// Steps to the right child and returns its value. Fails — leaving the position unchanged —
    /// if there is no right child.
    pub fn right(&mut self) -> Result<&'a T, NoSuchNeighbor> {
        match self.node_ref().and_then(|node| node.right.as_deref()) {
            Some(child) => {
                self.node = Some(NonNull::from(child));
                Ok(&child.value)
            },
            None => Err(NoSuchNeighbor {
                direction: Direction::Right,
            }),
        }
    }

    /// Steps to the parent and returns its value. Fails — leaving the position unchanged — if
    /// the current node is the root.
    pub fn parent(&mut self) -> Result<&'a T, NoSuchNeighbor> {
        match self.node_ref().and_then(|node| node.parent) {
            Some(parent) => {
                self.node = Some(parent);
                // SAFETY: Parent edges point at live nodes of the tree this cursor borrows.
                Ok(unsafe { &(*parent.as_ptr()).value })
            },
            None => Err(NoSuchNeighbor {
                direction: Direction::Parent,
            }),
        }
    }

    fn node_ref(&self) -> Option<&'a TreeNode<T>> {
        // SAFETY: The cursor borrows its tree for 'a, nodes are heap-allocated behind Box, and
        // the borrow prevents any mutation, so the node outlives the cursor.
        self.node.map(|node| unsafe { &*node.as_ptr() })
    }
}
