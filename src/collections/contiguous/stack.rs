use std::fmt::{self, Debug, Formatter};

use super::ArrayList;
use crate::collections::traits::{Collection, Iterable};
use crate::compare::Comparator;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// A LIFO stack over an [`ArrayList`], reusing its storage and growth policy. Elements are pushed
/// and popped at the back, so both operations are amortized `O(1)`.
pub struct Stack<T> {
    elements: ArrayList<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new(cmp: Comparator<T>) -> Stack<T> {
        Stack {
            elements: ArrayList::new(cmp),
        }
    }

    /// Creates a Stack by pushing a clone of every element of `source`, visited in the source's
    /// natural order — so the source's last element ends up on top.
    pub fn from_iterable(source: &dyn Iterable<T>, cmp: Comparator<T>) -> Stack<T>
    where
        T: Clone,
    {
        let mut stack = Stack::new(cmp);
        source.for_each(&mut |element, _| stack.push(element.clone()));
        stack
    }

    /// Pushes the provided element onto the top of the stack.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes and returns the top element, failing with [`EmptyContainer`] if the stack holds
    /// nothing.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.elements.pop().ok_or(EmptyContainer)
    }

    /// Returns the top element without removing it, failing with [`EmptyContainer`] if the stack
    /// holds nothing.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.elements.last().ok_or(EmptyContainer)
    }

    /// Returns the number of elements on the stack.
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the stack holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Collection<T> for Stack<T> {
    fn add(&mut self, element: T) {
        self.push(element);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Iterable<T> for Stack<T> {
    fn for_each(&self, visit: &mut dyn FnMut(&T, usize)) {
        self.elements.for_each(visit);
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.index_of(element)
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &&*self.elements)
            .finish()
    }
}
