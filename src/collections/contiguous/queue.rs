use std::fmt::{self, Debug, Formatter};

use super::ArrayList;
use crate::collections::traits::{Collection, Iterable};
use crate::compare::Comparator;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// A FIFO queue over an [`ArrayList`], reusing its storage and growth policy. Enqueues append at
/// the back in amortized `O(1)`; dequeues remove at the front and shift the remaining elements,
/// so they are `O(n)`.
pub struct Queue<T> {
    elements: ArrayList<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new(cmp: Comparator<T>) -> Queue<T> {
        Queue {
            elements: ArrayList::new(cmp),
        }
    }

    /// Creates a Queue by enqueueing a clone of every element of `source`, visited in the
    /// source's natural order.
    pub fn from_iterable(source: &dyn Iterable<T>, cmp: Comparator<T>) -> Queue<T>
    where
        T: Clone,
    {
        let mut queue = Queue::new(cmp);
        source.for_each(&mut |element, _| queue.enqueue(element.clone()));
        queue
    }

    /// Appends the provided element to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes and returns the front element, failing with [`EmptyContainer`] if the queue holds
    /// nothing.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.elements.take_at(0).ok_or(EmptyContainer)
    }

    /// Returns the front element without removing it, failing with [`EmptyContainer`] if the
    /// queue holds nothing.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.elements.first().ok_or(EmptyContainer)
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the queue holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Collection<T> for Queue<T> {
    fn add(&mut self, element: T) {
        self.enqueue(element);
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

impl<T> Iterable<T> for Queue<T> {
    fn for_each(&self, visit: &mut dyn FnMut(&T, usize)) {
        self.elements.for_each(visit);
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.index_of(element)
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &&*self.elements)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new(Comparator::natural());
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Ok(1), "Dequeue should return the oldest element.");
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.peek(), Ok(&3));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Err(EmptyContainer));
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: Queue<u8> = Queue::new(Comparator::natural());
        assert_eq!(queue.peek(), Err(EmptyContainer));
        assert_eq!(queue.dequeue(), Err(EmptyContainer));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_from_iterable_preserves_order() {
        let mut list = ArrayList::new(Comparator::natural());
        list.add_all([10, 20, 30]);

        let mut queue = Queue::from_iterable(&list, Comparator::natural());
        assert_eq!(queue.dequeue(), Ok(10), "Conversion should keep the source order.");
        assert_eq!(queue.dequeue(), Ok(20));
    }
}
