/// The minimal contract every container in this crate satisfies.
///
/// Equality for [`contains`](Collection::contains) is defined by the container's own
/// [`Comparator`](crate::compare::Comparator) — two elements match when the comparator returns
/// [`Equal`](std::cmp::Ordering::Equal), regardless of any [`PartialEq`] the element type may
/// implement.
pub trait Collection<T> {
    /// Appends the provided element to the collection.
    ///
    /// Individual implementors decide what "append" means: lists keep every element, a set drops
    /// elements that compare equal to one it already holds, a tree places the element by order.
    fn add(&mut self, element: T);

    /// Removes every element, resetting the collection to its empty state.
    fn clear(&mut self);

    /// Returns true if at least one element compares equal to `element` under the collection's
    /// comparator.
    fn contains(&self, element: &T) -> bool;

    /// Returns true if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;
}
