use derive_more::IsVariant;

use super::{Collection, Iterable};
#[doc(inline)]
pub use crate::util::error::{EmptyContainer, IndexOrEmpty, IndexOutOfBounds};

/// An index-addressed sequence with ordering-aware operations, implemented by both the contiguous
/// and the linked list families.
pub trait List<T>: Collection<T> + Iterable<T> {
    /// Returns a reference to the element at `index`.
    ///
    /// Fails with [`IndexOutOfBounds`] when `index >= len`; a linked list with no nodes at all
    /// reports [`EmptyContainer`] instead, since there is no valid index whatsoever.
    fn at(&self, index: usize) -> Result<&T, IndexOrEmpty>;

    /// Removes the element at `index`, shifting all following elements one position towards the
    /// front. Returns false — without mutating anything — if `index` is out of bounds.
    fn remove_at(&mut self, index: usize) -> bool;

    /// Overwrites the element at `index` with `element`, dropping the previous value. Returns
    /// false — and drops nothing — if `index` is out of bounds.
    fn replace_at(&mut self, index: usize, element: T) -> bool;

    /// Sorts the list in place, ascending per its comparator. No stability guarantee is made.
    fn sort(&mut self);

    /// Reverses the list in place.
    fn reverse(&mut self);

    /// Folds `predicate` over every element with a logical OR: returns true if the predicate
    /// holds for at least one element. The predicate stops being invoked once it has returned
    /// true, but the fold itself never errors or exits early.
    fn some(&self, predicate: &mut dyn FnMut(&T, usize) -> bool) -> bool;

    /// Returns a new list, sharing this list's comparator, containing a clone of every element
    /// for which `predicate` returns true, in order.
    fn filter(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Self
    where
        Self: Sized,
        T: Clone;

    /// Returns the sub-list covering the half-open range `[start, end)`.
    ///
    /// The range is invalid if `start > len`, `end > len`, or `start > end`. An invalid range
    /// does not produce an error: the result is *the list itself*, returned by reference as
    /// [`SubList::Whole`]. A valid range clones the covered elements into a new list returned as
    /// [`SubList::Range`].
    fn sub_list(&self, start: usize, end: usize) -> SubList<'_, Self>
    where
        Self: Sized,
        T: Clone;
}

/// The result of [`List::sub_list`]: either a freshly built list over the requested range, or —
/// for an invalid range — the original list instance itself.
#[derive(Debug, IsVariant)]
pub enum SubList<'a, L> {
    /// The requested range was invalid; the result is the original list, untouched.
    Whole(&'a L),
    /// The elements of a valid `[start, end)` range, in a new list.
    Range(L),
}

impl<L> SubList<'_, L> {
    /// Borrows the resulting list, whichever variant holds it.
    pub fn as_list(&self) -> &L {
        match self {
            SubList::Whole(list) => list,
            SubList::Range(list) => list,
        }
    }

    /// Returns the new list for a valid range, or [`None`] if the range was invalid.
    pub fn into_range(self) -> Option<L> {
        match self {
            SubList::Whole(_) => None,
            SubList::Range(list) => Some(list),
        }
    }
}
