use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::raw::RawBuf;
use crate::collections::traits::{Collection, Iterable, List, SubList};
use crate::compare::Comparator;
use crate::util::error::CapacityOverflow;
#[doc(inline)]
pub use crate::util::error::{IndexOrEmpty, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The factor applied to `cap + requested` when the backing store must grow.
const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous list, ordered and searched by a caller-supplied
/// [`Comparator`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `take_at` / `remove_at` | `O(n-i)` |
/// | `replace_at` | `O(1)` |
/// | `contains` / `index_of` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `sort` | `O(n log n)` |
///
/// \* If the ArrayList doesn't have capacity for the new element, `push` takes `O(n)`.
pub struct ArrayList<T> {
    buf: RawBuf<T>,
    len: usize,
    cmp: Comparator<T>,
}

impl<T> ArrayList<T> {
    /// Creates a new ArrayList with length and capacity 0. Memory will be allocated on the first
    /// push.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::contiguous::ArrayList;
    /// # use ordered_collections::compare::Comparator;
    /// let list: ArrayList<u8> = ArrayList::new(Comparator::natural());
    /// assert_eq!(list.len(), 0);
    /// ```
    pub const fn new(cmp: Comparator<T>) -> ArrayList<T> {
        ArrayList {
            buf: RawBuf::new(),
            len: 0,
            cmp,
        }
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value, allowing that
    /// many elements to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout would have a size that exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize, cmp: Comparator<T>) -> ArrayList<T> {
        ArrayList {
            buf: RawBuf::with_cap(cap),
            len: 0,
            cmp,
        }
    }

    /// Creates an ArrayList holding a clone of every element of `source`, visited in the source's
    /// natural order.
    pub fn from_iterable(source: &dyn Iterable<T>, cmp: Comparator<T>) -> ArrayList<T>
    where
        T: Clone,
    {
        let mut list = ArrayList::new(cmp);
        source.for_each(&mut |element, _| list.push(element.clone()));
        list
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the backing store. For zero-sized element types the
    /// capacity is unbounded.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the comparator this list orders and searches by.
    pub const fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    /// Pushes the provided element onto the end of the ArrayList, growing the backing store first
    /// if it is at capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push(&mut self, element: T) {
        self.grow_for(1);
        // SAFETY: grow_for guarantees cap > len, so the slot one past the last live element is
        // within the allocation.
        unsafe {
            self.buf.ptr().add(self.len).write(element);
        }
        self.len += 1;
    }

    /// Appends every element of `elements` in order. The iterator's exact size lets the backing
    /// store grow once, up front, for the whole batch.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds
    /// [`isize::MAX`].
    pub fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = elements.into_iter();
        self.grow_for(elements.len());
        for element in elements {
            self.push(element);
        }
    }

    /// Pops the last element off the end of the ArrayList, returning an owned value if the list
    /// isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: len has just been decremented, so it indexes the previously-last live element;
        // the bitwise read moves the value out and the slot is no longer considered live.
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Moves the element at `index` out of the list, shifting all following elements one position
    /// towards the front. Returns [`None`] — without mutating anything — if `index` is out of
    /// bounds.
    pub fn take_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the slot is live. The copy shifts the remaining live elements
        // left over the vacated slot, after which the final slot is treated as dead.
        unsafe {
            let slot = self.buf.ptr().add(index);
            let element = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Some(element)
        }
    }

    /// Removes the first element comparing equal to `element` under the list's comparator.
    /// Returns true if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => self.take_at(index).is_some(),
            None => false,
        }
    }

    /// Grows the backing store so that `extra` more elements fit. Growth reallocates to
    /// `GROWTH_FACTOR * (cap + extra)`; if the current capacity already exceeds `len + extra`,
    /// nothing happens.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds
    /// [`isize::MAX`].
    fn grow_for(&mut self, extra: usize) {
        let needed = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        if self.buf.cap() <= needed {
            let new_cap = self
                .buf
                .cap()
                .checked_add(extra)
                .and_then(|cap| cap.checked_mul(GROWTH_FACTOR))
                .ok_or(CapacityOverflow)
                .throw();
            self.buf.realloc(new_cap, self.len);
        }
    }
}

impl<T> Collection<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        self.push(element);
    }

    fn clear(&mut self) {
        // SAFETY: Exactly the live range [0, len) is dropped, once, before the allocation is
        // released by replacing the buffer.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
        self.len = 0;
        self.buf = RawBuf::new();
    }

    fn contains(&self, element: &T) -> bool {
        self.iter().any(|value| self.cmp.eq(value, element))
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Iterable<T> for ArrayList<T> {
    fn for_each(&self, visit: &mut dyn FnMut(&T, usize)) {
        for (index, element) in self.iter().enumerate() {
            visit(element, index);
        }
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|value| self.cmp.eq(element, value))
    }
}

impl<T> List<T> for ArrayList<T> {
    fn at(&self, index: usize) -> Result<&T, IndexOrEmpty> {
        match self.get(index) {
            Some(element) => Ok(element),
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
        match self.get_mut(index) {
            Some(slot) => {
                *slot = element;
                true
            },
            None => false,
        }
    }

    fn sort(&mut self) {
        let cmp = self.cmp.clone();
        (**self).sort_unstable_by(|a, b| cmp.compare(a, b));
    }

    fn reverse(&mut self) {
        (**self).reverse();
    }

    fn some(&self, predicate: &mut dyn FnMut(&T, usize) -> bool) -> bool {
        let mut result = false;
        for (index, element) in self.iter().enumerate() {
            result = result || predicate(element, index);
        }
        result
    }

    fn filter(&self, predicate: &mut dyn FnMut(&T) -> bool) -> ArrayList<T>
    where
        T: Clone,
    {
        let mut list = ArrayList::new(self.cmp.clone());
        for element in self.iter() {
            if predicate(element) {
                list.push(element.clone());
            }
        }
        list
    }

    fn sub_list(&self, start: usize, end: usize) -> SubList<'_, ArrayList<T>>
    where
        T: Clone,
    {
        if start > self.len || end > self.len || start > end {
            return SubList::Whole(self);
        }

        let mut list = ArrayList::with_cap(end - start, self.cmp.clone());
        for element in &self[start..end] {
            list.push(element.clone());
        }
        SubList::Range(list)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow_for(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // SAFETY: All slots below len are live and dropped exactly once; the backing buffer's own
        // drop only deallocates.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The pointer is nonnull and properly aligned (dangling but aligned when cap is
        // 0), all slots below len are initialized, and the borrow checker prevents mutation for
        // the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, with exclusive access guaranteed by the &mut receiver.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList::with_cap(self.len, self.cmp.clone());
        for (index, element) in self.iter().enumerate() {
            // SAFETY: The new list was allocated with capacity for every element being cloned;
            // len is kept in step so a panicking clone drops only what was written.
            unsafe {
                list.buf.ptr().add(index).write(element.clone());
            }
            list.len = index + 1;
        }
        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
