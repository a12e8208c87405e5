use std::fmt::{self, Debug, Formatter};
use std::slice;

use crate::collections::contiguous::ArrayList;
use crate::collections::traits::{Collection, Iterable, List};
use crate::compare::Comparator;
#[doc(inline)]
pub use crate::util::error::IndexOrEmpty;

/// A collection holding at most one occurrence of each value, where "each value" is decided by
/// the set's [`Comparator`]: two elements belong to the same occurrence exactly when they compare
/// equal.
///
/// Storage is delegated to an [`ArrayList`], so elements keep their insertion order and can be
/// read back by index. Every insertion scans for an existing equal element first, making `add`
/// `O(n)` and bulk construction `O(n²)`.
pub struct Set<T> {
    elements: ArrayList<T>,
}

impl<T> Set<T> {
    /// Creates a new Set with no elements.
    pub const fn new(cmp: Comparator<T>) -> Set<T> {
        Set {
            elements: ArrayList::new(cmp),
        }
    }

    /// Creates a Set from a clone of every element of `source`, visited in the source's natural
    /// order. Duplicates under the comparator are dropped, keeping the first occurrence.
    pub fn from_iterable(source: &dyn Iterable<T>, cmp: Comparator<T>) -> Set<T>
    where
        T: Clone,
    {
        let mut set = Set::new(cmp);
        source.for_each(&mut |element, _| {
            set.insert(element.clone());
        });
        set
    }

    /// Adds the provided element, unless an element comparing equal to it is already present — in
    /// which case the new element is dropped. Returns true if the set grew.
    pub fn insert(&mut self, element: T) -> bool {
        if self.elements.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Inserts every element of `elements` in order, dropping duplicates.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.insert(element);
        }
    }

    /// Removes the element comparing equal to `element`, if one is present. Returns true if an
    /// element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    /// Returns a reference to the element at `index`, in insertion order.
    pub fn at(&self, index: usize) -> Result<&T, IndexOrEmpty> {
        self.elements.at(index)
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the comparator deciding element uniqueness.
    pub const fn comparator(&self) -> &Comparator<T> {
        self.elements.comparator()
    }

    /// Returns a borrowed iterator over the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the set difference `self \ other`: a new set of the elements of `self` absent
    /// from `other`.
    pub fn diff(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        Set {
            elements: self.elements.filter(&mut |element| !other.contains(element)),
        }
    }

    /// Returns the intersection `self ∩ other`: a new set of the elements present in both.
    pub fn intersection(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        Set {
            elements: self.elements.filter(&mut |element| other.contains(element)),
        }
    }

    /// Returns the *symmetric difference* of the two sets: the elements of `self` absent from
    /// `other`, followed by the elements of `other` absent from `self`. Elements present in both
    /// are excluded.
    ///
    /// The name is historical — callers of the interface this type replicates rely on `union`
    /// behaving this way, so it is kept rather than corrected to the mathematical union.
    pub fn union(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let mut result = self.diff(other);
        for element in other.iter() {
            if !self.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns true if every element of `other` is contained in `self`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        other.iter().all(|element| self.contains(element))
    }

    /// Returns true if every element of `collection` — any [`Iterable`] — is contained in
    /// `self`.
    pub fn contains_all(&self, collection: &dyn Iterable<T>) -> bool {
        let mut result = true;
        collection.for_each(&mut |element, _| result = result && self.contains(element));
        result
    }

    /// Returns true if an element comparing equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }
}

impl<T> Collection<T> for Set<T> {
    fn add(&mut self, element: T) {
        self.insert(element);
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

impl<T> Iterable<T> for Set<T> {
    fn for_each(&self, visit: &mut dyn FnMut(&T, usize)) {
        self.elements.for_each(visit);
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.index_of(element)
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Set {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field("contents", &&*self.elements)
            .finish()
    }
}
