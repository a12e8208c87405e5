//! The ordering contract shared by every container in this crate.
//!
//! A [`Comparator`] is a caller-supplied three-way comparison, stored per container instance. The
//! sign convention is [`Ordering`]: [`Less`](Ordering::Less) orders `a` before `b`,
//! [`Greater`](Ordering::Greater) after, and two elements are treated as equal — for searching,
//! deduplication and set algebra — exactly when the comparator returns
//! [`Equal`](Ordering::Equal).

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// A three-way comparison over `T`, held by each container instance.
///
/// Wraps the comparison function in an [`Rc`], so cloning a Comparator (or a container that owns
/// one) shares the same function rather than duplicating it. Cheap sharing is what lets methods
/// like `filter` and `sub_list` hand their result the comparator of the list they came from.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use ordered_collections::compare::Comparator;
/// let natural = Comparator::<i32>::natural();
/// assert_eq!(natural.compare(&1, &2), Ordering::Less);
///
/// let by_len = Comparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert!(by_len.eq(&"one", &"two"));
/// ```
pub struct Comparator<T>(Rc<dyn Fn(&T, &T) -> Ordering>);

impl<T> Comparator<T> {
    /// Creates a Comparator from any three-way comparison function or closure.
    pub fn new(compare: impl Fn(&T, &T) -> Ordering + 'static) -> Comparator<T> {
        Comparator(Rc::new(compare))
    }

    /// Creates a Comparator using the element type's own [`Ord`] implementation.
    pub fn natural() -> Comparator<T>
    where
        T: Ord + 'static,
    {
        Comparator::new(T::cmp)
    }

    /// Creates a Comparator imposing the opposite order of `self`.
    pub fn reversed(&self) -> Comparator<T>
    where
        T: 'static,
    {
        let inner = Rc::clone(&self.0);
        Comparator(Rc::new(move |a, b| inner(b, a)))
    }

    /// Compares two elements, returning the ordering of `a` relative to `b`.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }

    /// Returns true if the two elements compare as [`Ordering::Equal`].
    ///
    /// This is the equality every container in the crate uses for `contains`, `index_of`,
    /// deduplication and the set operations.
    pub fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Comparator(Rc::clone(&self.0))
    }
}

impl<T> Debug for Comparator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator")
    }
}
