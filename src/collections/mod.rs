//! The container families of this crate.
//!
//! Every container is constructed with a [`Comparator`](crate::compare::Comparator) and built
//! against the capability interfaces in [`traits`]: [`Collection`](traits::Collection) for
//! membership and mutation, [`Iterable`](traits::Iterable) for ordered visitation, and
//! [`List`](traits::List) for the index-addressed sequence types. The binary search tree stands
//! apart — it depends only on the comparator and exposes its own cursor for navigation.

#[cfg(any(feature = "circ", feature = "contiguous"))]
pub(crate) mod raw;

#[cfg(feature = "circ")]
pub mod circular;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "set")]
pub mod set;
#[cfg(feature = "traits")]
pub mod traits;
#[cfg(feature = "tree")]
pub mod tree;
