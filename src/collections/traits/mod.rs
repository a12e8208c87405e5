//! Capability interfaces implemented by the container families.
//!
//! [`Collection`] is the minimal contract (membership, size, mutation), [`Iterable`] adds ordered
//! visitation, and [`List`] extends both with index addressing and ordering-aware operations. The
//! traits are object safe, so heterogeneous code can hold a `&dyn Iterable<T>` without caring
//! which family is behind it — this is also what powers cross-container conversion via the
//! `from_iterable` constructors.

mod collection;
mod iterable;
mod list;

pub use collection::*;
pub use iterable::*;
pub use list::*;
