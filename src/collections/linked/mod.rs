//! Linked collection types: [`LinkedList`], a singly linked list sorted by recursive merge sort.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
