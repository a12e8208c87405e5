//! A module containing [`LinkedList`], the singly linked list type.

mod iter;
mod linked_list;
mod node;
mod sort;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
