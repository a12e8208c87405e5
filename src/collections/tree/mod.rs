//! A module containing [`BinaryTree`], the unbalanced binary search tree, and [`Cursor`], its
//! navigation handle.

mod binary_tree;
mod cursor;
mod node;
mod tests;

pub use binary_tree::*;
pub use cursor::*;
pub(crate) use node::*;
