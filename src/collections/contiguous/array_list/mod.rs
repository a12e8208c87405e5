//! A module containing [`ArrayList`], the contiguous list type.
//!
//! ArrayList implements [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), so all of the
//! borrowed iteration and slice accessors come for free; only the operations that interact with
//! the comparator, the growth policy or ownership are written by hand.

mod array_list;
mod tests;

pub use array_list::*;
