//! Contiguous collection types, all built over a single growable backing store: [`ArrayList`],
//! the index-addressed list, plus the thin [`Stack`] and [`Queue`] wrappers that reuse its
//! storage and growth policy.

pub mod array_list;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use array_list::ArrayList;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
