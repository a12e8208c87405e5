//! A module containing [`Set`], the uniqueness-enforcing wrapper over an
//! [`ArrayList`](crate::collections::contiguous::ArrayList).

mod set;

pub use set::*;
