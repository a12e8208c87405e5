//! A module containing [`CircularBuffer`], the fixed-capacity ring buffer.

mod buffer;

pub use buffer::*;
