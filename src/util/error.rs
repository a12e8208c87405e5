use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided index doesn't refer to a live element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The operation needs at least one element, but the collection has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is empty!")
    }
}

impl Error for EmptyContainer {}

/// A bounded buffer has no room for the element being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferFull;

impl Display for BufferFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer is full!")
    }
}

impl Error for BufferFull {}

/// A memory layout would exceed [`isize::MAX`]. Never returned to callers; surfaced as a panic at
/// the allocation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The direction of a tree cursor step.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("parent")]
    Parent,
}

/// The cursor's current node has no neighbor in the requested direction, or the cursor isn't
/// positioned on a node at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchNeighbor {
    pub direction: Direction,
}

impl Display for NoSuchNeighbor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No {} value available from the current position!", self.direction)
    }
}

impl Error for NoSuchNeighbor {}

/// The cursor isn't positioned on a node, e.g. because its tree is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCursor;

impl Display for EmptyCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor is not positioned on a node!")
    }
}

impl Error for EmptyCursor {}

/// Either failure mode of an indexed lookup: the index is out of bounds, or the collection is
/// empty and holds no element at all.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrEmpty {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyContainer(EmptyContainer),
}
