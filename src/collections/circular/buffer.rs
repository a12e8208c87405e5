use std::fmt::{self, Debug, Formatter};

use crate::collections::raw::RawBuf;
#[doc(inline)]
pub use crate::util::error::{BufferFull, EmptyContainer};

/// A fixed-capacity FIFO ring buffer. The capacity is chosen at construction and never changes:
/// writing to a full buffer is an error rather than a reallocation, which makes every operation
/// `O(1)` with no amortization.
///
/// Unlike the list types, a CircularBuffer carries no comparator — it supports no searching, only
/// writing at one end and reading at the other.
pub struct CircularBuffer<T> {
    buf: RawBuf<T>,
    cap: usize,
    read: usize,
    write: usize,
    full: bool,
}

impl<T> CircularBuffer<T> {
    /// Creates a new CircularBuffer with capacity for exactly `cap` elements.
    ///
    /// A capacity of 0 is permitted but produces a buffer that is permanently both empty and
    /// unable to accept writes.
    ///
    /// # Panics
    /// Panics if the memory layout would have a size that exceeds [`isize::MAX`].
    pub fn new(cap: usize) -> CircularBuffer<T> {
        CircularBuffer {
            buf: RawBuf::with_cap(cap),
            cap,
            read: 0,
            write: 0,
            full: false,
        }
    }

    /// Writes the provided element at the write pointer, failing with [`BufferFull`] — and
    /// dropping nothing — if the buffer has no free slot.
    pub fn enqueue(&mut self, element: T) -> Result<(), BufferFull> {
        if self.full || self.cap == 0 {
            return Err(BufferFull);
        }

        // SAFETY: The buffer isn't full, so the slot at the write pointer is dead; the write
        // pointer is kept below cap by the wrapping step below.
        unsafe {
            self.buf.ptr().add(self.write).write(element);
        }
        self.write = (self.write + 1) % self.cap;
        if self.write == self.read {
            self.full = true;
        }
        Ok(())
    }

    /// Removes and returns the element at the read pointer, failing with [`EmptyContainer`] if
    /// the buffer holds nothing.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        // SAFETY: The buffer isn't empty, so the slot at the read pointer is live; the read moves
        // the value out and advancing the pointer marks the slot dead.
        let element = unsafe { self.buf.ptr().add(self.read).read() };
        self.read = (self.read + 1) % self.cap;
        self.full = false;
        Ok(element)
    }

    /// Returns the element at the read pointer without removing it, failing with
    /// [`EmptyContainer`] if the buffer holds nothing.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        // SAFETY: The buffer isn't empty, so the slot at the read pointer is live, and the
        // returned borrow ties it to &self.
        Ok(unsafe { &*self.buf.ptr().add(self.read) })
    }

    /// Returns the number of live elements in the buffer.
    pub const fn len(&self) -> usize {
        if self.full {
            self.cap
        } else if self.write >= self.read {
            self.write - self.read
        } else {
            self.cap - self.read + self.write
        }
    }

    /// Returns the fixed capacity the buffer was created with.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if the buffer holds no elements.
    pub const fn is_empty(&self) -> bool {
        !self.full && self.read == self.write
    }

    /// Returns true if the buffer has no free slot.
    pub const fn is_full(&self) -> bool {
        self.full
    }
}

impl<T> Drop for CircularBuffer<T> {
    fn drop(&mut self) {
        // Walks the live range from the read pointer, wrapping; the backing buffer's own drop
        // only deallocates.
        for offset in 0..self.len() {
            let index = (self.read + offset) % self.cap;
            // SAFETY: Every index within len of the read pointer (mod cap) is live, and each is
            // dropped exactly once.
            unsafe {
                self.buf.ptr().add(index).drop_in_place();
            }
        }
    }
}

impl<T: Debug> Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("len", &self.len())
            .field("cap", &self.cap)
            .field("full", &self.full)
            .finish()
    }
}
