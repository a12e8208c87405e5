use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An untyped backing store for the contiguous containers: an allocation of `cap` slots of `T`
/// with no tracking of which slots are initialized. Callers own element liveness; dropping a
/// RawBuf releases the memory without dropping any elements.
///
/// Zero-sized element types never allocate: the pointer stays dangling and the capacity reports
/// as unbounded, so growth logic built on top of this type never triggers for them.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a buffer with no capacity and no allocation.
    pub const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer with capacity for exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if the memory layout would have a size that exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RawBuf<T> {
        if size_of::<T>() == 0 || cap == 0 {
            return RawBuf {
                ptr: NonNull::dangling(),
                cap,
                _phantom: PhantomData,
            };
        }

        let layout = Self::make_layout(cap);
        RawBuf {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Returns the capacity in elements. Unbounded for zero-sized element types.
    pub const fn cap(&self) -> usize {
        if size_of::<T>() == 0 { usize::MAX } else { self.cap }
    }

    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Replaces the allocation with one of capacity `new_cap`, moving the first `live` elements
    /// into it.
    ///
    /// The caller must ensure that slots `[0, live)` are initialized, that `live <= new_cap`, and
    /// that any elements it no longer wants have been dropped beforehand — this method only moves
    /// bits and frees the old allocation.
    ///
    /// # Panics
    /// Panics if the new memory layout would have a size that exceeds [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize, live: usize) {
        if size_of::<T>() == 0 {
            self.cap = new_cap;
            return;
        }

        let new = RawBuf::with_cap(new_cap);
        // SAFETY: The caller guarantees the first `live` slots of self are initialized and that
        // live fits within new_cap. The two allocations are distinct, so they cannot overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr(), new.ptr(), live);
        }

        // Dropping the old buffer only deallocates; the elements now live in `new`.
        let _old = mem::replace(self, new);
    }

    fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    fn make_ptr(layout: Layout) -> NonNull<T> {
        // SAFETY: with_cap only builds a layout here for a nonzero element size and capacity, so
        // the layout has a nonzero size.
        let raw = unsafe { alloc::alloc(layout) };
        match NonNull::new(raw.cast()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if size_of::<T>() != 0 && self.cap != 0 {
            // SAFETY: The pointer was allocated by the global allocator with this exact layout,
            // and element drops are the owning container's responsibility.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap));
            }
        }
    }
}
