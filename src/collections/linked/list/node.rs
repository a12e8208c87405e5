use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: This implementation uses Box<T> rather than alloc to allocate space on the heap, because
// Box<T> has the special property that dereferencing it allows a value to be moved out of the
// heap.

/// A copyable pointer to a heap-allocated list node. Liveness is the owning list's
/// responsibility: a NodePtr is valid between `from_node` and the matching `take_node` or
/// `drop_node`.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer refers to a live node; see the type-level contract.
        unsafe { &self.0.as_ref().value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The pointer refers to a live node; see the type-level contract.
        unsafe { &mut self.0.as_mut().value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer refers to a live node; see the type-level contract.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer refers to a live node; see the type-level contract.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Reclaims the node from the heap, moving it (and its value) back into the caller. Every
    /// other copy of this pointer becomes dangling.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by from_node via Box::leak, so reconstructing the Box
        // is sound; ownership of the allocation ends here.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Drops the node in place.
    ///
    /// # Safety
    /// No copy of this pointer may be used afterwards.
    pub unsafe fn drop_node(self) {
        // SAFETY: The pointer was created by from_node via Box::leak, and the caller guarantees
        // this is the last use of it.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
