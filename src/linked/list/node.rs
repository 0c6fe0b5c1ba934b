use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box rather than raw alloc calls, because Box has the special
// property that dereferencing it allows a value to be moved off the heap.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: NodePtr always wraps a live allocation; the caller constrains the returned
        // lifetime to the list that owns the node.
        unsafe { &(self.0.as_ref()).value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As above, with the additional requirement that the caller holds unique access
        // to the owning list.
        unsafe { &mut (self.0.as_mut()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: See value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: See value_mut.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: See value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: See value_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node off the heap, releasing its allocation. All other pointers to this node are
    /// dangling afterwards.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was produced by from_node and has not been freed, since doing so
        // requires this method, which consumes the NodePtr.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn as_ptr(self) -> *mut Node<T> {
        self.0.as_ptr()
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
    pub prev: Link<T>,
    pub next: Link<T>,
}
