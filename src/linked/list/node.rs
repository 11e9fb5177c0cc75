use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a heap-allocated list node.
///
/// Nodes are allocated through [`NodeRef::alloc`] and released through exactly one matching
/// [`NodeRef::take_node`] call. The handle itself carries no ownership — the list's link
/// structure decides which handle is responsible for freeing a node — which is what lets `prev`
/// and `next` point at the same nodes without forming an ownership cycle.
pub(crate) struct NodeRef<T>(NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> NodeRef<T> {
    /// Moves a fresh node holding `value` to the heap and returns a handle to it.
    pub fn alloc(value: T, prev: Link<T>, next: Link<T>) -> NodeRef<T> {
        let node = Box::new(Node { value, prev, next });
        // SAFETY: Box::into_raw never returns a null pointer.
        NodeRef(unsafe { NonNull::new_unchecked(Box::into_raw(node)) })
    }

    /// Reclaims the heap allocation, moving the node out of it.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer originates from Box::into_raw in alloc, and the list structure
        // routes every node through exactly one take_node call.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node stays allocated for as long as any link in the list reaches it.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value; the caller holds the list mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value; link surgery happens under a mutable list borrow.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value; link surgery happens under a mutable list borrow.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
