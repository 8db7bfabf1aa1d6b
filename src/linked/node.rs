use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because dereferencing a Box allows the
// node to be moved back out of the heap when it's unlinked.

/// A pointer to a heap-allocated [`Node`]. A node is owned by exactly one collection, which frees
/// it with [`take_node`](NodeRef::take_node) once it has been unlinked. No NodeRef to a node may
/// be used after that.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_value(value: T) -> NodeRef<T> {
        let node = Box::new(Node {
            value,
            prev: None,
            next: None,
        });
        NodeRef(NonNull::from(Box::leak(node)))
    }

    pub const fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live for as long as its owning collection holds a NodeRef to it.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As above. The owning collection only hands out one reference at a time, through
        // a &mut borrow of itself.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: The node is live, and no reference to its links is held across this write.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: The node is live, and no reference to its links is held across this write.
        unsafe { (*self.0.as_ptr()).next = link }
    }

    /// Frees the node, moving its contents back onto the stack. The node should already be
    /// unlinked from its neighbours.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_value, and the owning collection drops
        // every NodeRef to this node along with the call.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
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

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// Frees every node from `head` onwards.
pub(crate) fn free_chain<T>(head: Link<T>) {
    let mut curr = head;
    while let Some(node) = curr {
        curr = node.next();
        drop(node.take_node());
    }
}
