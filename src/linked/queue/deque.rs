use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{DequeueHeadStatus, DequeueTailStatus, GetHeadStatus, GetTailStatus};
use crate::linked::{Iter, Link, NodeRef, free_chain};

/// A double-ended queue, which accepts and yields values at both its head and its tail.
///
/// Reading or removing from an empty Deque doesn't panic. The outcome is recorded instead, and can
/// be read back with [`get_head_status`](Deque::get_head_status),
/// [`get_tail_status`](Deque::get_tail_status),
/// [`dequeue_head_status`](Deque::dequeue_head_status) and
/// [`dequeue_tail_status`](Deque::dequeue_tail_status).
///
/// # Examples
/// ```
/// # use status_adt::linked::Deque;
/// # use status_adt::linked::queue::DequeueTailStatus;
/// let mut deque = Deque::new();
/// deque.enqueue_tail(2);
/// deque.enqueue_head(1);
/// assert_eq!(deque.get_head(), Some(&1));
/// assert_eq!(deque.dequeue_tail(), Some(2));
/// assert_eq!(deque.dequeue_tail(), Some(1));
/// assert_eq!(deque.dequeue_tail(), None);
/// assert_eq!(deque.dequeue_tail_status(), DequeueTailStatus::Empty);
/// ```
pub struct Deque<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    get_head_status: Cell<GetHeadStatus>,
    get_tail_status: Cell<GetTailStatus>,
    dequeue_head_status: DequeueHeadStatus,
    dequeue_tail_status: DequeueTailStatus,
    _phantom: PhantomData<T>,
}

impl<T> Deque<T> {
    /// Creates a new, empty Deque.
    pub const fn new() -> Deque<T> {
        Deque {
            head: None,
            tail: None,
            len: 0,
            get_head_status: Cell::new(GetHeadStatus::Nil),
            get_tail_status: Cell::new(GetTailStatus::Nil),
            dequeue_head_status: DequeueHeadStatus::Nil,
            dequeue_tail_status: DequeueTailStatus::Nil,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values in the Deque.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Deque contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` in front of the head.
    pub fn enqueue_head(&mut self, value: T) {
        let node = NodeRef::from_value(value);
        match self.head {
            Some(head) => {
                head.set_prev(Some(node));
                node.set_next(Some(head));
            },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds `value` behind the tail.
    pub fn enqueue_tail(&mut self, value: T) {
        let node = NodeRef::from_value(value);
        match self.tail {
            Some(tail) => {
                tail.set_next(Some(node));
                node.set_prev(Some(tail));
            },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Returns a reference to the value at the head, or None (recording
    /// [`GetHeadStatus::Empty`]) if the Deque is empty.
    pub fn get_head(&self) -> Option<&T> {
        let value = self.head.map(NodeRef::value);
        self.get_head_status.set(match value {
            Some(_) => GetHeadStatus::Ok,
            None => GetHeadStatus::Empty,
        });
        value
    }

    /// Returns a reference to the value at the tail, or None (recording
    /// [`GetTailStatus::Empty`]) if the Deque is empty.
    pub fn get_tail(&self) -> Option<&T> {
        let value = self.tail.map(NodeRef::value);
        self.get_tail_status.set(match value {
            Some(_) => GetTailStatus::Ok,
            None => GetTailStatus::Empty,
        });
        value
    }

    /// Removes and returns the value at the head, or None (recording
    /// [`DequeueHeadStatus::Empty`]) if the Deque is empty.
    pub fn dequeue_head(&mut self) -> Option<T> {
        let Some(head) = self.head else {
            self.dequeue_head_status = DequeueHeadStatus::Empty;
            return None;
        };

        let node = head.take_node();
        self.head = node.next;
        match node.next {
            Some(next) => next.set_prev(None),
            None => self.tail = None,
        }
        self.len -= 1;

        self.dequeue_head_status = DequeueHeadStatus::Ok;
        Some(node.value)
    }

    /// Removes and returns the value at the tail, or None (recording
    /// [`DequeueTailStatus::Empty`]) if the Deque is empty.
    pub fn dequeue_tail(&mut self) -> Option<T> {
        let Some(tail) = self.tail else {
            self.dequeue_tail_status = DequeueTailStatus::Empty;
            return None;
        };

        let node = tail.take_node();
        self.tail = node.prev;
        match node.prev {
            Some(prev) => prev.set_next(None),
            None => self.head = None,
        }
        self.len -= 1;

        self.dequeue_tail_status = DequeueTailStatus::Ok;
        Some(node.value)
    }

    /// Removes every value from the Deque and resets all statuses to `Nil`.
    pub fn clear(&mut self) {
        *self = Deque::new();
    }

    /// Returns an iterator over the values in the Deque, from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the outcome of the last call to [`get_head`](Deque::get_head).
    pub fn get_head_status(&self) -> GetHeadStatus {
        self.get_head_status.get()
    }

    /// Returns the outcome of the last call to [`get_tail`](Deque::get_tail).
    pub fn get_tail_status(&self) -> GetTailStatus {
        self.get_tail_status.get()
    }

    /// Returns the outcome of the last call to [`dequeue_head`](Deque::dequeue_head).
    pub const fn dequeue_head_status(&self) -> DequeueHeadStatus {
        self.dequeue_head_status
    }

    /// Returns the outcome of the last call to [`dequeue_tail`](Deque::dequeue_tail).
    pub const fn dequeue_tail_status(&self) -> DequeueTailStatus {
        self.dequeue_tail_status
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.head, self.len)
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        for value in iter {
            deque.enqueue_tail(value);
        }
        deque
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        free_chain(self.head);
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
