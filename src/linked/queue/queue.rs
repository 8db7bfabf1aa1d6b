use std::fmt::{self, Debug, Formatter};

use super::{Deque, DequeueStatus, GetHeadStatus};
use crate::linked::Iter;

/// A first-in first-out queue, stored in a [`Deque`] which only accepts values at its tail and
/// only yields them from its head.
///
/// # Examples
/// ```
/// # use status_adt::linked::Queue;
/// # use status_adt::linked::queue::DequeueStatus;
/// let mut queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.get_head(), Some(&"second"));
/// queue.dequeue();
/// assert_eq!(queue.dequeue(), None);
/// assert_eq!(queue.dequeue_status(), DequeueStatus::Empty);
/// ```
pub struct Queue<T> {
    items: Deque<T>,
    dequeue_status: DequeueStatus,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            items: Deque::new(),
            dequeue_status: DequeueStatus::Nil,
        }
    }

    /// Returns the number of values in the Queue.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    #[doc(alias = "enqueue_tail")]
    pub fn enqueue(&mut self, value: T) {
        self.items.enqueue_tail(value);
    }

    /// Returns a reference to the value at the front of the Queue, or None (recording
    /// [`GetHeadStatus::Empty`]) if the Queue is empty.
    pub fn get_head(&self) -> Option<&T> {
        self.items.get_head()
    }

    /// Removes and returns the value at the front of the Queue, or None (recording
    /// [`DequeueStatus::Empty`]) if the Queue is empty.
    #[doc(alias = "dequeue_head")]
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.items.dequeue_head();
        self.dequeue_status = match value {
            Some(_) => DequeueStatus::Ok,
            None => DequeueStatus::Empty,
        };
        value
    }

    /// Removes every value from the Queue and resets all statuses to `Nil`.
    pub fn clear(&mut self) {
        *self = Queue::new();
    }

    /// Returns an iterator over the values in the Queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the outcome of the last call to [`get_head`](Queue::get_head).
    pub fn get_head_status(&self) -> GetHeadStatus {
        self.items.get_head_status()
    }

    /// Returns the outcome of the last call to [`dequeue`](Queue::dequeue).
    pub const fn dequeue_status(&self) -> DequeueStatus {
        self.dequeue_status
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
            dequeue_status: DequeueStatus::Nil,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.items)
            .finish()
    }
}
