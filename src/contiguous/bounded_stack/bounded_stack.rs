use std::cell::Cell;
use std::cmp;
use std::fmt::{self, Debug, Formatter};

use super::{PeekStatus, PopStatus, PushStatus};
use crate::contiguous::DynamicArray;
use crate::contiguous::dynamic_array::DEFAULT_CAP;

/// The bound of a BoundedStack created with [`BoundedStack::new`].
pub const DEFAULT_BOUND: usize = 32;

/// A last-in first-out stack which holds at most `bound` values, stored in a [`DynamicArray`].
///
/// As with the other collections in this crate, pushing onto a full stack or popping from an empty
/// one doesn't panic. The outcome of each operation is recorded instead, and can be read back with
/// [`push_status`](BoundedStack::push_status), [`pop_status`](BoundedStack::pop_status) and
/// [`peek_status`](BoundedStack::peek_status).
///
/// # Examples
/// ```
/// # use status_adt::contiguous::{BoundedStack, bounded_stack::PushStatus};
/// let mut stack = BoundedStack::with_bound(2);
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(stack.push_status(), PushStatus::Full);
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.peek(), Some(&1));
/// ```
pub struct BoundedStack<T> {
    items: DynamicArray<T>,
    bound: usize,
    push_status: PushStatus,
    pop_status: PopStatus,
    peek_status: Cell<PeekStatus>,
}

impl<T> BoundedStack<T> {
    /// Creates a new, empty BoundedStack which holds at most [`DEFAULT_BOUND`] values.
    pub fn new() -> BoundedStack<T> {
        BoundedStack::with_bound(DEFAULT_BOUND)
    }

    /// Creates a new, empty BoundedStack which holds at most `bound` values.
    pub fn with_bound(bound: usize) -> BoundedStack<T> {
        BoundedStack {
            items: Self::make_items(bound),
            bound,
            push_status: PushStatus::Nil,
            pop_status: PopStatus::Nil,
            peek_status: Cell::new(PeekStatus::Nil),
        }
    }

    /// Returns the number of values on the stack.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack contains no values.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of values the stack can hold.
    pub const fn bound(&self) -> usize {
        self.bound
    }

    /// Pushes `value` onto the top of the stack. If the stack is full, [`PushStatus::Full`] is
    /// recorded and `value` is dropped.
    pub fn push(&mut self, value: T) {
        if self.items.len() >= self.bound {
            self.push_status = PushStatus::Full;
            return;
        }

        self.items.append(value);
        self.push_status = PushStatus::Ok;
    }

    /// Removes and returns the value on top of the stack, or None (recording [`PopStatus::Empty`])
    /// if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            self.pop_status = PopStatus::Empty;
            return None;
        }

        self.items.set_cursor(self.items.len() - 1);
        let value = self.items.remove();
        self.pop_status = PopStatus::Ok;
        value
    }

    /// Returns a reference to the value on top of the stack, or None (recording
    /// [`PeekStatus::Empty`]) if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        let top = self.items.last();
        self.peek_status.set(match top {
            Some(_) => PeekStatus::Ok,
            None => PeekStatus::Empty,
        });
        top
    }

    /// Removes every value from the stack and resets all statuses to `Nil`.
    pub fn clear(&mut self) {
        *self = BoundedStack::with_bound(self.bound);
    }

    /// Returns the outcome of the last call to [`push`](BoundedStack::push).
    pub const fn push_status(&self) -> PushStatus {
        self.push_status
    }

    /// Returns the outcome of the last call to [`pop`](BoundedStack::pop).
    pub const fn pop_status(&self) -> PopStatus {
        self.pop_status
    }

    /// Returns the outcome of the last call to [`peek`](BoundedStack::peek).
    pub fn peek_status(&self) -> PeekStatus {
        self.peek_status.get()
    }

    fn make_items(bound: usize) -> DynamicArray<T> {
        DynamicArray::with_cap(cmp::min(bound, DEFAULT_CAP))
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("contents", &&*self.items)
            .field("bound", &self.bound)
            .finish()
    }
}
