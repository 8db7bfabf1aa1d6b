use std::borrow::Borrow;
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use tracing::debug;

use super::{
    FindStatus, GetStatus, HeadStatus, LeftStatus, PutLeftStatus, PutRightStatus, RemoveStatus,
    ReplaceStatus, RightStatus, TailStatus,
};
use crate::linked::{Iter, Link, Node, NodeRef, free_chain};

/// Marks a [`CursorList`] whose cursor only moves right. See [`LinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneWay;

/// Marks a [`CursorList`] whose cursor can also move left. See [`TwoWayList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoWay;

/// A [`CursorList`] whose cursor only moves towards the tail.
pub type LinkedList<T> = CursorList<T, OneWay>;

/// A [`CursorList`] whose cursor can move in both directions, with [`left`](CursorList::left).
pub type TwoWayList<T> = CursorList<T, TwoWay>;

/// A list which is read and edited through a single cursor, rather than through indices.
///
/// The cursor is defined exactly when the list is non-empty. The first value added to an empty
/// list (with [`add_tail`](CursorList::add_tail)) becomes the cursor's node, and from there it can
/// be moved with [`head`](CursorList::head), [`tail`](CursorList::tail),
/// [`right`](CursorList::right) and [`find`](CursorList::find). The direction parameter `D`
/// decides whether the cursor can also move [`left`](CursorList::left): it can for a
/// [`TwoWayList`], but not for a [`LinkedList`].
///
/// Rather than panicking, every command records its outcome, which can be read back with the
/// matching status query. Each status starts out as `Nil`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head` | `O(1)` |
/// | `tail` | `O(1)` |
/// | `right` | `O(1)` |
/// | `left` | `O(1)` |
/// | `put_left` | `O(1)` |
/// | `put_right` | `O(1)` |
/// | `add_tail` | `O(1)` |
/// | `remove` | `O(1)` |
/// | `replace` | `O(1)` |
/// | `get` | `O(1)` |
/// | `find` | `O(n)` |
/// | `remove_all` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use status_adt::linked::TwoWayList;
/// # use status_adt::linked::list::{LeftStatus, RightStatus};
/// let mut list: TwoWayList<char> = "abc".chars().collect();
/// assert_eq!(list.get(), Some(&'a'));
///
/// list.left();
/// assert_eq!(list.left_status(), LeftStatus::NoLeft);
///
/// list.right();
/// list.put_right('x');
/// list.right();
/// assert_eq!(list.right_status(), RightStatus::Ok);
/// assert_eq!(list.get(), Some(&'x'));
///
/// list.remove();
/// assert_eq!(list.get(), Some(&'c'), "The cursor moves right after a removal.");
/// assert!(list.iter().eq(&['a', 'b', 'c']));
/// ```
pub struct CursorList<T, D = OneWay> {
    head: Link<T>,
    tail: Link<T>,
    cursor: Link<T>,
    len: usize,
    head_status: HeadStatus,
    tail_status: TailStatus,
    right_status: RightStatus,
    left_status: LeftStatus,
    put_left_status: PutLeftStatus,
    put_right_status: PutRightStatus,
    remove_status: RemoveStatus,
    replace_status: ReplaceStatus,
    get_status: Cell<GetStatus>,
    find_status: FindStatus,
    _phantom: PhantomData<(T, D)>,
}

impl<T, D> CursorList<T, D> {
    /// Creates a new, empty list with an undefined cursor.
    pub const fn new() -> CursorList<T, D> {
        CursorList {
            head: None,
            tail: None,
            cursor: None,
            len: 0,
            head_status: HeadStatus::Nil,
            tail_status: TailStatus::Nil,
            right_status: RightStatus::Nil,
            left_status: LeftStatus::Nil,
            put_left_status: PutLeftStatus::Nil,
            put_right_status: PutRightStatus::Nil,
            remove_status: RemoveStatus::Nil,
            replace_status: ReplaceStatus::Nil,
            get_status: Cell::new(GetStatus::Nil),
            find_status: FindStatus::Nil,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values in the list.
    #[doc(alias = "size")]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the cursor to the first node. Records [`HeadStatus::Empty`] if the list is empty.
    pub fn head(&mut self) {
        self.head_status = match self.head {
            Some(_) => {
                self.cursor = self.head;
                HeadStatus::Ok
            },
            None => HeadStatus::Empty,
        };
    }

    /// Moves the cursor to the last node. Records [`TailStatus::Empty`] if the list is empty.
    pub fn tail(&mut self) {
        self.tail_status = match self.tail {
            Some(_) => {
                self.cursor = self.tail;
                TailStatus::Ok
            },
            None => TailStatus::Empty,
        };
    }

    /// Moves the cursor one node towards the tail.
    ///
    /// Records [`RightStatus::Empty`] if the list is empty, or [`RightStatus::NoRight`] if the
    /// cursor is already at the tail. In both cases, the cursor doesn't move.
    pub fn right(&mut self) {
        let Some(cursor) = self.cursor else {
            self.right_status = RightStatus::Empty;
            return;
        };

        self.right_status = match cursor.next() {
            Some(next) => {
                self.cursor = Some(next);
                RightStatus::Ok
            },
            None => RightStatus::NoRight,
        };
    }

    /// Inserts `value` directly before the cursor's node, without moving the cursor.
    ///
    /// Records [`PutLeftStatus::Empty`] (dropping `value`) if the list is empty. Use
    /// [`add_tail`](CursorList::add_tail) to add the first value.
    pub fn put_left(&mut self, value: T) {
        let Some(cursor) = self.cursor else {
            self.put_left_status = PutLeftStatus::Empty;
            return;
        };

        let node = NodeRef::from_value(value);
        node.set_prev(cursor.prev());
        node.set_next(Some(cursor));
        match cursor.prev() {
            Some(prev) => prev.set_next(Some(node)),
            None => self.head = Some(node),
        }
        cursor.set_prev(Some(node));

        self.len += 1;
        self.put_left_status = PutLeftStatus::Ok;
    }

    /// Inserts `value` directly after the cursor's node, without moving the cursor.
    ///
    /// Records [`PutRightStatus::Empty`] (dropping `value`) if the list is empty. Use
    /// [`add_tail`](CursorList::add_tail) to add the first value.
    pub fn put_right(&mut self, value: T) {
        let Some(cursor) = self.cursor else {
            self.put_right_status = PutRightStatus::Empty;
            return;
        };

        let node = NodeRef::from_value(value);
        node.set_prev(Some(cursor));
        node.set_next(cursor.next());
        match cursor.next() {
            Some(next) => next.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        cursor.set_next(Some(node));

        self.len += 1;
        self.put_right_status = PutRightStatus::Ok;
    }

    /// Removes and returns the value at the cursor. The cursor then moves to the next node if
    /// there is one, otherwise to the previous node. Removing the last value leaves the cursor
    /// undefined.
    ///
    /// Records [`RemoveStatus::Empty`] and returns None if the list is empty.
    pub fn remove(&mut self) -> Option<T> {
        let Some(cursor) = self.cursor else {
            self.remove_status = RemoveStatus::Empty;
            return None;
        };

        self.cursor = cursor.next().or(cursor.prev());
        let value = self.unlink(cursor);
        self.remove_status = RemoveStatus::Ok;
        Some(value)
    }

    /// Removes every value from the list, leaving the cursor undefined and resetting all statuses
    /// to `Nil`.
    pub fn clear(&mut self) {
        *self = CursorList::new();
    }

    /// Appends `value` after the last node. If the list was empty, the cursor is placed on the new
    /// node. This always succeeds, so it has no status.
    pub fn add_tail(&mut self, value: T) {
        let node = NodeRef::from_value(value);
        match self.tail {
            Some(tail) => {
                tail.set_next(Some(node));
                node.set_prev(Some(tail));
            },
            None => {
                self.head = Some(node);
                self.cursor = Some(node);
            },
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Replaces the value at the cursor with `value`, returning the old one.
    ///
    /// Records [`ReplaceStatus::Empty`] and returns None (dropping `value`) if the list is empty.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let Some(cursor) = self.cursor else {
            self.replace_status = ReplaceStatus::Empty;
            return None;
        };

        self.replace_status = ReplaceStatus::Ok;
        Some(mem::replace(cursor.value_mut(), value))
    }

    /// Moves the cursor to the first node after it which holds `value`. The cursor's own node
    /// isn't considered, so repeated calls visit each match in turn.
    ///
    /// Records [`FindStatus::Empty`] if the list is empty, or [`FindStatus::NotFound`] if no later
    /// node holds `value`. In both cases, the cursor doesn't move.
    pub fn find<Q>(&mut self, value: &Q)
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let Some(cursor) = self.cursor else {
            self.find_status = FindStatus::Empty;
            return;
        };

        let mut curr = cursor.next();
        while let Some(node) = curr {
            if node.value().borrow() == value {
                self.cursor = Some(node);
                self.find_status = FindStatus::Ok;
                return;
            }
            curr = node.next();
        }

        self.find_status = FindStatus::NotFound;
    }

    /// Removes every node which holds `value`, wherever it is in the list. If the cursor's node is
    /// removed, the cursor moves as it would for [`remove`](CursorList::remove). Doesn't record a
    /// status.
    pub fn remove_all<Q>(&mut self, value: &Q)
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut removed = 0_usize;
        let mut curr = self.head;
        while let Some(node) = curr {
            curr = node.next();
            if node.value().borrow() != value {
                continue;
            }

            if self.cursor == Some(node) {
                self.cursor = node.next().or(node.prev());
            }
            drop(self.unlink(node));
            removed += 1;
        }

        if removed > 0 {
            debug!(removed, len = self.len, "removed all matching nodes from list");
        }
    }

    /// Returns a reference to the value at the cursor, or None (recording [`GetStatus::Empty`]) if
    /// the list is empty.
    pub fn get(&self) -> Option<&T> {
        let value = self.cursor.map(NodeRef::value);
        self.get_status.set(match value {
            Some(_) => GetStatus::Ok,
            None => GetStatus::Empty,
        });
        value
    }

    /// Returns true if the cursor is on the first node. This is always false for an empty list.
    pub fn is_head(&self) -> bool {
        self.cursor.is_some() && self.cursor == self.head
    }

    /// Returns true if the cursor is on the last node. This is always false for an empty list.
    pub fn is_tail(&self) -> bool {
        self.cursor.is_some() && self.cursor == self.tail
    }

    /// Returns true if the cursor is defined, which is the case whenever the list is non-empty.
    pub const fn is_value(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns an iterator over the values in the list, from head to tail. The cursor isn't moved.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the outcome of the last call to [`head`](CursorList::head).
    pub const fn head_status(&self) -> HeadStatus {
        self.head_status
    }

    /// Returns the outcome of the last call to [`tail`](CursorList::tail).
    pub const fn tail_status(&self) -> TailStatus {
        self.tail_status
    }

    /// Returns the outcome of the last call to [`right`](CursorList::right).
    pub const fn right_status(&self) -> RightStatus {
        self.right_status
    }

    /// Returns the outcome of the last call to [`put_left`](CursorList::put_left).
    pub const fn put_left_status(&self) -> PutLeftStatus {
        self.put_left_status
    }

    /// Returns the outcome of the last call to [`put_right`](CursorList::put_right).
    pub const fn put_right_status(&self) -> PutRightStatus {
        self.put_right_status
    }

    /// Returns the outcome of the last call to [`remove`](CursorList::remove).
    pub const fn remove_status(&self) -> RemoveStatus {
        self.remove_status
    }

    /// Returns the outcome of the last call to [`replace`](CursorList::replace).
    pub const fn replace_status(&self) -> ReplaceStatus {
        self.replace_status
    }

    /// Returns the outcome of the last call to [`get`](CursorList::get).
    pub fn get_status(&self) -> GetStatus {
        self.get_status.get()
    }

    /// Returns the outcome of the last call to [`find`](CursorList::find).
    pub const fn find_status(&self) -> FindStatus {
        self.find_status
    }

    /// Detaches `node` from its neighbours and frees it, returning its value. The cursor is left
    /// for the caller to fix.
    fn unlink(&mut self, node: NodeRef<T>) -> T {
        let Node { value, prev, next } = node.take_node();
        match prev {
            Some(prev) => prev.set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => next.set_prev(prev),
            None => self.tail = prev,
        }
        self.len -= 1;
        value
    }
}

impl<T> CursorList<T, TwoWay> {
    /// Moves the cursor one node towards the head.
    ///
    /// Records [`LeftStatus::Empty`] if the list is empty, or [`LeftStatus::NoLeft`] if the
    /// cursor is already at the head. In both cases, the cursor doesn't move.
    pub fn left(&mut self) {
        let Some(cursor) = self.cursor else {
            self.left_status = LeftStatus::Empty;
            return;
        };

        self.left_status = match cursor.prev() {
            Some(prev) => {
                self.cursor = Some(prev);
                LeftStatus::Ok
            },
            None => LeftStatus::NoLeft,
        };
    }

    /// Returns the outcome of the last call to [`left`](CursorList::left).
    pub const fn left_status(&self) -> LeftStatus {
        self.left_status
    }
}

impl<'a, T, D> IntoIterator for &'a CursorList<T, D> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.head, self.len)
    }
}

impl<T, D> FromIterator<T> for CursorList<T, D> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CursorList::new();
        for value in iter {
            list.add_tail(value);
        }
        list
    }
}

impl<T, D> Default for CursorList<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> Drop for CursorList<T, D> {
    fn drop(&mut self) {
        free_chain(self.head);
    }
}

impl<T: Debug, D> Debug for CursorList<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorList")
            .field("contents", &self.iter())
            .field("cursor", &self.cursor.map(NodeRef::value))
            .finish()
    }
}
