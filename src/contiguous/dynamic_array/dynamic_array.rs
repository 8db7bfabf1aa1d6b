use std::cell::Cell;
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::Deref;
use std::slice;

use tracing::trace;

use super::{GetStatus, InsertStatus, RemoveStatus, ReplaceStatus, SetCursorStatus};
use crate::contiguous::Array;

/// The capacity of a DynamicArray created with [`DynamicArray::new`].
pub const DEFAULT_CAP: usize = 16;

const MIN_GROWN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

// Shrinking happens once len / cap drops below 1/2, and divides the capacity by 1.5.
const SHRINK_THRESHOLD_DENOMINATOR: usize = 2;
const SHRINK_NUMERATOR: usize = 2;
const SHRINK_DENOMINATOR: usize = 3;

/// A growable contiguous collection, accessed through a single movable cursor.
///
/// Rather than indexing, values are read and written at the cursor, which is moved with
/// [`set_cursor`](DynamicArray::set_cursor). None of the operations panic when their pre-conditions
/// aren't met, instead the outcome of each operation is recorded and can be queried afterwards
/// with the matching status method, such as [`get_status`](DynamicArray::get_status).
///
/// The capacity doubles whenever the array runs out of room, and is divided by 1.5 whenever a
/// removal leaves the array less than half full. It never shrinks below the capacity that the
/// array was created with.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The position of the cursor.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set_cursor` | `O(1)` |
/// | `get` | `O(1)` |
/// | `replace` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)`, `O(n)` |
/// | `remove` | `O(n-i)`, `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `append` will take
/// `O(n)`. The same applies to `insert`, and to `remove` when the array shrinks.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) min_cap: usize,
    pub(crate) cursor: usize,
    set_cursor_status: SetCursorStatus,
    get_status: Cell<GetStatus>,
    replace_status: ReplaceStatus,
    insert_status: InsertStatus,
    remove_status: RemoveStatus,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::{DynamicArray, dynamic_array::DEFAULT_CAP};
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty DynamicArray with exactly the provided capacity. The array will never
    /// shrink below this capacity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new_uninit(cap),
            len: 0,
            min_cap: cap,
            cursor: 0,
            set_cursor_status: SetCursorStatus::Nil,
            get_status: Cell::new(GetStatus::Nil),
            replace_status: ReplaceStatus::Nil,
            insert_status: InsertStatus::Nil,
            remove_status: RemoveStatus::Nil,
        }
    }

    /// Returns the number of values in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the capacity below which the DynamicArray never shrinks.
    pub const fn min_cap(&self) -> usize {
        self.min_cap
    }

    /// Returns the current position of the cursor.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Appends the provided value to the end of the DynamicArray, doubling the capacity if
    /// required. This operation always succeeds and leaves the cursor where it is.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::with_cap(2);
    /// for i in 0..5 {
    ///     arr.append(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Moves the cursor to `index`.
    ///
    /// Records [`SetCursorStatus::Empty`] if the DynamicArray is empty, or
    /// [`SetCursorStatus::OutOfBounds`] if `index >= len`. The cursor is left untouched in both
    /// cases.
    pub fn set_cursor(&mut self, index: usize) {
        self.set_cursor_status = if self.len == 0 {
            SetCursorStatus::Empty
        } else if index >= self.len {
            SetCursorStatus::OutOfBounds
        } else {
            self.cursor = index;
            SetCursorStatus::Ok
        };
    }

    /// Returns a reference to the value at the cursor, or None (recording [`GetStatus::Empty`]) if
    /// the DynamicArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::{DynamicArray, dynamic_array::GetStatus};
    /// let mut arr = DynamicArray::new();
    /// assert_eq!(arr.get(), None);
    /// assert_eq!(arr.get_status(), GetStatus::Empty);
    ///
    /// arr.append('a');
    /// arr.append('b');
    /// arr.set_cursor(1);
    /// assert_eq!(arr.get(), Some(&'b'));
    /// assert_eq!(arr.get_status(), GetStatus::Ok);
    /// ```
    pub fn get(&self) -> Option<&T> {
        if self.len == 0 {
            self.get_status.set(GetStatus::Empty);
            return None;
        }

        self.get_status.set(GetStatus::Ok);
        // SAFETY: The cursor is always < len when len > 0, and all values < len are initialized.
        Some(unsafe { self.arr[self.cursor].assume_init_ref() })
    }

    /// Replaces the value at the cursor with `value`, returning the previous value. If the
    /// DynamicArray is empty, [`ReplaceStatus::Empty`] is recorded, `value` is dropped and None is
    /// returned.
    pub fn replace(&mut self, value: T) -> Option<T> {
        if self.len == 0 {
            self.replace_status = ReplaceStatus::Empty;
            return None;
        }

        self.replace_status = ReplaceStatus::Ok;
        // SAFETY: The cursor is < len and all values < len are initialized.
        Some(unsafe {
            mem::replace(&mut self.arr[self.cursor], MaybeUninit::new(value)).assume_init()
        })
    }

    /// Inserts `value` at the cursor, moving the value previously at the cursor and all following
    /// values one position to the right. The cursor keeps its position, so it now refers to the
    /// inserted value.
    ///
    /// Inserting requires an existing cursor position: if the DynamicArray is empty,
    /// [`InsertStatus::Empty`] is recorded and `value` is dropped. Use
    /// [`append`](DynamicArray::append) to add the first value.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// arr.set_cursor(1);
    /// arr.insert(100);
    /// assert_eq!(&*arr, &[0, 100, 1, 2]);
    /// assert_eq!(arr.get(), Some(&100));
    /// ```
    pub fn insert(&mut self, value: T) {
        if self.len == 0 {
            self.insert_status = InsertStatus::Empty;
            return;
        }

        if self.len + 1 > self.cap() {
            self.grow();
        }

        // Rotate value into place, carrying each displaced value one slot to the right.
        let mut prev = MaybeUninit::new(value);
        for i in self.cursor..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        self.insert_status = InsertStatus::Ok;
    }

    /// Removes and returns the value at the cursor, moving all following values one position to
    /// the left. If the DynamicArray is empty, [`RemoveStatus::Empty`] is recorded and None is
    /// returned.
    ///
    /// If the removal leaves the DynamicArray less than half full, the capacity is divided by 1.5,
    /// but never below [`min_cap`](DynamicArray::min_cap). When the last value is removed, the
    /// cursor moves back to the new last value.
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello!".chars().collect();
    /// arr.set_cursor(1);
    /// assert_eq!(arr.remove(), Some('e'));
    /// assert_eq!(arr.get(), Some(&'l'));
    /// assert_eq!(arr.iter().collect::<String>(), "Hllo!");
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.len == 0 {
            self.remove_status = RemoveStatus::Empty;
            return None;
        }

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to the cursor.
        for i in (self.cursor..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at the cursor, which was
        // less than len and therefore initialized.
        let removed = unsafe { next.assume_init() };

        self.shrink_if_sparse();

        if self.cursor >= self.len {
            self.cursor = self.len.saturating_sub(1);
        }

        self.remove_status = RemoveStatus::Ok;
        Some(removed)
    }

    /// Returns the outcome of the last call to [`set_cursor`](DynamicArray::set_cursor).
    pub const fn set_cursor_status(&self) -> SetCursorStatus {
        self.set_cursor_status
    }

    /// Returns the outcome of the last call to [`get`](DynamicArray::get).
    pub fn get_status(&self) -> GetStatus {
        self.get_status.get()
    }

    /// Returns the outcome of the last call to [`replace`](DynamicArray::replace).
    pub const fn replace_status(&self) -> ReplaceStatus {
        self.replace_status
    }

    /// Returns the outcome of the last call to [`insert`](DynamicArray::insert).
    pub const fn insert_status(&self) -> InsertStatus {
        self.insert_status
    }

    /// Returns the outcome of the last call to [`remove`](DynamicArray::remove).
    pub const fn remove_status(&self) -> RemoveStatus {
        self.remove_status
    }
}

impl<T> DynamicArray<T> {
    /// Grows the internal Array by the growth factor. After calling this, the DynamicArray can take
    /// at least one more value.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_GROWN_CAP);

        trace!(len = self.len, old_cap = self.cap(), new_cap, "growing dynamic array");
        self.arr.realloc(new_cap);
    }

    /// Shrinks the internal Array if fewer than half of its slots are in use, without going below
    /// `min_cap`.
    pub(crate) fn shrink_if_sparse(&mut self) {
        let cap = self.cap();
        if self.len * SHRINK_THRESHOLD_DENOMINATOR >= cap {
            return;
        }

        let new_cap = cmp::max(cap * SHRINK_NUMERATOR / SHRINK_DENOMINATOR, self.min_cap);
        if new_cap == cap {
            return;
        }

        trace!(len = self.len, old_cap = cap, new_cap, "shrinking dynamic array");
        // Only values < len are initialized, and len < new_cap, so nothing needs dropping.
        self.arr.realloc(new_cap);
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        for value in &mut self.arr[..self.len] {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { value.assume_init_drop() }
        }

        // Implicitly drop self.arr, which only contains MaybeUninit values and deallocates.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The DynamicArray is valid as a slice for len values, which are all initialized.
        // The borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Clones the values, capacity and cursor of the DynamicArray. Statuses start over as `Nil`.
    fn clone(&self) -> Self {
        let mut arr = DynamicArray::with_cap(self.cap());
        arr.min_cap = self.min_cap;
        arr.extend(self.iter().cloned());
        arr.cursor = self.cursor;
        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("cursor", &self.cursor)
            .finish()
    }
}
