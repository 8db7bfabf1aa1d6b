use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed-size heap allocation, sized at runtime. Similar to a [`Box<[T]>`](Box<T>), except that
/// an `Array<MaybeUninit<T>>` can be reallocated in place.
///
/// Every other collection in this crate stores its contents in an Array, so none of them rely on
/// [`Vec`] or [`std::collections`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `repeat_default` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* `realloc` defers to the global allocator, which may be able to grow or shrink in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_with(|| None, 3);
    /// assert_eq!(&*arr, &[None, None, None]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: count > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(f())) }
        }

        // SAFETY: All values are initialized by f.
        unsafe { arr.assume_init() }
    }

    /// Decomposes an `Array<T>` into its raw components: a pointer to the contained data and the
    /// number of elements.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts
    /// can be passed to [`Array::from_parts`] to be dropped normally.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be allocated in the global allocator with the layout of `[T; size]`, or be
    ///   dangling for a zero-sized layout.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, the counterpart to [`Array::assume_init`].
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, and initialized values are valid
        // MaybeUninit values.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Creates a [`Layout`] for `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// Creates a [`NonNull`] for the provided [`Layout`]. Returns a dangling pointer for a
    /// zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] rather
    /// than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::repeat_with(T::default, count)
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T. The caller guarantees initialization.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Array to hold `new_size` values. Values below `min(size, new_size)` are
    /// preserved, any new locations are uninitialized and values past `new_size` are discarded
    /// without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types never need an allocation, so the dangling pointer stays.
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(new_size);
                Array::<MaybeUninit<T>>::make_ptr(layout)
            },
            (_, 0) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                // SAFETY: ptr was allocated in the global allocator with this exact layout, which
                // has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
                NonNull::dangling()
            },
            (_, _) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                // Validates the new size before handing it to the allocator.
                let new_layout = Array::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        layout,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        let layout = Array::<T>::make_layout(self.size);

        for i in 0..self.size {
            // SAFETY: The pointer is nonnull, properly aligned, initialized and ready to drop.
            // All offsets are within the allocated range of the Array.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()) }
        }

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts are never allocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size values, all of which are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the borrow checker prevents any other access throughout the
        // lifetime of the returned slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut source = self.iter();
        // UNREACHABLE: source yields exactly size values.
        Array::repeat_with(|| source.next().cloned().unwrap_or_else(|| unreachable!()), self.size)
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
