#![cfg(test)]

use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ZeroSized;

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSized>::repeat_default(5);
    assert_eq!(arr[4], ZeroSized, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let mut uninit = arr.forget_init();
    let old_ptr = uninit.ptr;
    uninit.realloc(30);
    assert_eq!(uninit.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(uninit.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(4);
    for i in 0..4 {
        arr[i] = MaybeUninit::new(i);
    }

    arr.realloc(10);
    for i in 4..10 {
        arr[i] = MaybeUninit::new(i);
    }
    // SAFETY: Every value below 10 has just been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], "Growing should preserve all values.");

    let mut arr = arr.forget_init();
    arr.realloc(3);
    // SAFETY: Shrinking keeps the first 3 initialized values.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2], "Shrinking should preserve the leading values.");

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0);

    assert_panics!({
        let mut arr: Array<MaybeUninit<u64>> = Array::new_uninit(5);
        arr.realloc(isize::MAX as usize);
    });
}

#[test]
fn test_clone() {
    let arr = Array::repeat_with(|| String::from("abc"), 3);
    let copy = arr.clone();
    assert_eq!(arr, copy);
    assert_ne!(arr[0].as_ptr(), copy[0].as_ptr(), "Clones should own separate values.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let arr = Array::repeat_with(|| counter.clone(), 10);

    drop(arr);

    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}
