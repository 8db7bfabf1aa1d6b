#![cfg(test)]

use super::*;
use crate::status::{Status, StatusError};
use crate::util::alloc::CountedDrop;

fn list_of<D>(values: &[i64]) -> CursorList<i64, D> {
    values.iter().copied().collect()
}

fn assert_contents<D>(list: &CursorList<i64, D>, expected: &[i64]) {
    assert!(list.iter().eq(expected), "Expected {expected:?}, found {list:?}");
    assert_eq!(list.len(), expected.len());
}

fn assert_clear<D>(list: &CursorList<i64, D>) {
    assert!(list.is_empty());
    assert!(!list.is_value());
    assert_eq!(list.head_status(), HeadStatus::Nil);
    assert_eq!(list.tail_status(), TailStatus::Nil);
    assert_eq!(list.right_status(), RightStatus::Nil);
    assert_eq!(list.put_left_status(), PutLeftStatus::Nil);
    assert_eq!(list.put_right_status(), PutRightStatus::Nil);
    assert_eq!(list.remove_status(), RemoveStatus::Nil);
    assert_eq!(list.replace_status(), ReplaceStatus::Nil);
    assert_eq!(list.get_status(), GetStatus::Nil);
    assert_eq!(list.find_status(), FindStatus::Nil);
}

#[test]
fn test_new() {
    let list: LinkedList<i64> = LinkedList::new();
    assert_clear(&list);
    assert!(!list.is_head());
    assert!(!list.is_tail());

    let list: TwoWayList<i64> = TwoWayList::default();
    assert_clear(&list);
    assert_eq!(list.left_status(), LeftStatus::Nil);
}

#[test]
fn test_empty_commands() {
    let mut list: TwoWayList<i64> = TwoWayList::new();

    list.head();
    assert_eq!(list.head_status(), HeadStatus::Empty);
    list.tail();
    assert_eq!(list.tail_status(), TailStatus::Empty);
    list.right();
    assert_eq!(list.right_status(), RightStatus::Empty);
    list.left();
    assert_eq!(list.left_status(), LeftStatus::Empty);
    list.put_left(1);
    assert_eq!(list.put_left_status(), PutLeftStatus::Empty);
    list.put_right(1);
    assert_eq!(list.put_right_status(), PutRightStatus::Empty);
    assert_eq!(list.remove(), None);
    assert_eq!(list.remove_status(), RemoveStatus::Empty);
    assert_eq!(list.replace(1), None);
    assert_eq!(list.replace_status(), ReplaceStatus::Empty);
    assert_eq!(list.get(), None);
    assert_eq!(list.get_status(), GetStatus::Empty);
    list.find(&1);
    assert_eq!(list.find_status(), FindStatus::Empty);

    assert!(list.is_empty(), "No command should add a value to an empty list.");
    assert_eq!(list.get_status().check(), Err(StatusError::Empty));
}

#[test]
fn test_add_tail() {
    let mut list: LinkedList<i64> = LinkedList::new();
    list.add_tail(1);
    assert!(list.is_value());
    assert!(list.is_head() && list.is_tail());
    assert_eq!(list.get(), Some(&1), "The first value should receive the cursor.");

    for i in 2..=5 {
        list.add_tail(i);
        assert_eq!(list.get(), Some(&1), "Adding to a non-empty list shouldn't move the cursor.");
    }
    assert_contents(&list, &[1, 2, 3, 4, 5]);

    list.tail();
    assert_eq!(list.tail_status(), TailStatus::Ok);
    assert_eq!(list.get(), Some(&5));
    list.add_tail(6);
    assert!(!list.is_tail());
}

#[test]
fn test_navigation() {
    let mut list: TwoWayList<i64> = list_of(&[1, 2, 3]);

    for expected in [2, 3] {
        list.right();
        assert_eq!(list.right_status(), RightStatus::Ok);
        assert_eq!(list.get(), Some(&expected));
    }
    assert!(list.is_tail());
    list.right();
    assert_eq!(list.right_status(), RightStatus::NoRight);
    assert_eq!(list.right_status().check(), Err(StatusError::OutOfBounds));
    assert_eq!(list.get(), Some(&3));

    for expected in [2, 1] {
        list.left();
        assert_eq!(list.left_status(), LeftStatus::Ok);
        assert_eq!(list.get(), Some(&expected));
    }
    assert!(list.is_head());
    list.left();
    assert_eq!(list.left_status(), LeftStatus::NoLeft);
    assert_eq!(list.get(), Some(&1));

    list.tail();
    list.head();
    assert_eq!(list.head_status(), HeadStatus::Ok);
    assert!(list.is_head());
}

#[test]
fn test_put_left_right() {
    let mut list: TwoWayList<i64> = list_of(&[2]);

    list.put_left(1);
    assert_eq!(list.put_left_status(), PutLeftStatus::Ok);
    list.put_right(4);
    assert_eq!(list.put_right_status(), PutRightStatus::Ok);
    list.put_right(3);
    assert_contents(&list, &[1, 2, 3, 4]);
    assert_eq!(list.get(), Some(&2), "Putting beside the cursor shouldn't move it.");

    list.head();
    list.put_left(0);
    list.tail();
    list.put_right(5);
    assert_contents(&list, &[0, 1, 2, 3, 4, 5]);

    list.head();
    assert_eq!(list.get(), Some(&0), "Putting left of the head should replace the head.");
    list.tail();
    assert_eq!(list.get(), Some(&5), "Putting right of the tail should replace the tail.");
    for expected in [4, 3, 2, 1, 0] {
        list.left();
        assert_eq!(list.get(), Some(&expected), "Back links should match forward links.");
    }
}

#[test]
fn test_remove() {
    let mut list: TwoWayList<i64> = list_of(&[1, 2, 3, 4]);

    list.right();
    assert_eq!(list.remove(), Some(2));
    assert_eq!(list.remove_status(), RemoveStatus::Ok);
    assert_eq!(list.get(), Some(&3), "The cursor should move right after a removal.");

    list.tail();
    assert_eq!(list.remove(), Some(4));
    assert_eq!(list.get(), Some(&3), "Without a right neighbour, the cursor should move left.");
    assert!(list.is_tail());

    list.head();
    assert_eq!(list.remove(), Some(1));
    assert!(list.is_head() && list.is_tail());
    assert_eq!(list.remove(), Some(3));
    assert!(!list.is_value());
    assert_eq!(list.remove(), None);
    assert_eq!(list.remove_status(), RemoveStatus::Empty);

    list.add_tail(7);
    assert_eq!(list.get(), Some(&7), "A list emptied by removals should accept new values.");
}

#[test]
fn test_replace() {
    let mut list: LinkedList<i64> = list_of(&[1, 2, 3]);
    list.right();
    assert_eq!(list.replace(20), Some(2));
    assert_eq!(list.replace_status(), ReplaceStatus::Ok);
    assert_contents(&list, &[1, 20, 3]);
}

#[test]
fn test_find() {
    let mut list: LinkedList<i64> = list_of(&[1, 2, 1, 3, 1]);

    list.find(&1);
    assert_eq!(list.find_status(), FindStatus::Ok);
    list.right();
    assert_eq!(list.get(), Some(&3), "Find should skip the cursor's own node.");

    list.find(&1);
    assert_eq!(list.find_status(), FindStatus::Ok);
    assert!(list.is_tail());

    list.find(&1);
    assert_eq!(list.find_status(), FindStatus::NotFound);
    assert!(list.is_tail(), "An unsuccessful find shouldn't move the cursor.");

    list.head();
    list.find(&3);
    assert_eq!(list.get(), Some(&3));
    list.find(&2);
    assert_eq!(list.find_status(), FindStatus::NotFound, "Find should only search rightwards.");
    assert_eq!(list.find_status().check(), Err(StatusError::NotFound));
}

#[test]
fn test_find_borrowed() {
    let mut list: LinkedList<String> = ["abc", "def"].map(String::from).into_iter().collect();
    list.find("def");
    assert_eq!(list.find_status(), FindStatus::Ok);
    assert_eq!(list.get().map(String::as_str), Some("def"));
}

#[test]
fn test_remove_all() {
    let mut list: TwoWayList<i64> = list_of(&[1, 2, 1, 3, 1, 1]);
    list.remove_all(&1);
    assert_contents(&list, &[2, 3]);
    assert_eq!(list.get(), Some(&2), "The cursor should move right off a removed head.");
    assert!(list.is_head());
    list.tail();
    list.left();
    assert_eq!(list.get(), Some(&2));

    let mut list: LinkedList<i64> = list_of(&[1, 2, 1, 2]);
    list.tail();
    list.remove_all(&2);
    assert_contents(&list, &[1, 1]);
    assert!(list.is_tail(), "The cursor should fall back to the last remaining node.");

    list.remove_all(&1);
    assert!(list.is_empty());
    assert!(!list.is_value());

    list.remove_all(&1);
    assert_eq!(list.remove_status(), RemoveStatus::Nil, "Remove all shouldn't record a status.");
    assert_eq!(list.find_status(), FindStatus::Nil);
}

#[test]
fn test_clear() {
    let mut list: TwoWayList<i64> = list_of(&[1, 2, 3]);
    list.right();
    list.remove();
    list.find(&9);
    list.get();
    list.left();

    list.clear();
    assert_clear(&list);
    assert_eq!(list.left_status(), LeftStatus::Nil);
    assert_eq!(list.iter().count(), 0);

    list.add_tail(4);
    assert_eq!(list.get(), Some(&4));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list: LinkedList<CountedDrop> = LinkedList::new();
    for _ in 0..10 {
        list.add_tail(counter.clone());
    }

    drop(list.remove());
    assert_eq!(counter.drops(), 1);
    drop(list.replace(counter.clone()));
    assert_eq!(counter.drops(), 2);

    list.put_right(counter.clone());
    list.remove_all(&counter);
    assert_eq!(counter.drops(), 12, "Removed values should be dropped.");

    for _ in 0..5 {
        list.add_tail(counter.clone());
    }
    drop(list);
    assert_eq!(counter.drops(), 17, "Dropping the list should drop its values.");
}

#[test]
fn test_debug() {
    let mut list: LinkedList<i64> = list_of(&[1, 2]);
    list.right();
    assert_eq!(
        format!("{list:?}"),
        "CursorList { contents: [1, 2], cursor: Some(2) }"
    );
}
