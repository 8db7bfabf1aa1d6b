#![cfg(test)]

use super::*;
use crate::status::{Status, StatusError};
use crate::util::alloc::CountedDrop;

const MAX: i64 = 100;

#[test]
fn test_queue_fifo() {
    let mut queue: Queue<i64> = Queue::new();
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.dequeue_status(), DequeueStatus::Nil);
    assert_eq!(queue.get_head_status(), GetHeadStatus::Nil);
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.dequeue_status(), DequeueStatus::Empty);
    assert_eq!(queue.dequeue_status().check(), Err(StatusError::Empty));

    for i in 1..=MAX {
        queue.enqueue(i);
        assert_eq!(queue.len(), i as usize);
        assert_eq!(queue.get_head(), Some(&1), "Enqueueing shouldn't change the head.");
    }

    for i in 1..=MAX {
        assert_eq!(queue.get_head(), Some(&i));
        assert_eq!(queue.get_head_status(), GetHeadStatus::Ok);
        assert_eq!(queue.dequeue(), Some(i));
        assert_eq!(queue.dequeue_status(), DequeueStatus::Ok);
        assert_eq!(queue.len(), (MAX - i) as usize);
    }

    assert_eq!(queue.get_head(), None);
    assert_eq!(queue.get_head_status(), GetHeadStatus::Empty);
}

#[test]
fn test_queue_interleaved() {
    let mut queue: Queue<i64> = (1..=3).collect();
    assert_eq!(queue.dequeue(), Some(1));
    queue.enqueue(4);
    assert_eq!(queue.dequeue(), Some(2));
    assert!(queue.iter().eq(&[3, 4]));

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue_status(), DequeueStatus::Nil);
    assert_eq!(queue.get_head_status(), GetHeadStatus::Nil);
    queue.enqueue(5);
    assert_eq!(queue.dequeue(), Some(5), "A cleared queue should accept new values.");
}

#[test]
fn test_deque_empty() {
    let mut deque: Deque<i64> = Deque::new();
    assert_eq!(deque.get_head(), None);
    assert_eq!(deque.get_head_status(), GetHeadStatus::Empty);
    assert_eq!(deque.get_tail(), None);
    assert_eq!(deque.get_tail_status(), GetTailStatus::Empty);
    assert_eq!(deque.dequeue_head(), None);
    assert_eq!(deque.dequeue_head_status(), DequeueHeadStatus::Empty);
    assert_eq!(deque.dequeue_tail(), None);
    assert_eq!(deque.dequeue_tail_status(), DequeueTailStatus::Empty);
    assert!(deque.is_empty());
}

#[test]
fn test_deque_both_ends() {
    let mut deque = Deque::new();
    for i in 1..=MAX {
        deque.enqueue_head(-i);
        deque.enqueue_tail(i);
        assert_eq!(deque.get_head(), Some(&-i));
        assert_eq!(deque.get_tail(), Some(&i));
        assert_eq!(deque.len(), 2 * i as usize);
    }
    assert_eq!(deque.get_head_status(), GetHeadStatus::Ok);
    assert_eq!(deque.get_tail_status(), GetTailStatus::Ok);

    for i in (1..=MAX).rev() {
        assert_eq!(deque.dequeue_head(), Some(-i));
        assert_eq!(deque.dequeue_head_status(), DequeueHeadStatus::Ok);
        assert_eq!(deque.dequeue_tail(), Some(i));
        assert_eq!(deque.dequeue_tail_status(), DequeueTailStatus::Ok);
    }
    assert!(deque.is_empty());
}

#[test]
fn test_deque_as_stack() {
    let mut deque: Deque<char> = "abc".chars().collect();
    assert_eq!(deque.dequeue_tail(), Some('c'));
    assert_eq!(deque.dequeue_tail(), Some('b'));
    deque.enqueue_tail('d');
    assert_eq!(deque.dequeue_head(), Some('a'));
    assert_eq!(deque.dequeue_head(), Some('d'), "Draining one end should fix the other.");
    assert_eq!(deque.get_tail(), None);

    deque.enqueue_head('e');
    assert_eq!(deque.get_tail(), Some(&'e'));
    assert_eq!(format!("{deque:?}"), "['e']");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut deque = Deque::new();
    for _ in 0..4 {
        deque.enqueue_head(counter.clone());
        deque.enqueue_tail(counter.clone());
    }

    drop(deque.dequeue_head());
    drop(deque.dequeue_tail());
    assert_eq!(counter.drops(), 2);

    deque.clear();
    assert_eq!(counter.drops(), 8, "Clearing the deque should drop its values.");

    let mut queue = Queue::new();
    for _ in 0..3 {
        queue.enqueue(counter.clone());
    }
    drop(queue);
    assert_eq!(counter.drops(), 11, "Dropping the queue should drop its values.");
}
