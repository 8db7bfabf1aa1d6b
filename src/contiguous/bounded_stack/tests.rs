#![cfg(test)]

use super::*;

fn assert_clear<T>(stack: &BoundedStack<T>) {
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.push_status(), PushStatus::Nil);
    assert_eq!(stack.pop_status(), PopStatus::Nil);
    assert_eq!(stack.peek_status(), PeekStatus::Nil);
}

#[test]
fn test_new() {
    let stack: BoundedStack<i64> = BoundedStack::new();
    assert_eq!(stack.bound(), DEFAULT_BOUND);
    assert_clear(&stack);

    let stack: BoundedStack<i64> = BoundedStack::with_bound(42);
    assert_eq!(stack.bound(), 42);
    assert_clear(&stack);
}

#[test]
fn test_commands_and_queries() {
    let mut stack = BoundedStack::new();
    for i in 1..=DEFAULT_BOUND {
        stack.push(i);
        assert_eq!(stack.push_status(), PushStatus::Ok);
        assert_eq!(stack.len(), i);
        assert_eq!(stack.peek(), Some(&i));
        assert_eq!(stack.peek_status(), PeekStatus::Ok);
    }

    stack.push(1);
    assert_eq!(stack.push_status(), PushStatus::Full);
    assert_eq!(stack.len(), DEFAULT_BOUND, "Pushing onto a full stack should have no effect.");
    assert_eq!(stack.peek(), Some(&DEFAULT_BOUND));

    for i in (1..=DEFAULT_BOUND).rev() {
        assert_eq!(stack.pop(), Some(i));
        assert_eq!(stack.pop_status(), PopStatus::Ok);
        assert_eq!(stack.len(), i - 1);
    }

    assert_eq!(stack.pop(), None);
    assert_eq!(stack.pop_status(), PopStatus::Empty);
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.peek_status(), PeekStatus::Empty);
}

#[test]
fn test_zero_bound() {
    let mut stack = BoundedStack::with_bound(0);
    stack.push("value");
    assert_eq!(stack.push_status(), PushStatus::Full);
    assert!(stack.is_empty());
}

#[test]
fn test_clear() {
    let mut stack = BoundedStack::with_bound(4);
    stack.push('a');
    stack.push('b');
    stack.pop();
    stack.peek();

    stack.clear();
    assert_clear(&stack);
    assert_eq!(stack.bound(), 4, "Clearing should keep the bound.");
}
