use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Link;

/// An iterator over the values of a linked collection, from head to tail.
pub struct Iter<'a, T> {
    next: Link<T>,
    len: usize,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(head: Link<T>, len: usize) -> Iter<'a, T> {
        Iter {
            next: head,
            len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.len -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter::<T>::new(self.next, self.len))
            .finish()
    }
}
