use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::{HashTable, Storage};

impl<'a, T: Hash + Eq, S: Storage<T>, B: BuildHasher> IntoIterator for &'a HashTable<T, S, B> {
    type Item = (&'a T, usize);

    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.storage.iter(),
            remaining: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`HashTable`]. Produces each unique value as a `&T`,
/// along with its occurrence count.
///
/// See [`HashTable::iter`].
pub struct Iter<'a, T: 'a, S: Storage<T> + 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) remaining: usize,
}

impl<'a, T: 'a, S: Storage<T> + 'a> Iterator for Iter<'a, T, S> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some((entry.value(), entry.count()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S: Storage<T> + 'a> ExactSizeIterator for Iter<'a, T, S> {}

impl<'a, T: 'a, S: Storage<T> + 'a> FusedIterator for Iter<'a, T, S> {}
