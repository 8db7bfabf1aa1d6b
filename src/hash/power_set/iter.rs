use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::PowerSet;
use crate::hash::table::{self, Storage};

impl<'a, T: Hash + Eq, S: Storage<T>, B: BuildHasher> IntoIterator for &'a PowerSet<T, S, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.table.iter())
    }
}

/// A type for borrowed iteration over a [`PowerSet`]. Produces values of type `&T`.
///
/// See [`PowerSet::iter`].
pub struct Iter<'a, T: 'a, S: Storage<T> + 'a>(pub(crate) table::Iter<'a, T, S>);

impl<'a, T: 'a, S: Storage<T> + 'a> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: 'a, S: Storage<T> + 'a> ExactSizeIterator for Iter<'a, T, S> {}

impl<'a, T: 'a, S: Storage<T> + 'a> FusedIterator for Iter<'a, T, S> {}
