use std::borrow::Borrow;
use std::iter::{Flatten, FusedIterator};
use std::slice;

use crate::contiguous::Array;

const PROBE_STEP: usize = 1;

/// A value stored in a hash table, along with the number of times it has been inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub(crate) hash: u64,
    pub(crate) value: T,
    pub(crate) count: usize,
}

impl<T> Entry<T> {
    pub(crate) const fn new(hash: u64, value: T) -> Entry<T> {
        Entry {
            hash,
            value,
            count: 1,
        }
    }

    /// Returns a reference to the stored value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of times the value has been inserted without being removed. This is
    /// always at least 1.
    pub const fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn matches<Q>(&self, hash: u64, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.hash == hash && self.value.borrow() == value
    }
}

/// The collision handling strategy of a [`HashTable`](super::HashTable).
///
/// A Storage owns a fixed number of slots and places [`Entry`]s in them based on their cached
/// hash. It never resizes, and doesn't keep track of occurrence counts or lengths, which are the
/// responsibility of the table.
pub trait Storage<T> {
    /// Whether a table using this strategy reports `Empty` (rather than running the query) for
    /// seeks and removals while it holds no entries.
    const SIGNALS_EMPTY: bool;

    /// A borrowed iterator over every stored entry.
    type Iter<'a>: Iterator<Item = &'a Entry<T>> + FusedIterator
    where
        Self: 'a,
        T: 'a;

    /// Creates a new Storage with `cap` empty slots.
    fn with_cap(cap: usize) -> Self;

    /// Returns the number of slots.
    fn cap(&self) -> usize;

    /// Returns the entry holding `value`, if there is one.
    fn find<Q>(&self, hash: u64, value: &Q) -> Option<&Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized;

    /// Returns a mutable reference to the entry holding `value`, if there is one.
    fn find_mut<Q>(&mut self, hash: u64, value: &Q) -> Option<&mut Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized;

    /// Places an entry whose value isn't already stored, handing it back if there is no room.
    fn insert(&mut self, entry: Entry<T>) -> Result<(), Entry<T>>;

    /// Removes and returns the entry holding `value`, if there is one.
    fn take<Q>(&mut self, hash: u64, value: &Q) -> Option<Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized;

    /// Returns an iterator over every stored entry.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Calculates the ideal slot for `hash`, or None if there are no slots.
fn home(hash: u64, cap: usize) -> Option<usize> {
    hash.checked_rem(cap as u64).map(|i| i as usize)
}

/// Open addressing: every slot holds at most one entry, and collisions are resolved by probing
/// the following slots (wrapping at the capacity) until a suitable one is found.
///
/// An insertion fails once every slot is taken. Removal re-seats the rest of the probe cluster,
/// so no tombstones are needed.
pub struct LinearProbe<T> {
    slots: Array<Option<Entry<T>>>,
}

impl<T> LinearProbe<T> {
    /// Finds the slot holding `value`, or the first empty slot on its probe sequence. Returns None
    /// if the probe sequence returns to its start without finding either.
    fn probe<Q>(&self, hash: u64, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.probe_by(hash, |entry| entry.matches(hash, value))
    }

    /// Finds the first empty slot on the probe sequence for `hash`.
    fn vacant(&self, hash: u64) -> Option<usize> {
        self.probe_by(hash, |_| false)
    }

    fn probe_by<F: Fn(&Entry<T>) -> bool>(&self, hash: u64, stop_at: F) -> Option<usize> {
        let cap = self.slots.size();
        let start = home(hash, cap)?;
        let mut index = start;

        loop {
            match &self.slots[index] {
                Some(entry) if !stop_at(entry) => (),
                _ => return Some(index),
            }

            index = (index + PROBE_STEP) % cap;
            if index == start {
                return None;
            }
        }
    }
}

impl<T> Storage<T> for LinearProbe<T> {
    const SIGNALS_EMPTY: bool = true;

    type Iter<'a> = Flatten<slice::Iter<'a, Option<Entry<T>>>>
    where
        Self: 'a,
        T: 'a;

    fn with_cap(cap: usize) -> Self {
        LinearProbe {
            slots: Array::repeat_with(|| None, cap),
        }
    }

    fn cap(&self) -> usize {
        self.slots.size()
    }

    fn find<Q>(&self, hash: u64, value: &Q) -> Option<&Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.probe(hash, value)?;
        self.slots[index].as_ref()
    }

    fn find_mut<Q>(&mut self, hash: u64, value: &Q) -> Option<&mut Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.probe(hash, value)?;
        self.slots[index].as_mut()
    }

    fn insert(&mut self, entry: Entry<T>) -> Result<(), Entry<T>> {
        match self.vacant(entry.hash) {
            Some(index) => {
                self.slots[index] = Some(entry);
                Ok(())
            },
            None => Err(entry),
        }
    }

    fn take<Q>(&mut self, hash: u64, value: &Q) -> Option<Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.probe(hash, value)?;
        let removed = self.slots[index].take()?;

        // Every entry in the cluster after the removed one may have probed past index, so it is
        // placed again from its home slot. The cluster ends at the first empty slot.
        let cap = self.slots.size();
        let mut next = (index + PROBE_STEP) % cap;
        while next != index {
            let Some(entry) = self.slots[next].take() else {
                break;
            };

            // The slot at next has just been emptied, so there is always room.
            if let Err(entry) = self.insert(entry) {
                self.slots[next] = Some(entry);
            }

            next = (next + PROBE_STEP) % cap;
        }

        Some(removed)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.slots.iter().flatten()
    }
}

pub(crate) type Chain<T> = Option<Box<Link<T>>>;

pub(crate) struct Link<T> {
    entry: Entry<T>,
    next: Chain<T>,
}

/// Separate chaining: every slot holds an ordered chain of entries whose hashes share that slot.
///
/// Probing degenerates to a scan of a single chain, and an insertion never fails as long as there
/// is at least one slot.
pub struct Chained<T> {
    buckets: Array<Chain<T>>,
}

impl<T> Storage<T> for Chained<T> {
    const SIGNALS_EMPTY: bool = false;

    type Iter<'a> = ChainedIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn with_cap(cap: usize) -> Self {
        Chained {
            buckets: Array::repeat_with(|| None, cap),
        }
    }

    fn cap(&self) -> usize {
        self.buckets.size()
    }

    fn find<Q>(&self, hash: u64, value: &Q) -> Option<&Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = self.buckets[home(hash, self.cap())?].as_deref();

        while let Some(current) = link {
            if current.entry.matches(hash, value) {
                return Some(&current.entry);
            }
            link = current.next.as_deref();
        }

        None
    }

    fn find_mut<Q>(&mut self, hash: u64, value: &Q) -> Option<&mut Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = home(hash, self.cap())?;
        let mut link = self.buckets[index].as_deref_mut();

        while let Some(current) = link {
            if current.entry.matches(hash, value) {
                return Some(&mut current.entry);
            }
            link = current.next.as_deref_mut();
        }

        None
    }

    fn insert(&mut self, entry: Entry<T>) -> Result<(), Entry<T>> {
        let Some(index) = home(entry.hash, self.cap()) else {
            return Err(entry);
        };

        // Walk to the end of the chain, so that entries keep their insertion order.
        let mut slot = &mut self.buckets[index];
        while let Some(link) = slot {
            slot = &mut link.next;
        }

        *slot = Some(Box::new(Link {
            entry,
            next: None,
        }));
        Ok(())
    }

    fn take<Q>(&mut self, hash: u64, value: &Q) -> Option<Entry<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = home(hash, self.cap())?;

        let mut slot = &mut self.buckets[index];
        while slot.as_ref().is_some_and(|link| !link.entry.matches(hash, value)) {
            slot = &mut slot.as_mut()?.next;
        }

        // Unlink the matching entry, joining its neighbours.
        let mut link = slot.take()?;
        *slot = link.next.take();
        Some(link.entry)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ChainedIter {
            buckets: self.buckets.iter(),
            link: None,
        }
    }
}

impl<T> Drop for Chained<T> {
    fn drop(&mut self) {
        // Unlink chains iteratively rather than letting each Box drop its successor recursively.
        for bucket in self.buckets.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut current) = link {
                link = current.next.take();
            }
        }
    }
}

/// A borrowed iterator over the entries of a [`Chained`] storage, bucket by bucket.
pub struct ChainedIter<'a, T> {
    buckets: slice::Iter<'a, Chain<T>>,
    link: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for ChainedIter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.link {
                self.link = current.next.as_deref();
                return Some(&current.entry);
            }
            self.link = self.buckets.next()?.as_deref();
        }
    }
}

impl<T> FusedIterator for ChainedIter<'_, T> {}
