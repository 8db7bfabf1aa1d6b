use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, Sub};

use super::Iter;
use crate::hash::CharSum;
use crate::hash::table::{
    Chained, DEFAULT_CAP, HashTable, PutStatus, RemoveStatus, SeekStatus, Storage,
};

/// A set of unique values which relies on the values implementing [`Hash`] and [`Eq`], built on a
/// [`HashTable`].
///
/// Unlike a HashTable, putting a value which is already a member is rejected with
/// [`PutStatus::Exists`], so every value has an occurrence count of exactly 1. On top of the
/// table's operations, a PowerSet provides [`intersection`](PowerSet::intersection),
/// [`union`](PowerSet::union) and [`difference`](PowerSet::difference), each of which produces a
/// new set without modifying its inputs.
///
/// The default storage is [`Chained`], so a PowerSet keeps accepting values after every slot has
/// been used, at the cost of longer scans.
///
/// # Examples
/// ```
/// # use status_adt::hash::PowerSet;
/// # use status_adt::hash::table::PutStatus;
/// let mut a: PowerSet<u32> = PowerSet::with_cap(10);
/// let mut b: PowerSet<u32> = PowerSet::with_cap(10);
/// for i in 0..6 {
///     a.put(i);
/// }
/// for i in 3..9 {
///     b.put(i);
/// }
///
/// a.put(0);
/// assert_eq!(a.put_status(), PutStatus::Exists);
///
/// assert_eq!((&a & &b).len(), 3);
/// assert_eq!((&a | &b).len(), 9);
/// assert_eq!((&a - &b).len(), 3);
/// assert!((&a | &b).is_subset(&a));
/// ```
pub struct PowerSet<T, S = Chained<T>, B = CharSum> {
    pub(crate) table: HashTable<T, S, B>,
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher + Default> PowerSet<T, S, B> {
    /// Creates a new PowerSet with a capacity of [`DEFAULT_CAP`] and the default hasher.
    pub fn new() -> PowerSet<T, S, B> {
        PowerSet::with_cap(DEFAULT_CAP)
    }

    /// Creates a new PowerSet with the provided `cap`acity and the default hasher.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> PowerSet<T, S, B> {
        PowerSet {
            table: HashTable::with_cap(cap),
        }
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher> PowerSet<T, S, B> {
    /// Creates a new PowerSet with the provided `cap`acity and `hasher`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> PowerSet<T, S, B> {
        PowerSet {
            table: HashTable::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of values in the PowerSet.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the PowerSet contains no values.
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the capacity of the PowerSet.
    pub fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Puts `value` into the PowerSet, unless it is already a member.
    ///
    /// Records [`PutStatus::IsNone`] if `value` is None, [`PutStatus::Exists`] if an equal value is
    /// already a member (leaving the set unchanged), or [`PutStatus::Fail`] if there is no free slot
    /// for it. The membership check is a [`seek`](PowerSet::seek), so
    /// [`seek_status`](PowerSet::seek_status) reports on it afterwards.
    pub fn put(&mut self, value: impl Into<Option<T>>) {
        let Some(value) = value.into() else {
            self.table.set_put_status(PutStatus::IsNone);
            return;
        };

        if self.table.seek(Some(&value)) {
            self.table.set_put_status(PutStatus::Exists);
            return;
        }

        let hash = self.table.hasher.hash_one(&value);
        let status = self.table.insert_unique(hash, value);
        self.table.set_put_status(status);
    }

    /// Returns true if `value` is a member of the PowerSet. See [`HashTable::seek`].
    pub fn seek<Q>(&self, value: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.seek(value)
    }

    /// Removes `value` from the PowerSet. See [`HashTable::remove`].
    pub fn remove<Q>(&mut self, value: Option<&Q>)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(value)
    }

    /// Returns true if `value` is a member of the PowerSet. Unlike [`seek`](PowerSet::seek), this
    /// doesn't record a status.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.count(value) != 0
    }

    /// Returns true if every member of `other` is also a member of self, that is, if `other` is a
    /// subset of self. Two empty sets are subsets of each other.
    pub fn is_subset<S2: Storage<T>, B2: BuildHasher>(&self, other: &PowerSet<T, S2, B2>) -> bool {
        other.iter().all(|value| self.contains(value))
    }

    /// Returns an iterator over every value in the PowerSet.
    pub fn iter(&self) -> Iter<'_, T, S> {
        self.into_iter()
    }

    /// Returns the outcome of the last call to [`seek`](PowerSet::seek).
    pub fn seek_status(&self) -> SeekStatus {
        self.table.seek_status()
    }

    /// Returns the outcome of the last call to [`put`](PowerSet::put).
    pub const fn put_status(&self) -> PutStatus {
        self.table.put_status()
    }

    /// Returns the outcome of the last call to [`remove`](PowerSet::remove).
    pub const fn remove_status(&self) -> RemoveStatus {
        self.table.remove_status()
    }
}

impl<T: Hash + Eq + Clone, S: Storage<T>, B: BuildHasher + Clone> PowerSet<T, S, B> {
    /// Creates a new PowerSet containing the values that are members of both self and `other`. Its
    /// capacity is the smaller of the two capacities.
    pub fn intersection(&self, other: &PowerSet<T, S, B>) -> PowerSet<T, S, B> {
        let mut result = self.empty_sibling(self.cap().min(other.cap()));
        for value in self.iter().filter(|value| other.contains(*value)) {
            result.put(value.clone());
        }
        result
    }

    /// Creates a new PowerSet containing the values that are members of self, `other` or both. Its
    /// capacity is the sum of the two capacities.
    pub fn union(&self, other: &PowerSet<T, S, B>) -> PowerSet<T, S, B> {
        let mut result = self.empty_sibling(self.cap() + other.cap());
        for value in self.iter().chain(other.iter()) {
            result.put(value.clone());
        }
        result
    }

    /// Creates a new PowerSet containing the values that are members of self but not of `other`.
    /// Its capacity is the larger of the two capacities.
    pub fn difference(&self, other: &PowerSet<T, S, B>) -> PowerSet<T, S, B> {
        let mut result = self.empty_sibling(self.cap().max(other.cap()));
        for value in self.iter() {
            result.put(value.clone());
        }
        for value in other.iter() {
            result.remove(Some(value));
        }
        result
    }

    fn empty_sibling(&self, cap: usize) -> PowerSet<T, S, B> {
        PowerSet::with_cap_and_hasher(cap, self.table.hasher().clone())
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher + Default> Default for PowerSet<T, S, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher> PartialEq for PowerSet<T, S, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher> Eq for PowerSet<T, S, B> {}

impl<T, S, B> Debug for PowerSet<T, S, B>
where
    T: Hash + Eq + Debug,
    S: Storage<T>,
    B: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S, B> BitAnd for &PowerSet<T, S, B>
where
    T: Hash + Eq + Clone,
    S: Storage<T>,
    B: BuildHasher + Clone,
{
    type Output = PowerSet<T, S, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T, S, B> BitOr for &PowerSet<T, S, B>
where
    T: Hash + Eq + Clone,
    S: Storage<T>,
    B: BuildHasher + Clone,
{
    type Output = PowerSet<T, S, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T, S, B> Sub for &PowerSet<T, S, B>
where
    T: Hash + Eq + Clone,
    S: Storage<T>,
    B: BuildHasher + Clone,
{
    type Output = PowerSet<T, S, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}
