use std::borrow::Borrow;
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::mem;

use tracing::debug;

use super::{ExistsStatus, GetStatus, PutStatus};
use crate::contiguous::Array;
use crate::hash::CharSum;

/// The capacity of a NativeDictionary created with [`NativeDictionary::new`].
pub const DEFAULT_CAP: usize = 21;

/// A fixed-capacity map from keys to values, using open addressing with linear probing. Keys must
/// implement [`Hash`] and [`Eq`].
///
/// The dictionary never resizes, so once every slot holds a key, putting a new key fails with
/// [`PutStatus::Fail`]. Putting an existing key replaces its value.
///
/// Keys are passed as [`Option`]s, and a missing key is reported through each operation's
/// `BadKey` status.
///
/// # Examples
/// ```
/// # use status_adt::hash::NativeDictionary;
/// # use status_adt::hash::dictionary::{GetStatus, PutStatus};
/// let mut dict: NativeDictionary<String, u32> = NativeDictionary::new();
/// dict.put(String::from("one"), 1);
/// dict.put(String::from("one"), 11);
/// assert_eq!(dict.put_status(), PutStatus::Ok);
///
/// assert_eq!(dict.get(Some("one")), Some(&11));
/// assert_eq!(dict.get(Some("two")), None);
/// assert_eq!(dict.get_status(), GetStatus::NotExist);
/// ```
pub struct NativeDictionary<K, V, B = CharSum> {
    slots: Array<Option<(K, V)>>,
    len: usize,
    hasher: B,
    put_status: PutStatus,
    get_status: Cell<GetStatus>,
    exists_status: Cell<ExistsStatus>,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> NativeDictionary<K, V, B> {
    /// Creates a new NativeDictionary with a capacity of [`DEFAULT_CAP`].
    pub fn new() -> NativeDictionary<K, V, B> {
        NativeDictionary::with_cap(DEFAULT_CAP)
    }

    /// Creates a new NativeDictionary with the provided `cap`acity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> NativeDictionary<K, V, B> {
        NativeDictionary::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> NativeDictionary<K, V, B> {
    /// Creates a new NativeDictionary with the provided `cap`acity and `hasher`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> NativeDictionary<K, V, B> {
        NativeDictionary {
            slots: Array::repeat_with(|| None, cap),
            len: 0,
            hasher,
            put_status: PutStatus::Nil,
            get_status: Cell::new(GetStatus::Nil),
            exists_status: Cell::new(ExistsStatus::Nil),
        }
    }

    /// Returns the number of keys in the dictionary.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dictionary contains no keys.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the dictionary.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Associates `value` with `key`, returning the previous value if the key was already
    /// present.
    ///
    /// Records [`PutStatus::BadKey`] if `key` is None, or [`PutStatus::Fail`] if the key is new and
    /// every slot is taken. In both cases, `value` is dropped.
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Option<V> {
        let Some(key) = key.into() else {
            self.put_status = PutStatus::BadKey;
            return None;
        };

        let Some(index) = self.find_index_for_key(&key) else {
            debug!(cap = self.cap(), "no free slot left in dictionary");
            self.put_status = PutStatus::Fail;
            return None;
        };

        self.put_status = PutStatus::Ok;
        match &mut self.slots[index] {
            Some(existing) => Some(mem::replace(&mut existing.1, value)),
            None => {
                self.slots[index] = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// Records [`GetStatus::BadKey`] if `key` is None, or [`GetStatus::NotExist`] if the key isn't
    /// present.
    pub fn get<Q>(&self, key: Option<&Q>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(key) = key else {
            self.get_status.set(GetStatus::BadKey);
            return None;
        };

        let found = self.find_index_for_key(key)
            .and_then(|index| self.slots[index].as_ref())
            .map(|(_, value)| value);

        self.get_status.set(match found {
            Some(_) => GetStatus::Ok,
            None => GetStatus::NotExist,
        });
        found
    }

    /// Returns true if `key` is present in the dictionary.
    ///
    /// Records [`ExistsStatus::BadKey`] if `key` is None, otherwise the query always succeeds.
    pub fn exists<Q>(&self, key: Option<&Q>) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(key) = key else {
            self.exists_status.set(ExistsStatus::BadKey);
            return false;
        };

        self.exists_status.set(ExistsStatus::Ok);
        self.find_index_for_key(key).is_some_and(|index| self.slots[index].is_some())
    }

    /// Returns the outcome of the last call to [`put`](NativeDictionary::put).
    pub const fn put_status(&self) -> PutStatus {
        self.put_status
    }

    /// Returns the outcome of the last call to [`get`](NativeDictionary::get).
    pub fn get_status(&self) -> GetStatus {
        self.get_status.get()
    }

    /// Returns the outcome of the last call to [`exists`](NativeDictionary::exists).
    pub fn exists_status(&self) -> ExistsStatus {
        self.exists_status.get()
    }

    /// Finds the slot holding `key`, or the first empty slot after its home. Returns None if the
    /// dictionary has no capacity, or if every slot holds another key.
    fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cap = self.cap();
        let mut index = (self.hasher.hash_one(key) % cap.max(1) as u64) as usize;

        for _ in 0..cap {
            match &self.slots[index] {
                Some(existing) if existing.0.borrow() != key => index = (index + 1) % cap,
                _ => return Some(index),
            }
        }

        None
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for NativeDictionary<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, B> Debug for NativeDictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().flatten().map(|(key, value)| (key, value)))
            .finish()
    }
}
