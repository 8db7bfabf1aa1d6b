use std::borrow::Borrow;
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use tracing::debug;

use super::{Entry, Iter, LinearProbe, PutStatus, RemoveStatus, SeekStatus, Storage};
use crate::hash::CharSum;

/// The capacity of a HashTable created with [`HashTable::new`].
pub const DEFAULT_CAP: usize = 21;

/// A multiset of values which relies on the values implementing [`Hash`] and [`Eq`].
///
/// Putting a value which is already present doesn't store it again, instead its occurrence count
/// is incremented, and all copies share a single slot. [`len`](HashTable::len) counts unique
/// values. Removing a value decrements its count, and only frees the slot once the count reaches
/// zero.
///
/// The capacity is fixed at construction and the table never resizes. How collisions are handled
/// is decided by the [`Storage`] parameter `S`: [`LinearProbe`] (the default) fails to put new
/// values once every slot is taken, while [`Chained`](super::Chained) keeps accepting values by
/// chaining them within a slot.
///
/// Rather than panicking, every operation records its outcome, which can be read back with
/// [`seek_status`](HashTable::seek_status), [`put_status`](HashTable::put_status) and
/// [`remove_status`](HashTable::remove_status). Values are passed as [`Option`]s so that a missing
/// value can be reported as `IsNone`.
///
/// It is a logic error for values in a HashTable to be manipulated in a way that changes their
/// hash. Because of this, HashTable's API prevents mutable access to its values.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of unique values in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `seek` | `O(1)`* |
/// | `put` | `O(1)`* |
/// | `remove` | `O(1)`* |
///
/// \* In the event of a hash collision, these functions will take additional time while the
/// matching entry is found, up to `O(n)`.
///
/// # Examples
/// ```
/// # use status_adt::hash::HashTable;
/// # use status_adt::hash::table::{PutStatus, SeekStatus};
/// let mut table: HashTable<String> = HashTable::with_cap(5);
/// table.put(String::from("abc"));
/// table.put(String::from("abc"));
/// assert_eq!(table.put_status(), PutStatus::Ok);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.count("abc"), 2);
///
/// assert!(table.seek(Some("abc")));
/// assert!(!table.seek(None::<&str>));
/// assert_eq!(table.seek_status(), SeekStatus::IsNone);
/// ```
pub struct HashTable<T, S = LinearProbe<T>, B = CharSum> {
    pub(crate) storage: S,
    pub(crate) len: usize,
    pub(crate) hasher: B,
    seek_status: Cell<SeekStatus>,
    put_status: PutStatus,
    remove_status: RemoveStatus,
    _phantom: PhantomData<T>,
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher + Default> HashTable<T, S, B> {
    /// Creates a new HashTable with a capacity of [`DEFAULT_CAP`] and the default hasher.
    pub fn new() -> HashTable<T, S, B> {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashTable with the provided `cap`acity and the default hasher.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> HashTable<T, S, B> {
        HashTable::with_cap_and_hasher(cap, B::default())
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher> HashTable<T, S, B> {
    /// Creates a new HashTable with the provided `cap`acity and `hasher`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashTable<T, S, B> {
        HashTable {
            storage: S::with_cap(cap),
            len: 0,
            hasher,
            seek_status: Cell::new(SeekStatus::Nil),
            put_status: PutStatus::Nil,
            remove_status: RemoveStatus::Nil,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of unique values in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the HashTable.
    pub fn cap(&self) -> usize {
        self.storage.cap()
    }

    /// Returns the hasher used by the HashTable.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns true if the HashTable contains at least one copy of `value`.
    ///
    /// Records [`SeekStatus::IsNone`] if `value` is None, or [`SeekStatus::Empty`] if the table is
    /// empty and `S` signals emptiness. In both cases, false is returned.
    pub fn seek<Q>(&self, value: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(value) = value else {
            self.seek_status.set(SeekStatus::IsNone);
            return false;
        };

        if S::SIGNALS_EMPTY && self.len == 0 {
            self.seek_status.set(SeekStatus::Empty);
            return false;
        }

        self.seek_status.set(SeekStatus::Ok);
        self.storage.find(self.hasher.hash_one(value), value).is_some()
    }

    /// Puts a copy of `value` into the HashTable. If an equal value is already present, its
    /// occurrence count is incremented instead and no capacity is consumed.
    ///
    /// Records [`PutStatus::IsNone`] if `value` is None, or [`PutStatus::Fail`] if there is no
    /// free slot for a new value.
    pub fn put(&mut self, value: impl Into<Option<T>>) {
        let Some(value) = value.into() else {
            self.put_status = PutStatus::IsNone;
            return;
        };

        let hash = self.hasher.hash_one(&value);
        if let Some(entry) = self.storage.find_mut(hash, &value) {
            entry.count += 1;
            self.put_status = PutStatus::Ok;
            return;
        }

        self.put_status = self.insert_unique(hash, value);
    }

    /// Removes a single copy of `value` from the HashTable. The value's slot is only freed once
    /// its last copy has been removed.
    ///
    /// Records [`RemoveStatus::IsNone`] if `value` is None, or [`RemoveStatus::NotFound`] if there
    /// is no copy to remove. If the table is empty and `S` signals emptiness,
    /// [`RemoveStatus::Empty`] is recorded instead.
    pub fn remove<Q>(&mut self, value: Option<&Q>)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(value) = value else {
            self.remove_status = RemoveStatus::IsNone;
            return;
        };

        if self.len == 0 {
            self.remove_status = if S::SIGNALS_EMPTY {
                RemoveStatus::Empty
            } else {
                RemoveStatus::NotFound
            };
            return;
        }

        let hash = self.hasher.hash_one(value);
        let remaining = match self.storage.find_mut(hash, value) {
            Some(entry) => {
                entry.count -= 1;
                entry.count
            },
            None => {
                self.remove_status = RemoveStatus::NotFound;
                return;
            },
        };

        if remaining == 0 {
            self.storage.take(hash, value);
            self.len -= 1;
        }

        self.remove_status = RemoveStatus::Ok;
    }

    /// Returns the number of copies of `value` in the HashTable, which is 0 if it isn't present.
    /// Unlike [`seek`](HashTable::seek), this doesn't record a status.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage
            .find(self.hasher.hash_one(value), value)
            .map_or(0, Entry::count)
    }

    /// Returns an iterator over every unique value in the HashTable, along with its occurrence
    /// count.
    pub fn iter(&self) -> Iter<'_, T, S> {
        self.into_iter()
    }

    /// Returns the outcome of the last call to [`seek`](HashTable::seek).
    pub fn seek_status(&self) -> SeekStatus {
        self.seek_status.get()
    }

    /// Returns the outcome of the last call to [`put`](HashTable::put).
    pub const fn put_status(&self) -> PutStatus {
        self.put_status
    }

    /// Returns the outcome of the last call to [`remove`](HashTable::remove).
    pub const fn remove_status(&self) -> RemoveStatus {
        self.remove_status
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher> HashTable<T, S, B> {
    /// Stores `value`, which is known not to be present, as a new entry.
    pub(crate) fn insert_unique(&mut self, hash: u64, value: T) -> PutStatus {
        match self.storage.insert(Entry::new(hash, value)) {
            Ok(()) => {
                self.len += 1;
                PutStatus::Ok
            },
            Err(_) => {
                debug!(cap = self.cap(), len = self.len, "no free slot left in hash table");
                PutStatus::Fail
            },
        }
    }

    pub(crate) const fn set_put_status(&mut self, status: PutStatus) {
        self.put_status = status;
    }
}

impl<T: Hash + Eq, S: Storage<T>, B: BuildHasher + Default> Default for HashTable<T, S, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, B> Debug for HashTable<T, S, B>
where
    T: Hash + Eq + Debug,
    S: Storage<T>,
    B: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
