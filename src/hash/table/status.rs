use crate::status::status_enum;

status_enum! {
    /// The outcome of the last call to [`HashTable::seek`](super::HashTable::seek).
    pub enum SeekStatus {
        /// The table holds no values. Only reported by strategies which signal emptiness, such as
        /// [`LinearProbe`](super::LinearProbe).
        Empty => Empty,
        /// No value was provided.
        IsNone => IsNone,
    }
}

status_enum! {
    /// The outcome of the last call to [`HashTable::put`](super::HashTable::put) or
    /// [`PowerSet::put`](crate::hash::PowerSet::put).
    pub enum PutStatus {
        /// No value was provided.
        IsNone => IsNone,
        /// There was no free slot for a new value.
        Fail => Fail,
        /// The value is already a member of the set. Only reported by
        /// [`PowerSet`](crate::hash::PowerSet).
        Exists => Exists,
    }
}

status_enum! {
    /// The outcome of the last call to [`HashTable::remove`](super::HashTable::remove).
    pub enum RemoveStatus {
        /// No value was provided.
        IsNone => IsNone,
        /// The table holds no values. Only reported by strategies which signal emptiness, such as
        /// [`LinearProbe`](super::LinearProbe), others report `NotFound` instead.
        Empty => Empty,
        /// The value isn't present in the table.
        NotFound => NotFound,
    }
}
