use crate::status::status_enum;

status_enum! {
    /// The outcome of the last call to [`NativeDictionary::put`](super::NativeDictionary::put).
    pub enum PutStatus {
        /// No key was provided.
        BadKey => IsNone,
        /// The key wasn't present and there was no free slot for it.
        Fail => Fail,
    }
}

status_enum! {
    /// The outcome of the last call to [`NativeDictionary::get`](super::NativeDictionary::get).
    pub enum GetStatus {
        /// No key was provided.
        BadKey => IsNone,
        /// The key isn't present in the dictionary.
        NotExist => NotFound,
    }
}

status_enum! {
    /// The outcome of the last call to
    /// [`NativeDictionary::exists`](super::NativeDictionary::exists).
    pub enum ExistsStatus {
        /// No key was provided.
        BadKey => IsNone,
    }
}
