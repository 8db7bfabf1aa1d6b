use crate::status::status_enum;

status_enum! {
    /// The outcome of the last call to [`DynamicArray::set_cursor`](super::DynamicArray::set_cursor).
    pub enum SetCursorStatus {
        /// The array contains no values, so there is no valid cursor position.
        Empty => Empty,
        /// The requested index isn't within the live range of the array.
        OutOfBounds => OutOfBounds,
    }
}

status_enum! {
    /// The outcome of the last call to [`DynamicArray::get`](super::DynamicArray::get).
    pub enum GetStatus {
        /// The array contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`DynamicArray::replace`](super::DynamicArray::replace).
    pub enum ReplaceStatus {
        /// The array contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`DynamicArray::insert`](super::DynamicArray::insert).
    pub enum InsertStatus {
        /// The array contains no values, so there is no cursor to insert at.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`DynamicArray::remove`](super::DynamicArray::remove).
    pub enum RemoveStatus {
        /// The array contains no values.
        Empty => Empty,
    }
}
