use crate::status::status_enum;

status_enum! {
    /// The outcome of the last call to [`CursorList::head`](super::CursorList::head).
    pub enum HeadStatus {
        /// The list contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::tail`](super::CursorList::tail).
    pub enum TailStatus {
        /// The list contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::right`](super::CursorList::right).
    pub enum RightStatus {
        /// The list contains no values.
        Empty => Empty,
        /// The cursor is already at the tail.
        NoRight => OutOfBounds,
    }
}

status_enum! {
    /// The outcome of the last call to [`TwoWayList::left`](super::CursorList::left).
    pub enum LeftStatus {
        /// The list contains no values.
        Empty => Empty,
        /// The cursor is already at the head.
        NoLeft => OutOfBounds,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::put_left`](super::CursorList::put_left).
    pub enum PutLeftStatus {
        /// The list contains no values, so there is no cursor to insert beside.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::put_right`](super::CursorList::put_right).
    pub enum PutRightStatus {
        /// The list contains no values, so there is no cursor to insert beside.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::remove`](super::CursorList::remove).
    pub enum RemoveStatus {
        /// The list contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::replace`](super::CursorList::replace).
    pub enum ReplaceStatus {
        /// The list contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::get`](super::CursorList::get).
    pub enum GetStatus {
        /// The list contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`CursorList::find`](super::CursorList::find).
    pub enum FindStatus {
        /// The list contains no values.
        Empty => Empty,
        /// No node after the cursor holds the value.
        NotFound => NotFound,
    }
}
