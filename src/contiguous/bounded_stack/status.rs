use crate::status::status_enum;

status_enum! {
    /// The outcome of the last call to [`BoundedStack::push`](super::BoundedStack::push).
    pub enum PushStatus {
        /// The stack already holds as many values as its bound allows.
        Full => Full,
    }
}

status_enum! {
    /// The outcome of the last call to [`BoundedStack::pop`](super::BoundedStack::pop).
    pub enum PopStatus {
        /// The stack contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`BoundedStack::peek`](super::BoundedStack::peek).
    pub enum PeekStatus {
        /// The stack contains no values.
        Empty => Empty,
    }
}
