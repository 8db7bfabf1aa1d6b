use crate::status::status_enum;

status_enum! {
    /// The outcome of the last call to [`Queue::get_head`](super::Queue::get_head) or
    /// [`Deque::get_head`](super::Deque::get_head).
    pub enum GetHeadStatus {
        /// The queue contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`Deque::get_tail`](super::Deque::get_tail).
    pub enum GetTailStatus {
        /// The deque contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`Queue::dequeue`](super::Queue::dequeue).
    pub enum DequeueStatus {
        /// The queue contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`Deque::dequeue_head`](super::Deque::dequeue_head).
    pub enum DequeueHeadStatus {
        /// The deque contains no values.
        Empty => Empty,
    }
}

status_enum! {
    /// The outcome of the last call to [`Deque::dequeue_tail`](super::Deque::dequeue_tail).
    pub enum DequeueTailStatus {
        /// The deque contains no values.
        Empty => Empty,
    }
}
