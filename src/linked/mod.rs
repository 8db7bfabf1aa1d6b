//! Linked collection types. Namely [`CursorList`] (and its [`LinkedList`] and [`TwoWayList`]
//! flavours), a list which is navigated and edited through a single cursor, along with [`Queue`]
//! and [`Deque`].
//!
//! Every collection here stores its values in individually allocated, doubly linked nodes, so
//! insertion and removal at a known position never move other values.
#![warn(missing_docs)]

pub mod list;
pub mod queue;

mod iter;
mod node;

pub use iter::*;
pub(crate) use node::*;

#[doc(inline)]
pub use list::{CursorList, LinkedList, TwoWayList};
#[doc(inline)]
pub use queue::{Deque, Queue};
