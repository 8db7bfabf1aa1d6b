//! A module containing [`CursorList`], its [`LinkedList`] and [`TwoWayList`] flavours, and their
//! status types.
//!
//! These types are also re-exported under the parent module.

mod cursor_list;
mod status;
mod tests;

pub use cursor_list::*;
pub use status::*;
