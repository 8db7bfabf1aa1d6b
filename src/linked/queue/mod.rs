//! A module containing [`Queue`] and [`Deque`], along with their status types.
//!
//! Both are also re-exported under the parent module.

mod deque;
mod queue;
mod status;
mod tests;

pub use deque::*;
pub use queue::*;
pub use status::*;
