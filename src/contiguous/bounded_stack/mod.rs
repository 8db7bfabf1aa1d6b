//! A module containing [`BoundedStack`] and its status types.
//!
//! [`BoundedStack`] is also re-exported under the parent module.

mod bounded_stack;
mod status;
mod tests;

pub use bounded_stack::*;
pub use status::*;
