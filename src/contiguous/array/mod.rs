//! A module containing [`Array`], the fixed-size allocation behind every collection in this crate.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
