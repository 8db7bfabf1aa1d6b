//! A module containing [`DynamicArray`] and its status types.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod status;

pub use dynamic_array::*;
pub use status::*;
