//! A module containing [`PowerSet`] and its iterator.
//!
//! [`PowerSet`] is also re-exported under the parent module. It shares its status types with
//! [`HashTable`](super::HashTable).

mod iter;
mod power_set;

pub use iter::*;
pub use power_set::*;
