//! A module containing [`HashTable`], its collision handling strategies and its status types.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod hash_table;
mod iter;
mod status;
mod storage;

pub use hash_table::*;
pub use iter::*;
pub use status::*;
pub use storage::{Chained, ChainedIter, Entry, LinearProbe, Storage};
