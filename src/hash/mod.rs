//! Hash-based collections: the multiset [`HashTable`], the [`PowerSet`] built on top of it and
//! the key-value [`NativeDictionary`].
//!
//! None of these collections resize. Their capacity is fixed at construction, so callers are
//! expected to choose a capacity that suits their workload.
#![warn(missing_docs)]

pub mod char_sum;
pub mod dictionary;
pub mod power_set;
pub mod table;

#[doc(inline)]
pub use char_sum::CharSum;
#[doc(inline)]
pub use dictionary::NativeDictionary;
#[doc(inline)]
pub use power_set::PowerSet;
#[doc(inline)]
pub use table::HashTable;
