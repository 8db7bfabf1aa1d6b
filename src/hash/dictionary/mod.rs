//! A module containing [`NativeDictionary`] and its status types.
//!
//! [`NativeDictionary`] is also re-exported under the parent module.

mod native_dictionary;
mod status;
mod tests;

pub use native_dictionary::*;
pub use status::*;
