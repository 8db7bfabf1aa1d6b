//! Contiguous collection types. Namely [`DynamicArray`], a growable cursor-based array, and
//! [`BoundedStack`], which is layered on top of it.
//!
//! [`Array`] also lives here, as the fixed-size allocation that backs every collection in this
//! crate. It's always available, regardless of the enabled features.
#![warn(missing_docs)]

pub mod array;
#[cfg(feature = "contiguous")]
pub mod bounded_stack;
#[cfg(feature = "contiguous")]
pub mod dynamic_array;

#[doc(inline)]
pub use array::Array;
#[cfg(feature = "contiguous")]
#[doc(inline)]
pub use bounded_stack::BoundedStack;
#[cfg(feature = "contiguous")]
#[doc(inline)]
pub use dynamic_array::DynamicArray;
