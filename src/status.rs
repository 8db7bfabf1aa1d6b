//! Status codes shared by every collection in this crate.
//!
//! None of the collections here panic when a pre-condition is violated. Instead, each command or
//! query records how its last invocation went in a small enum, which can be read back with the
//! matching status query (`get_status`, `put_status` and so on). Every status enum starts out as
//! `Nil`, meaning that the operation hasn't been invoked yet.
//!
//! For callers who would rather use `?` than match on statuses, [`Status::check`] converts any
//! status into a [`Result`] with a [`StatusError`].

use std::fmt::Debug;

use derive_more::{Display, Error, IsVariant};

/// A status recorded by the last invocation of a collection operation.
pub trait Status: Copy + Eq + Debug {
    /// Converts the status into a [`Result`]. Both `Nil` and `Ok` are considered successful.
    ///
    /// # Examples
    /// ```
    /// # use status_adt::contiguous::DynamicArray;
    /// # use status_adt::status::{Status, StatusError};
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.get(), None);
    /// assert_eq!(arr.get_status().check(), Err(StatusError::Empty));
    /// ```
    fn check(self) -> Result<(), StatusError>;
}

/// The error equivalent of every failing status in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum StatusError {
    #[display("Operation requires a non-empty collection!")]
    Empty,
    #[display("Index out of bounds for the collection!")]
    OutOfBounds,
    #[display("No value was provided!")]
    IsNone,
    #[display("The requested value isn't present in the collection!")]
    NotFound,
    #[display("Unable to find a free slot for the value!")]
    Fail,
    #[display("The value is already present in the set!")]
    Exists,
    #[display("The collection has reached its upper bound!")]
    Full,
}

/// Declares a status enum with the implicit `Nil` and `Ok` variants, followed by the listed
/// failure variants and the [`StatusError`] each one maps to.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $error:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
        pub enum $name {
            /// The operation hasn't been invoked yet.
            #[default]
            Nil,
            /// The last invocation succeeded.
            Ok,
            $($(#[$variant_meta])* $variant),*
        }

        impl $crate::status::Status for $name {
            fn check(self) -> Result<(), $crate::status::StatusError> {
                match self {
                    $name::Nil | $name::Ok => Ok(()),
                    $($name::$variant => Err($crate::status::StatusError::$error)),*
                }
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use status_enum;
