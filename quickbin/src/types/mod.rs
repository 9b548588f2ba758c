//! The closed set of primitives the serializer and deserializer understand.

mod boolean;
mod number;
mod text;

/// Keeps [`crate::serialize::Encode`] and [`crate::deserialize::Decode`]
/// from being implemented outside this crate.
pub trait Sealed {}

impl<T: Sealed + ?Sized> Sealed for &T {}
