use crate::error::Error;
use crate::io::ByteSink;
use crate::types::Sealed;

/// A primitive that can be written by a [`crate::serialize::Serializer`].
///
/// The set of primitives is closed: this trait is sealed and implemented for
/// [`bool`], the fixed-width integers, [`f32`], [`f64`], [`char`], [`str`]
/// and [`String`](alloc::string::String), plus references to any of them.
/// Structured values are written field by field through
/// [`crate::composite::Composite`] instead.
pub trait Encode: Sealed {
    /// Append the wire representation of the value to the `sink`.
    ///
    /// On failure, the bytes appended by this call may remain in the sink;
    /// the serializer is responsible for removing them.
    fn encode(&self, sink: &mut ByteSink) -> Result<(), Error>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, sink: &mut ByteSink) -> Result<(), Error> {
        (**self).encode(sink)
    }
}
