use crate::error::Error;
use crate::io::ByteSource;
use crate::types::Sealed;

/// A primitive that can be read by a [`crate::deserialize::Deserializer`].
///
/// This is the counterpart of [`crate::serialize::Encode`], implemented for
/// the same closed set of primitives. Text is read as an owned
/// [`String`](alloc::string::String).
pub trait Decode: Sized + Sealed {
    /// Consume the wire representation of a value from the `source`.
    ///
    /// On failure, the cursor of the source may have moved; the deserializer
    /// is responsible for restoring it.
    fn decode<Buffer: AsRef<[u8]>>(source: &mut ByteSource<Buffer>) -> Result<Self, Error>;
}
