use crate::composite::Composite;
use crate::error::Error;
use crate::io::ByteSink;
use crate::serialize::Encode;
use alloc::vec::Vec;

/// Writes primitives one after the other into a growing byte buffer.
///
/// Every write appends the little-endian representation of the value and
/// returns the serializer itself, so writes can be chained:
/// ```
/// # use quickbin::serialize::Serializer;
/// # fn main() -> Result<(), quickbin::error::Error> {
/// let mut serializer = Serializer::new();
/// serializer.write(1.0f32)?.write(2.0f32)?.write(3.0f32)?;
/// assert_eq!(serializer.len(), 12);
/// # Ok(())
/// # }
/// ```
///
/// The output carries no framing of any kind: no header, no type tags, no
/// overall length. It is up to the reader to request the same primitives in
/// the same order.
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    sink: ByteSink,
}

impl Serializer {
    /// Create a serializer with an empty buffer.
    pub fn new() -> Self {
        Self { sink: ByteSink::new() }
    }

    /// Create a serializer whose buffer can hold `capacity` bytes before
    /// it has to grow.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self { sink: ByteSink::with_capacity(capacity)? })
    }

    /// Append a primitive.
    ///
    /// ## Errors
    ///
    /// - [`crate::error::ErrorKind::InvalidValue`] if the value has no
    ///   encoding, like text longer than [`u32::MAX`] bytes.
    /// - [`crate::error::ErrorKind::Allocation`] if the buffer cannot grow.
    ///
    /// A failed write leaves the buffer as it was before the call.
    pub fn write<T: Encode>(&mut self, value: T) -> Result<&mut Self, Error> {
        self.sink.atomic(|sink| value.encode(sink))?;
        Ok(self)
    }

    /// Append a structured value by writing its fields in their declared order.
    ///
    /// Unlike [`Self::write`], this is not atomic: the fields written before
    /// the failing one stay in the buffer.
    pub fn write_composite<C: Composite>(&mut self, value: &C) -> Result<&mut Self, Error> {
        value.write_fields(self)?;
        Ok(self)
    }

    /// Copy the bytes written so far. The serializer keeps its buffer and can
    /// be written further.
    pub fn snapshot(&self) -> Vec<u8> {
        self.sink.as_bytes().to_vec()
    }

    /// View the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        self.sink.as_bytes()
    }

    /// Take the serialized bytes from the serializer.
    pub fn take(self) -> Vec<u8> {
        self.sink.take()
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.sink.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.sink.is_empty()
    }

    /// The number of bytes the buffer can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.sink.capacity()
    }
}
