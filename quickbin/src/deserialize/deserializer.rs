use crate::composite::Composite;
use crate::deserialize::Decode;
use crate::error::Error;
use crate::io::ByteSource;

/// Reads primitives one after the other from a fixed byte buffer.
///
/// The deserializer owns its buffer and a cursor into it. Each read decodes
/// the value at the cursor and moves the cursor past it. Reads never look
/// beyond the bytes of the value being read, and a read that fails leaves the
/// cursor exactly where it was.
///
/// ```
/// # use quickbin::deserialize::Deserializer;
/// # fn main() -> Result<(), quickbin::error::Error> {
/// let mut deserializer = Deserializer::new([0x00, 0x00, 0x80, 0x3F, 0x2A]);
/// let (mut x, mut n) = (0.0f32, 0u8);
/// deserializer.read_into(&mut x)?.read_into(&mut n)?;
/// assert_eq!((x, n), (1.0, 42));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Deserializer<Buffer> {
    source: ByteSource<Buffer>,
}

impl<Buffer: AsRef<[u8]>> Deserializer<Buffer> {
    /// Create a deserializer that reads `buffer` from its beginning.
    pub fn new(buffer: Buffer) -> Self {
        Self { source: ByteSource::new(buffer) }
    }

    /// Read a primitive.
    ///
    /// ## Errors
    ///
    /// - [`crate::error::ErrorKind::Underflow`] if fewer bytes remain than the
    ///   primitive needs.
    /// - [`crate::error::ErrorKind::InvalidValue`] if the bytes have no
    ///   meaning as the primitive, like text that is not UTF-8.
    pub fn read<T: Decode>(&mut self) -> Result<T, Error> {
        self.source.atomic(T::decode)
    }

    /// Read a primitive into `out` and return the deserializer for chaining.
    ///
    /// `out` is not touched if the read fails.
    pub fn read_into<T: Decode>(&mut self, out: &mut T) -> Result<&mut Self, Error> {
        *out = self.read()?;
        Ok(self)
    }

    /// Read a structured value field by field.
    ///
    /// Unlike [`Self::read`], this is not atomic: on failure, the cursor stays
    /// past the fields that were read successfully.
    pub fn read_composite<C: Composite>(&mut self) -> Result<C, Error> {
        C::read_fields(self)
    }

    /// Read a structured value into `out` and return the deserializer for
    /// chaining.
    pub fn read_composite_into<C: Composite>(&mut self, out: &mut C) -> Result<&mut Self, Error> {
        *out = self.read_composite()?;
        Ok(self)
    }

    /// The offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// The number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.source.remaining()
    }

    /// Whether every byte of the buffer has been read.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the buffer from the deserializer.
    pub fn take(self) -> Buffer {
        self.source.take()
    }
}
