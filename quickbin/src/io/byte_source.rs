use crate::error::{Error, ErrorKind};
use log::debug;

/// A fixed sequence of bytes with a read cursor.
///
/// You may pass a vector, an array, or a borrowed slice. The bytes are never
/// modified; only the cursor moves. Reads that would run past the end of the
/// buffer fail with [`ErrorKind::Underflow`] and leave the cursor in place.
#[derive(Debug, Clone)]
pub struct ByteSource<Buffer> {
    buffer: Buffer,
    cursor: usize,
}

impl<Buffer> ByteSource<Buffer> {
    /// Create a source that reads `buffer` from its beginning.
    pub fn new(buffer: Buffer) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// The offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Take the buffer of the source.
    pub fn take(self) -> Buffer {
        self.buffer
    }
}

impl<Buffer: AsRef<[u8]>> ByteSource<Buffer> {
    /// The total number of bytes in the source, read or not.
    pub fn len(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Whether the source holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of bytes between the cursor and the end of the source.
    pub fn remaining(&self) -> usize {
        self.len() - self.cursor
    }

    /// Consume the next `width` bytes.
    pub fn read(&mut self, width: usize) -> Result<&[u8], Error> {
        let remaining = self.remaining();
        if width > remaining {
            debug!("byte source underflow at offset {}: need {width}, have {remaining}", self.cursor);
            return Err(ErrorKind::Underflow { required: width, remaining }.into());
        }
        let start = self.cursor;
        self.cursor += width;
        Ok(&self.buffer.as_ref()[start..self.cursor])
    }

    /// Consume the next `N` bytes into an array.
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.read(N)?);
        Ok(bytes)
    }

    /// Run `read` and put the cursor back where it was if it fails.
    pub(crate) fn atomic<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        let cursor = self.cursor;
        let result = read(self);
        if result.is_err() {
            self.cursor = cursor;
        }
        result
    }
}
