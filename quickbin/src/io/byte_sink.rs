use crate::error::{Error, ErrorKind};
use alloc::vec::Vec;
use log::{debug, trace};

/// The smallest capacity the sink allocates when it first grows.
const MIN_CAPACITY: usize = 16;

/// An append-only in-memory buffer that grows on demand.
///
/// When an append does not fit the current capacity, the capacity is doubled
/// (or raised to exactly what is needed, if that is more). Growth goes through
/// [`Vec::try_reserve_exact`], so running out of memory is reported as
/// [`ErrorKind::Allocation`] instead of aborting. Bytes already in the sink are
/// never moved relative to each other or dropped by growth.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteSink {
    buffer: Vec<u8>,
}

impl ByteSink {
    /// Create a sink with a zero-sized buffer.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a sink that can hold at least `capacity` bytes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut sink = Self::new();
        sink.buffer.try_reserve_exact(capacity).map_err(|_| allocation_failed(capacity))?;
        Ok(sink)
    }

    /// The number of bytes appended so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The number of bytes the sink can hold before it has to reallocate.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// View the bytes appended so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Take the buffer of the sink.
    pub fn take(self) -> Vec<u8> {
        self.buffer
    }

    /// Make room for `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let len = self.buffer.len();
        let required = len.checked_add(additional).ok_or_else(|| allocation_failed(usize::MAX))?;
        let capacity = self.buffer.capacity();
        if required <= capacity {
            return Ok(());
        }
        let doubled = core::cmp::max(capacity.saturating_mul(2), MIN_CAPACITY);
        let target = core::cmp::max(doubled, required);
        if self.buffer.try_reserve_exact(target - len).is_err() {
            // Doubling may be too greedy near the limit; settle for the exact size.
            self.buffer.try_reserve_exact(additional).map_err(|_| allocation_failed(required))?;
        }
        trace!("byte sink grew from {capacity} to {} bytes", self.buffer.capacity());
        Ok(())
    }

    /// Append `bytes` at the end of the sink.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.reserve(bytes.len())?;
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Run `append` and drop whatever it appended if it fails.
    pub(crate) fn atomic<T>(&mut self, append: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        let len = self.buffer.len();
        let result = append(self);
        if result.is_err() {
            self.buffer.truncate(len);
        }
        result
    }
}

fn allocation_failed(requested: usize) -> Error {
    debug!("byte sink could not allocate {requested} bytes");
    ErrorKind::Allocation { requested }.into()
}

impl From<Vec<u8>> for ByteSink {
    /// Continue appending after the bytes already in the vector.
    fn from(value: Vec<u8>) -> Self {
        Self { buffer: value }
    }
}
