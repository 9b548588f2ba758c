//! Errors raised by the serializer, the deserializer and their byte buffers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// The reason an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A read needs more bytes than remain between the cursor and the end
    /// of the source.
    #[error("need {required} bytes but only {remaining} remain")]
    Underflow {
        /// The width of the primitive that was being read.
        required: usize,
        /// The number of bytes left after the cursor.
        remaining: usize,
    },
    /// The value cannot be represented under the wire conventions.
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    /// The byte buffer could not grow to hold the written value.
    #[error("could not grow the buffer to {requested} bytes")]
    Allocation {
        /// The capacity that was requested from the allocator.
        requested: usize,
    },
}

/// An [`ErrorKind`] together with the path of the composite field that
/// was being processed when the error occurred.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    kind: ErrorKind,
    item: Item,
}

/// The path to a field, innermost identifier first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    path: Vec<String>,
}

//------------------------------------------------------------------------------
// Error implementations
//------------------------------------------------------------------------------

impl Error {
    /// The reason of the failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The field the error belongs to. Empty for errors raised outside of
    /// any composite.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Mark the error as having happened inside the field `ident`.
    ///
    /// Composite adapters call this on the way out, so nested composites
    /// build up the full path:
    /// ```
    /// # use quickbin::error::{Error, ErrorKind};
    /// let error = Error::from(ErrorKind::InvalidValue("out of range")).enclose("x").enclose("position");
    /// assert_eq!(error.to_string(), ".position.x: invalid value: out of range");
    /// ```
    pub fn enclose(self, ident: &str) -> Self {
        Self { kind: self.kind, item: self.item.enclose(ident) }
    }
}

impl From<ErrorKind> for Error {
    fn from(value: ErrorKind) -> Self {
        Self { kind: value, item: Item::default() }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.item.is_empty() {
            write!(f, "{}: {}", self.item, self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        let kind = match value.kind {
            ErrorKind::Underflow { .. } => std::io::ErrorKind::UnexpectedEof,
            ErrorKind::InvalidValue(_) => std::io::ErrorKind::InvalidData,
            ErrorKind::Allocation { .. } => std::io::ErrorKind::OutOfMemory,
        };
        std::io::Error::new(kind, value)
    }
}

//------------------------------------------------------------------------------
// Item implementations
//------------------------------------------------------------------------------

impl Item {
    /// Whether the path names no field at all.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Wrap the path in the field `ident`, which becomes the outermost part.
    pub fn enclose(mut self, ident: &str) -> Self {
        self.path.push(ident.to_string());
        self
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for ident in self.path.iter().rev() {
            write!(f, ".{ident}")?
        }
        Ok(())
    }
}
