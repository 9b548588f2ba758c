//! Support for structured values.
//!
//! The serializer only knows primitives. A structured value is written by
//! writing its fields one by one, and read back by reading the same fields in
//! the same order. The wire form of a composite is the concatenation of its
//! fields' encodings, with no tag, length or padding in between. Composites
//! nest: a field may itself be a composite, in which case its own fields are
//! flattened into the output in place.
//!
//! Implement [`Composite`] for your type to use it with
//! [`Serializer::write_composite`] and [`Deserializer::read_composite`]:
//!
//! ```
//! use quickbin::composite::Composite;
//! use quickbin::deserialize::Deserializer;
//! use quickbin::error::Error;
//! use quickbin::serialize::Serializer;
//!
//! #[derive(Debug, PartialEq)]
//! struct Color32 {
//!     r: u8,
//!     g: u8,
//!     b: u8,
//!     a: u8,
//! }
//!
//! impl Composite for Color32 {
//!     fn write_fields<'s>(&self, s: &'s mut Serializer) -> Result<&'s mut Serializer, Error> {
//!         s.write(self.r)?.write(self.g)?.write(self.b)?.write(self.a)
//!     }
//!
//!     fn read_fields<Buffer: AsRef<[u8]>>(d: &mut Deserializer<Buffer>) -> Result<Self, Error> {
//!         Ok(Self { r: d.read()?, g: d.read()?, b: d.read()?, a: d.read()? })
//!     }
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let color = Color32 { r: 255, g: 0, b: 128, a: 64 };
//! let mut serializer = Serializer::new();
//! serializer.write_composite(&color)?;
//! assert_eq!(serializer.as_bytes(), &[0xFF, 0x00, 0x80, 0x40]);
//!
//! let mut deserializer = Deserializer::new(serializer.take());
//! assert_eq!(deserializer.read_composite::<Color32>()?, color);
//! # Ok(())
//! # }
//! ```

use crate::deserialize::Deserializer;
use crate::error::Error;
use crate::serialize::Serializer;

/// A structured value that is written and read as a fixed sequence of fields.
///
/// The two functions must visit the same fields in the same order; nothing
/// checks this at runtime. Reading a composite is not atomic: if a field
/// fails to read, the fields before it have already been consumed, and the
/// whole composite must be considered lost.
pub trait Composite: Sized {
    /// Write every field of `self` into the `serializer`, in declaration order.
    fn write_fields<'s>(&self, serializer: &'s mut Serializer) -> Result<&'s mut Serializer, Error>;

    /// Read every field from the `deserializer`, in declaration order, and
    /// assemble the value.
    fn read_fields<Buffer: AsRef<[u8]>>(deserializer: &mut Deserializer<Buffer>) -> Result<Self, Error>;
}
