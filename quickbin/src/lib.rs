#![warn(missing_docs)]

//! # Quickbin
//!
//! Quickbin is a minimal binary writer and reader. A [`serialize::Serializer`]
//! appends primitives to a byte buffer one after the other, and a
//! [`deserialize::Deserializer`] reads them back in the same order. Both return
//! themselves from every call, so a whole record reads as one fluent chain.
//!
//! Example:
//! ```
//! use quickbin::deserialize::Deserializer;
//! use quickbin::serialize::Serializer;
//!
//! # fn main() -> Result<(), quickbin::error::Error> {
//! let mut serializer = Serializer::new();
//! serializer.write(1.0f32)?.write(2.0f32)?.write(3.0f32)?;
//! let bytes = serializer.take();
//! assert_eq!(bytes, [0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x40]);
//!
//! let mut deserializer = Deserializer::new(bytes);
//! let (x, y, z): (f32, f32, f32) = (deserializer.read()?, deserializer.read()?, deserializer.read()?);
//! assert_eq!((x, y, z), (1.0, 2.0, 3.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Wire format
//!
//! There is no envelope: no magic number, no type tags, no overall length.
//! The bytes are the plain concatenation of the primitives written:
//! - `bool`: one byte, `0` or `1`. Any non-zero byte reads as `true`.
//! - `u8`, `i8`: one byte.
//! - `u16`/`i16`, `u32`/`i32`, `u64`/`i64`, `u128`/`i128`: 2, 4, 8 and 16
//!   bytes, **little endian**, two's complement for the signed ones.
//! - `f32`, `f64`: the IEEE 754 bits as a little endian `u32`/`u64`.
//! - `char`: the Unicode scalar value as a little endian `u32`.
//! - text (`str`, `String`): the byte length as a little endian `u32`,
//!   followed by the UTF-8 bytes. No terminator.
//!
//! Nothing in the bytes says what they are. Reading fields in a different
//! order than they were written produces wrong values, not errors.
//!
//! ## Structured values
//!
//! The set of primitives is closed. Structured values are supported by
//! implementing [`composite::Composite`], which writes and reads the fields
//! of the value in a fixed order. See the [`composite`] module.
//!
//! ## Chains
//!
//! The [`chain::Chain`] trait, implemented for every type, lets side effects,
//! conditions, loops and lazily produced sequences sit inside a fluent chain
//! of writes or reads without breaking it up.
//!
//! ## `no_std`
//!
//! Without the default `std` feature, the crate is `no_std` and only needs
//! `alloc`. The `std` feature adds the conversion of [`error::Error`] into
//! [`std::io::Error`] for code that moves the bytes through files or sockets.

// Disable the [`std`] standard crate when the "std" feature is not enabled.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod chain;
pub mod composite;
pub mod deserialize;
pub mod error;
pub mod io;
pub mod serialize;

mod types;
