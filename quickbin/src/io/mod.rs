//! The byte buffers underneath the serializer and the deserializer.

mod byte_sink;
mod byte_source;

pub use byte_sink::ByteSink;
pub use byte_source::ByteSource;
