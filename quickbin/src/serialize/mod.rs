//! The serializer and the trait of the values it can write.

mod encode;
mod serializer;

pub use encode::Encode;
pub use serializer::Serializer;
