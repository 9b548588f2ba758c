//! The deserializer and the trait of the values it can read.

mod decode;
mod deserializer;

pub use decode::Decode;
pub use deserializer::Deserializer;
