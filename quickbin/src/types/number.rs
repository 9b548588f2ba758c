use crate::deserialize::Decode;
use crate::error::Error;
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Encode;
use crate::types::Sealed;

macro_rules! impl_number {
    ($($type:ty),* $(,)?) => {
        $(
            impl Sealed for $type {}

            impl Encode for $type {
                fn encode(&self, sink: &mut ByteSink) -> Result<(), Error> {
                    sink.append(&self.to_le_bytes())
                }
            }

            impl Decode for $type {
                fn decode<Buffer: AsRef<[u8]>>(source: &mut ByteSource<Buffer>) -> Result<Self, Error> {
                    Ok(<$type>::from_le_bytes(source.read_fixed()?))
                }
            }
        )*
    };
}

impl_number!(u8, u16, u32, u64, u128);
impl_number!(i8, i16, i32, i64, i128);
impl_number!(f32, f64);
