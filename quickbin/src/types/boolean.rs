use crate::deserialize::Decode;
use crate::error::Error;
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Encode;
use crate::types::Sealed;

impl Sealed for bool {}

impl Encode for bool {
    fn encode(&self, sink: &mut ByteSink) -> Result<(), Error> {
        sink.append(&[u8::from(*self)])
    }
}

impl Decode for bool {
    /// Any non-zero byte reads as `true`.
    fn decode<Buffer: AsRef<[u8]>>(source: &mut ByteSource<Buffer>) -> Result<Self, Error> {
        let [byte] = source.read_fixed::<1>()?;
        Ok(byte != 0)
    }
}
