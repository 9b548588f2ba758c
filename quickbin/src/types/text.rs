use crate::deserialize::Decode;
use crate::error::{Error, ErrorKind};
use crate::io::{ByteSink, ByteSource};
use crate::serialize::Encode;
use crate::types::Sealed;
use alloc::string::String;

const LENGTH_PREFIX_WIDTH: usize = size_of::<u32>();

impl Sealed for char {}
impl Sealed for str {}
impl Sealed for String {}

impl Encode for char {
    fn encode(&self, sink: &mut ByteSink) -> Result<(), Error> {
        u32::from(*self).encode(sink)
    }
}

impl Decode for char {
    fn decode<Buffer: AsRef<[u8]>>(source: &mut ByteSource<Buffer>) -> Result<Self, Error> {
        let scalar = u32::decode(source)?;
        char::from_u32(scalar).ok_or_else(|| ErrorKind::InvalidValue("not a unicode scalar value").into())
    }
}

/// Text is a little-endian `u32` byte count followed by the UTF-8 bytes.
impl Encode for str {
    fn encode(&self, sink: &mut ByteSink) -> Result<(), Error> {
        let len = u32::try_from(self.len()).map_err(|_| ErrorKind::InvalidValue("text is longer than u32::MAX bytes"))?;
        sink.reserve(self.len().saturating_add(LENGTH_PREFIX_WIDTH))?;
        len.encode(sink)?;
        sink.append(self.as_bytes())
    }
}

impl Encode for String {
    fn encode(&self, sink: &mut ByteSink) -> Result<(), Error> {
        self.as_str().encode(sink)
    }
}

impl Decode for String {
    fn decode<Buffer: AsRef<[u8]>>(source: &mut ByteSource<Buffer>) -> Result<Self, Error> {
        let len = u32::decode(source)? as usize;
        let bytes = source.read(len)?;
        let text = core::str::from_utf8(bytes).map_err(|_| ErrorKind::InvalidValue("text is not valid UTF-8"))?;
        Ok(String::from(text))
    }
}
