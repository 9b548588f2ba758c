use crate::adapters::vector::{Vector3, Vector3Int};
use crate::utility::{from_bytes, to_bytes};
use quickbin::composite::Composite;
use quickbin::deserialize::Deserializer;
use quickbin::error::Error;
use quickbin::serialize::Serializer;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectInt {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub center: Vector3,
    pub size: Vector3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsInt {
    pub position: Vector3Int,
    pub size: Vector3Int,
}

impl Composite for Rect {
    fn write_fields<'s>(&self, s: &'s mut Serializer) -> Result<&'s mut Serializer, Error> {
        s.write(self.x)?.write(self.y)?.write(self.width)?.write(self.height)
    }

    fn read_fields<Buffer: AsRef<[u8]>>(d: &mut Deserializer<Buffer>) -> Result<Self, Error> {
        Ok(Self { x: d.read()?, y: d.read()?, width: d.read()?, height: d.read()? })
    }
}

impl Composite for RectInt {
    fn write_fields<'s>(&self, s: &'s mut Serializer) -> Result<&'s mut Serializer, Error> {
        s.write(self.x)?.write(self.y)?.write(self.width)?.write(self.height)
    }

    fn read_fields<Buffer: AsRef<[u8]>>(d: &mut Deserializer<Buffer>) -> Result<Self, Error> {
        Ok(Self { x: d.read()?, y: d.read()?, width: d.read()?, height: d.read()? })
    }
}

impl Composite for Bounds {
    fn write_fields<'s>(&self, s: &'s mut Serializer) -> Result<&'s mut Serializer, Error> {
        s.write_composite(&self.center)?.write_composite(&self.size)
    }

    fn read_fields<Buffer: AsRef<[u8]>>(d: &mut Deserializer<Buffer>) -> Result<Self, Error> {
        let center = d.read_composite().map_err(|err| err.enclose("center"))?;
        let size = d.read_composite().map_err(|err| err.enclose("size"))?;
        Ok(Self { center, size })
    }
}

impl Composite for BoundsInt {
    fn write_fields<'s>(&self, s: &'s mut Serializer) -> Result<&'s mut Serializer, Error> {
        s.write_composite(&self.position)?.write_composite(&self.size)
    }

    fn read_fields<Buffer: AsRef<[u8]>>(d: &mut Deserializer<Buffer>) -> Result<Self, Error> {
        Ok(Self { position: d.read_composite()?, size: d.read_composite()? })
    }
}

const BOUNDS_VALUE: Bounds =
    Bounds { center: Vector3 { x: 1.0, y: 2.0, z: 3.0 }, size: Vector3 { x: 0.0, y: -2.0, z: 0.5 } };

#[rustfmt::skip]
const BOUNDS_BYTES: [u8; 24] = [
    0x00, 0x00, 0x80, 0x3F,
    0x00, 0x00, 0x00, 0x40,
    0x00, 0x00, 0x40, 0x40,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xC0,
    0x00, 0x00, 0x00, 0x3F,
];

#[test]
fn serialize_bounds_flattens_fields() {
    assert_eq!(to_bytes(&BOUNDS_VALUE), Ok(BOUNDS_BYTES.into()));
}

#[test]
fn deserialize_bounds() {
    assert_eq!(from_bytes::<Bounds>(&BOUNDS_BYTES), Ok(BOUNDS_VALUE));
}

#[test]
fn deserialize_truncated_bounds_reports_path() {
    let mut d = Deserializer::new(&BOUNDS_BYTES[..22]);
    let error = d.read_composite::<Bounds>().unwrap_err();
    assert_eq!(error.to_string(), ".size.z: need 4 bytes but only 2 remain");
    assert_eq!(d.position(), 20);
}

#[test]
fn round_trip_rect() {
    let value = Rect { x: -10.0, y: 4.5, width: 640.0, height: 480.0 };
    assert_eq!(to_bytes(&value).and_then(|bytes| from_bytes(&bytes)), Ok(value));
}

#[test]
fn round_trip_rect_int() {
    let value = RectInt { x: i32::MIN, y: 0, width: 1920, height: i32::MAX };
    assert_eq!(to_bytes(&value).map(|bytes| bytes.len()), Ok(16));
    assert_eq!(to_bytes(&value).and_then(|bytes| from_bytes(&bytes)), Ok(value));
}

#[test]
fn round_trip_bounds_int() {
    let value =
        BoundsInt { position: Vector3Int { x: -4, y: 0, z: 4 }, size: Vector3Int { x: 8, y: 16, z: 32 } };
    assert_eq!(to_bytes(&value).map(|bytes| bytes.len()), Ok(24));
    assert_eq!(to_bytes(&value).and_then(|bytes| from_bytes(&bytes)), Ok(value));
}
