use crate::adapters::vector::Vector4;
use crate::utility::{from_bytes, to_bytes};
use quickbin::chain::Chain;
use quickbin::composite::Composite;
use quickbin::deserialize::Deserializer;
use quickbin::error::Error;
use quickbin::serialize::Serializer;

/// A column-major 4x4 matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matrix4x4 {
    pub columns: [Vector4; 4],
}

impl Matrix4x4 {
    const IDENTITY: Self = Self {
        columns: [
            Vector4 { x: 1.0, y: 0.0, z: 0.0, w: 0.0 },
            Vector4 { x: 0.0, y: 1.0, z: 0.0, w: 0.0 },
            Vector4 { x: 0.0, y: 0.0, z: 1.0, w: 0.0 },
            Vector4 { x: 0.0, y: 0.0, z: 0.0, w: 1.0 },
        ],
    };
}

impl Composite for Matrix4x4 {
    fn write_fields<'s>(&self, s: &'s mut Serializer) -> Result<&'s mut Serializer, Error> {
        s.try_for_each_with(&self.columns, |s, column| s.write_composite(column).map(drop))
    }

    fn read_fields<Buffer: AsRef<[u8]>>(d: &mut Deserializer<Buffer>) -> Result<Self, Error> {
        let mut columns = [Vector4::default(); 4];
        let mut produced = d.produce(|d| d.read_composite::<Vector4>(), columns.len());
        for (column, value) in columns.iter_mut().zip(produced.iter()) {
            *column = value?;
        }
        Ok(Self { columns })
    }
}

#[test]
fn serialize_identity() -> Result<(), Error> {
    let bytes = to_bytes(&Matrix4x4::IDENTITY)?;
    assert_eq!(bytes.len(), 64);
    // The diagonal lands at every fifth float.
    let one = 1.0f32.to_le_bytes();
    for (index, float) in bytes.chunks(4).enumerate() {
        let expected = if index % 5 == 0 { one } else { [0; 4] };
        assert_eq!(float, expected, "float {index}");
    }
    Ok(())
}

#[test]
fn round_trip_matrix() {
    let mut value = Matrix4x4::IDENTITY;
    value.columns[3] = Vector4 { x: 10.0, y: -5.0, z: 2.5, w: 1.0 };
    assert_eq!(to_bytes(&value).and_then(|bytes| from_bytes(&bytes)), Ok(value));
}

#[test]
fn truncated_matrix_fails() {
    let bytes = to_bytes(&Matrix4x4::IDENTITY).unwrap();
    let mut d = Deserializer::new(&bytes[..60]);
    assert!(d.read_composite::<Matrix4x4>().is_err());
    // The first three columns and three floats of the last one are consumed.
    assert_eq!(d.position(), 60);
}
