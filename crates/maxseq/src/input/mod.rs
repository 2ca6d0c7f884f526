pub mod geo_zero;

use geozero::ColumnValue;

pub use geo_zero::{PathReader, PoiReader, read_paths, read_pois};

/// Owned copy of a geozero property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Binary(Vec<u8>),
    Byte(i8),
    UByte(u8),
    Short(i16),
    UShort(u16),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(String),
    Json(String),
}

impl<'a> From<&ColumnValue<'a>> for PropertyValue {
    fn from(value: &ColumnValue<'a>) -> Self {
        match value {
            ColumnValue::Bool(i) => PropertyValue::Bool(*i),
            ColumnValue::Binary(i) => PropertyValue::Binary(i.to_vec()),
            ColumnValue::Byte(i) => PropertyValue::Byte(*i),
            ColumnValue::UByte(i) => PropertyValue::UByte(*i),
            ColumnValue::Short(i) => PropertyValue::Short(*i),
            ColumnValue::UShort(i) => PropertyValue::UShort(*i),
            ColumnValue::Int(i) => PropertyValue::Int(*i),
            ColumnValue::UInt(i) => PropertyValue::UInt(*i),
            ColumnValue::Long(i) => PropertyValue::Long(*i),
            ColumnValue::ULong(i) => PropertyValue::ULong(*i),
            ColumnValue::Float(i) => PropertyValue::Float(*i),
            ColumnValue::Double(i) => PropertyValue::Double(*i),
            ColumnValue::String(i) => PropertyValue::String(i.to_string()),
            ColumnValue::DateTime(i) => PropertyValue::DateTime(i.to_string()),
            ColumnValue::Json(i) => PropertyValue::Json(i.to_string()),
        }
    }
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, strings holding a number are accepted too.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Byte(i) => Some(f64::from(*i)),
            Self::UByte(i) => Some(f64::from(*i)),
            Self::Short(i) => Some(f64::from(*i)),
            Self::UShort(i) => Some(f64::from(*i)),
            Self::Int(i) => Some(f64::from(*i)),
            Self::UInt(i) => Some(f64::from(*i)),
            Self::Long(i) => Some(*i as f64),
            Self::ULong(i) => Some(*i as f64),
            Self::Float(f) => Some(f64::from(*f)),
            Self::Double(f) => Some(*f),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Byte(i) => Some(i64::from(*i)),
            Self::UByte(i) => Some(i64::from(*i)),
            Self::Short(i) => Some(i64::from(*i)),
            Self::UShort(i) => Some(i64::from(*i)),
            Self::Int(i) => Some(i64::from(*i)),
            Self::UInt(i) => Some(i64::from(*i)),
            Self::Long(i) => Some(*i),
            Self::ULong(i) => i64::try_from(*i).ok(),
            Self::Double(f) if f.fract() == 0. => Some(*f as i64),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
