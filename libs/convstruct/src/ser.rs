//! `serde::Serialize` for the dynamic tree, so a converted value can be handed
//! to any serde format. The crate itself never produces text.

use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};

use crate::scalar::{Complex, Scalar};
use crate::value::{Dict, DynamicValue, MapKey, Record};

impl Serialize for DynamicValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DynamicValue::Null => serializer.serialize_unit(),
            DynamicValue::Scalar(v) => v.serialize(serializer),
            DynamicValue::Record(v) => v.serialize(serializer),
            DynamicValue::List(v) => v.serialize(serializer),
            DynamicValue::Dict(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::I8(v) => serializer.serialize_i8(*v),
            Scalar::I16(v) => serializer.serialize_i16(*v),
            Scalar::I32(v) => serializer.serialize_i32(*v),
            Scalar::I64(v) => serializer.serialize_i64(*v),
            Scalar::I128(v) => serializer.serialize_i128(*v),
            Scalar::Isize(v) => serializer.serialize_i64(*v as i64),
            Scalar::U8(v) => serializer.serialize_u8(*v),
            Scalar::U16(v) => serializer.serialize_u16(*v),
            Scalar::U32(v) => serializer.serialize_u32(*v),
            Scalar::U64(v) => serializer.serialize_u64(*v),
            Scalar::U128(v) => serializer.serialize_u128(*v),
            Scalar::Usize(v) => serializer.serialize_u64(*v as u64),
            Scalar::F32(v) => serializer.serialize_f32(*v),
            Scalar::F64(v) => serializer.serialize_f64(*v),
            Scalar::Complex32(v) => v.serialize(serializer),
            Scalar::Complex64(v) => v.serialize(serializer),
            Scalar::Char(v) => serializer.serialize_char(*v),
            Scalar::String(v) => serializer.serialize_str(v),
        }
    }
}

/// `(re, im)`.
impl<T: Serialize> Serialize for Complex<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.re)?;
        tuple.serialize_element(&self.im)?;
        tuple.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Dict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for MapKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MapKey::Bool(v) => serializer.serialize_bool(*v),
            MapKey::I8(v) => serializer.serialize_i8(*v),
            MapKey::I16(v) => serializer.serialize_i16(*v),
            MapKey::I32(v) => serializer.serialize_i32(*v),
            MapKey::I64(v) => serializer.serialize_i64(*v),
            MapKey::I128(v) => serializer.serialize_i128(*v),
            MapKey::Isize(v) => serializer.serialize_i64(*v as i64),
            MapKey::U8(v) => serializer.serialize_u8(*v),
            MapKey::U16(v) => serializer.serialize_u16(*v),
            MapKey::U32(v) => serializer.serialize_u32(*v),
            MapKey::U64(v) => serializer.serialize_u64(*v),
            MapKey::U128(v) => serializer.serialize_u128(*v),
            MapKey::Usize(v) => serializer.serialize_u64(*v as u64),
            MapKey::Char(v) => serializer.serialize_char(*v),
            MapKey::String(v) => serializer.serialize_str(v),
        }
    }
}
