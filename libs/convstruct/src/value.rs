use std::collections::BTreeMap;
use std::fmt;

use crate::error::ConvertError;
use crate::scalar::Scalar;

/// Dynamic value tree produced by conversion.
///
/// Closed set of shapes:
/// - `Scalar`: copied primitive
/// - `Record`: converted struct, string keys in field declaration order
/// - `List`: converted array, slice, `Vec`, tuple
/// - `Dict`: converted map, keeps the source key type
/// - `Null`: absent or non-representable input
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    Scalar(Scalar),
    Record(Record),
    List(Vec<DynamicValue>),
    Dict(Dict),
}

/// Shape category of a [`DynamicValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Scalar,
    Record,
    List,
    Dict,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Scalar => "scalar",
            Kind::Record => "record",
            Kind::List => "list",
            Kind::Dict => "dict",
        };
        f.write_str(name)
    }
}

impl DynamicValue {
    pub fn kind(&self) -> Kind {
        match self {
            DynamicValue::Null => Kind::Null,
            DynamicValue::Scalar(_) => Kind::Scalar,
            DynamicValue::Record(_) => Kind::Record,
            DynamicValue::List(_) => Kind::List,
            DynamicValue::Dict(_) => Kind::Dict,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DynamicValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            DynamicValue::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            DynamicValue::Dict(v) => Some(v),
            _ => None,
        }
    }

    /// Look up `key` in a Record, or in a Dict keyed by strings.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        match self {
            DynamicValue::Record(record) => record.get(key),
            DynamicValue::Dict(dict) => dict.get(key),
            _ => None,
        }
    }

    fn expect_scalar(&self, expected: &'static str) -> Result<&Scalar, ConvertError> {
        self.as_scalar().ok_or_else(|| ConvertError::TypeMismatch {
            expected,
            found: self.kind().to_string(),
        })
    }
}

impl From<Scalar> for DynamicValue {
    fn from(v: Scalar) -> Self {
        DynamicValue::Scalar(v)
    }
}

impl From<Record> for DynamicValue {
    fn from(v: Record) -> Self {
        DynamicValue::Record(v)
    }
}

impl From<Dict> for DynamicValue {
    fn from(v: Dict) -> Self {
        DynamicValue::Dict(v)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(v: Vec<DynamicValue>) -> Self {
        DynamicValue::List(v)
    }
}

// ---------------------------------------------------------------------------
// Typed extraction
// ---------------------------------------------------------------------------

macro_rules! try_from_scalar {
    ($ty:ty, $expected:literal, $accessor:ident) => {
        impl TryFrom<&DynamicValue> for $ty {
            type Error = ConvertError;

            fn try_from(value: &DynamicValue) -> Result<Self, Self::Error> {
                let scalar = value.expect_scalar($expected)?;
                scalar.$accessor().ok_or_else(|| ConvertError::TypeMismatch {
                    expected: $expected,
                    found: scalar.type_name().to_string(),
                })
            }
        }
    };
}

try_from_scalar!(bool, "bool", as_bool);
try_from_scalar!(i64, "i64", as_i64);
try_from_scalar!(u64, "u64", as_u64);
try_from_scalar!(f64, "f64", as_f64);

impl<'a> TryFrom<&'a DynamicValue> for &'a str {
    type Error = ConvertError;

    fn try_from(value: &'a DynamicValue) -> Result<Self, Self::Error> {
        let scalar = value.expect_scalar("string")?;
        scalar.as_str().ok_or_else(|| ConvertError::TypeMismatch {
            expected: "string",
            found: scalar.type_name().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Converted struct: string keys in insertion order, unique.
///
/// Built from a handful of fields, so lookup is a linear scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, DynamicValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: DynamicValue) -> Option<DynamicValue> {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(&mut entry.1, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Insert a converted struct field. A later field with the same key wins.
    pub fn insert_field(&mut self, key: String, value: DynamicValue) {
        if self.contains_key(&key) {
            tracing::debug!(key = %key, "field key collision, later field overwrites");
        }
        self.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynamicValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, DynamicValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, DynamicValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, DynamicValue);
    type IntoIter = std::vec::IntoIter<(String, DynamicValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Dict
// ---------------------------------------------------------------------------

/// Key type of the source map. Kept on the [`Dict`] even when it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    Char,
    String,
    /// Already-dynamic keys (`MapKey`).
    Any,
}

/// Map key copied out of the source map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapKey {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    Char(char),
    String(String),
}

impl MapKey {
    /// The key kind this key was copied from.
    pub fn kind(&self) -> KeyKind {
        match self {
            MapKey::Bool(_) => KeyKind::Bool,
            MapKey::I8(_) => KeyKind::I8,
            MapKey::I16(_) => KeyKind::I16,
            MapKey::I32(_) => KeyKind::I32,
            MapKey::I64(_) => KeyKind::I64,
            MapKey::I128(_) => KeyKind::I128,
            MapKey::Isize(_) => KeyKind::Isize,
            MapKey::U8(_) => KeyKind::U8,
            MapKey::U16(_) => KeyKind::U16,
            MapKey::U32(_) => KeyKind::U32,
            MapKey::U64(_) => KeyKind::U64,
            MapKey::U128(_) => KeyKind::U128,
            MapKey::Usize(_) => KeyKind::Usize,
            MapKey::Char(_) => KeyKind::Char,
            MapKey::String(_) => KeyKind::String,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MapKey::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for MapKey {
    fn from(v: &str) -> Self {
        MapKey::String(v.to_owned())
    }
}

/// Converted map. Keys are unique and ordered by `MapKey`; the source map's
/// iteration order carries no meaning and is not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Dict {
    key_kind: KeyKind,
    entries: BTreeMap<MapKey, DynamicValue>,
}

impl Dict {
    pub fn new(key_kind: KeyKind) -> Self {
        Self {
            key_kind,
            entries: BTreeMap::new(),
        }
    }

    pub fn key_kind(&self) -> KeyKind {
        self.key_kind
    }

    pub fn insert(&mut self, key: MapKey, value: DynamicValue) -> Option<DynamicValue> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: impl Into<MapKey>) -> Option<&DynamicValue> {
        self.entries.get(&key.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &DynamicValue)> {
        self.entries.iter()
    }
}

impl IntoIterator for Dict {
    type Item = (MapKey, DynamicValue);
    type IntoIter = std::collections::btree_map::IntoIter<MapKey, DynamicValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
