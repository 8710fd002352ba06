#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use convstruct::{Convert, Dict, DynamicValue, KeyKind, MapKey, Record, Scalar};

/// Mixed-shape fixture: maps, pointers, nested records, an "any" field.
///
/// `field4` and `field5` are `pub(crate)`, which is not external visibility.
#[derive(Convert, Default)]
pub struct DummyStructTest {
    #[tag(json = "field_1")]
    pub field1: Option<HashMap<String, String>>,
    #[tag(custom = "field_2")]
    pub field2: i64,
    pub field3: Option<Vec<i64>>,
    pub(crate) field4: String,
    pub(crate) field5: Option<Box<DummyStructTest>>,
    #[tag(json = "field_6")]
    pub field6: Option<Box<DummyStructTest>>,
    #[tag(json = "field_7")]
    pub field7: Option<Rc<i64>>,
    #[tag(json = "field_8")]
    pub field8: Option<Vec<DummyStructTest>>,
    #[tag(json = "field_9")]
    pub field9: Option<HashMap<String, DummyStructTest>>,
    #[tag(json = "field_10")]
    pub field10: Option<Box<dyn Convert>>,
}

pub fn string_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn int(v: i64) -> DynamicValue {
    DynamicValue::Scalar(Scalar::I64(v))
}

pub fn text(v: &str) -> DynamicValue {
    DynamicValue::Scalar(Scalar::from(v))
}

pub fn ints(values: &[i64]) -> DynamicValue {
    DynamicValue::List(values.iter().copied().map(int).collect())
}

pub fn record(entries: Vec<(&str, DynamicValue)>) -> DynamicValue {
    DynamicValue::Record(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Record>(),
    )
}

pub fn string_dict(entries: Vec<(&str, DynamicValue)>) -> DynamicValue {
    let mut dict = Dict::new(KeyKind::String);
    for (key, value) in entries {
        dict.insert(MapKey::from(key), value);
    }
    DynamicValue::Dict(dict)
}

/// Expected conversion of `DummyStructTest::default()`.
pub fn empty_dummy() -> DynamicValue {
    record(vec![
        ("field_1", DynamicValue::Null),
        ("field2", int(0)),
        ("field3", DynamicValue::Null),
        ("field_6", DynamicValue::Null),
        ("field_7", DynamicValue::Null),
        ("field_8", DynamicValue::Null),
        ("field_9", DynamicValue::Null),
        ("field_10", DynamicValue::Null),
    ])
}
