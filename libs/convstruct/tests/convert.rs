mod support;

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc;

use convstruct::{convert, Convert, Dict, DynamicValue, KeyKind, MapKey, Scalar};

use support::{empty_dummy, int, ints, record, string_dict, string_map, text, DummyStructTest};

#[test]
fn convert_nil() {
    assert_eq!(convert(&None::<i64>, None), DynamicValue::Null);
    assert_eq!(convert(&(), None), DynamicValue::Null);
}

#[test]
fn convert_primitives() {
    assert_eq!(convert(&0i64, None), int(0));
    assert_eq!(convert(&0.65f64, None), DynamicValue::Scalar(Scalar::F64(0.65)));
    assert_eq!(convert("this is testing", None), text("this is testing"));
}

#[test]
fn convert_chan_expected_null() {
    let (tx, _rx) = mpsc::channel::<i64>();
    assert_eq!(convert(&tx, None), DynamicValue::Null);
}

#[test]
fn convert_int_of_pointer() {
    let j = 123i64;
    let i = Some(&j);
    assert_eq!(convert(&i, None), int(123));
}

#[test]
fn convert_slice_of_integer() {
    assert_eq!(convert(&vec![1i64, 2, 3, 4], None), ints(&[1, 2, 3, 4]));
}

#[test]
fn convert_slice_of_any_with_pointer() {
    let i = 100i64;
    let p = &i;
    let s: Vec<&dyn Convert> = vec![&2i64, &p, &4i64, &5i64, &6i64];
    assert_eq!(convert(&s, None), ints(&[2, 100, 4, 5, 6]));
}

#[test]
fn convert_nil_slice() {
    let s: Option<Vec<i64>> = None;
    assert_eq!(convert(&s, None), DynamicValue::Null);
}

#[test]
fn convert_array_of_integer() {
    let s = [2i64, 3, 4, 5, 6];
    assert_eq!(convert(&s, None), ints(&[2, 3, 4, 5, 6]));
}

#[test]
fn convert_nil_map() {
    let m: Option<HashMap<i64, i64>> = None;
    assert_eq!(convert(&m, None), DynamicValue::Null);
}

#[test]
fn convert_map_int_of_int() {
    let m = HashMap::from([(1i64, 3i64), (2, 4), (5, 5)]);

    let mut want = Dict::new(KeyKind::I64);
    want.insert(MapKey::I64(1), int(3));
    want.insert(MapKey::I64(2), int(4));
    want.insert(MapKey::I64(5), int(5));

    assert_eq!(convert(&m, None), DynamicValue::Dict(want));
}

#[test]
fn convert_map_string_of_any() {
    let mut m: HashMap<String, Box<dyn Convert>> = HashMap::new();
    m.insert("field_1".into(), Box::new("this is test string"));
    m.insert("field_2".into(), Box::new(987654321i64));
    m.insert("field_3".into(), Box::new(0.1234567f64));
    m.insert(
        "field_4".into(),
        Box::new(string_map(&[
            ("nested_1", "value_1"),
            ("nested_2", "value_2"),
            ("nested_3", "value_3"),
        ])),
    );

    let want = string_dict(vec![
        ("field_1", text("this is test string")),
        ("field_2", int(987654321)),
        ("field_3", DynamicValue::Scalar(Scalar::F64(0.1234567))),
        (
            "field_4",
            string_dict(vec![
                ("nested_1", text("value_1")),
                ("nested_2", text("value_2")),
                ("nested_3", text("value_3")),
            ]),
        ),
    ]);

    assert_eq!(convert(&m, None), want);
}

#[test]
fn convert_map_string_of_struct_but_field_is_private() {
    #[allow(dead_code)]
    #[derive(Convert)]
    struct Entry {
        key: String,
        value: i64,
    }

    let m = HashMap::from([
        (
            "case_1".to_string(),
            Entry {
                key: "key_1".into(),
                value: 1,
            },
        ),
        (
            "case_2".to_string(),
            Entry {
                key: "key_2".into(),
                value: 2,
            },
        ),
        (
            "case_3".to_string(),
            Entry {
                key: "key_3".into(),
                value: 3,
            },
        ),
    ]);

    let want = string_dict(vec![
        ("case_1", record(vec![])),
        ("case_2", record(vec![])),
        ("case_3", record(vec![])),
    ]);

    assert_eq!(convert(&m, None), want);
}

#[test]
fn convert_map_string_of_struct_but_field_is_public() {
    #[derive(Convert)]
    struct Entry {
        pub key: String,
        pub value: i64,
    }

    let m = HashMap::from([
        (
            "case_1".to_string(),
            Entry {
                key: "key_1".into(),
                value: 1,
            },
        ),
        (
            "case_2".to_string(),
            Entry {
                key: "key_2".into(),
                value: 2,
            },
        ),
        (
            "case_3".to_string(),
            Entry {
                key: "key_3".into(),
                value: 3,
            },
        ),
    ]);

    let want = string_dict(vec![
        ("case_1", record(vec![("key", text("key_1")), ("value", int(1))])),
        ("case_2", record(vec![("key", text("key_2")), ("value", int(2))])),
        ("case_3", record(vec![("key", text("key_3")), ("value", int(3))])),
    ]);

    assert_eq!(convert(&m, None), want);
}

#[test]
fn convert_struct_but_field_is_mixed() {
    let i = Rc::new(100i64);

    let m = DummyStructTest {
        field1: Some(string_map(&[("key_1", "value_1"), ("key_2", "value_2")])),
        field2: 9090,
        field3: Some(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]),
        field4: "skip unexported field".into(),
        field5: Some(Box::new(DummyStructTest {
            field1: Some(string_map(&[
                ("nested_key_1", "nested_value_1"),
                ("nested_key_2", "nested_value_2"),
            ])),
            field2: 8080,
            field3: Some(vec![1, 2, 3, 4, 5]),
            field4: "skip this field".into(),
            ..Default::default()
        })),
        field6: None,
        field7: None,
        field8: Some(vec![
            DummyStructTest {
                field1: Some(string_map(&[
                    ("array_0_key_1", "array_0_value_1"),
                    ("array_0_key_2", "array_0_value_2"),
                ])),
                field2: 1,
                field3: Some(vec![9, 8, 7, 6]),
                field6: None,
                field7: Some(Rc::clone(&i)),
                field8: Some(vec![]),
                ..Default::default()
            },
            DummyStructTest {
                field1: Some(string_map(&[
                    ("array_1_key_1", "array_1_value_1"),
                    ("array_1_key_2", "array_1_value_2"),
                ])),
                field2: 2,
                field3: Some(vec![5, 4, 3, 2, 1]),
                field4: "skip unexported field".into(),
                field5: Some(Box::default()),
                field6: Some(Box::new(DummyStructTest {
                    field1: Some(HashMap::new()),
                    ..Default::default()
                })),
                field7: Some(Rc::clone(&i)),
                field8: Some(vec![DummyStructTest::default()]),
                field10: Some(Box::new("{...}")),
                ..Default::default()
            },
        ]),
        field9: Some(HashMap::from([(
            "this_is_dummy".to_string(),
            DummyStructTest::default(),
        )])),
        field10: Some(Box::new(true)),
    };

    let want = record(vec![
        (
            "field_1",
            string_dict(vec![("key_1", text("value_1")), ("key_2", text("value_2"))]),
        ),
        ("field2", int(9090)),
        ("field3", ints(&[9, 8, 7, 6, 5, 4, 3, 2, 1])),
        ("field_6", DynamicValue::Null),
        ("field_7", DynamicValue::Null),
        (
            "field_8",
            DynamicValue::List(vec![
                record(vec![
                    (
                        "field_1",
                        string_dict(vec![
                            ("array_0_key_1", text("array_0_value_1")),
                            ("array_0_key_2", text("array_0_value_2")),
                        ]),
                    ),
                    ("field2", int(1)),
                    ("field3", ints(&[9, 8, 7, 6])),
                    ("field_6", DynamicValue::Null),
                    ("field_7", int(100)),
                    ("field_8", DynamicValue::List(vec![])),
                    ("field_9", DynamicValue::Null),
                    ("field_10", DynamicValue::Null),
                ]),
                record(vec![
                    (
                        "field_1",
                        string_dict(vec![
                            ("array_1_key_1", text("array_1_value_1")),
                            ("array_1_key_2", text("array_1_value_2")),
                        ]),
                    ),
                    ("field2", int(2)),
                    ("field3", ints(&[5, 4, 3, 2, 1])),
                    (
                        "field_6",
                        record(vec![
                            ("field_1", string_dict(vec![])),
                            ("field2", int(0)),
                            ("field3", DynamicValue::Null),
                            ("field_6", DynamicValue::Null),
                            ("field_7", DynamicValue::Null),
                            ("field_8", DynamicValue::Null),
                            ("field_9", DynamicValue::Null),
                            ("field_10", DynamicValue::Null),
                        ]),
                    ),
                    ("field_7", int(100)),
                    ("field_8", DynamicValue::List(vec![empty_dummy()])),
                    ("field_9", DynamicValue::Null),
                    ("field_10", text("{...}")),
                ]),
            ]),
        ),
        ("field_9", string_dict(vec![("this_is_dummy", empty_dummy())])),
        ("field_10", DynamicValue::Scalar(Scalar::Bool(true))),
    ]);

    assert_eq!(convert(&m, None), want);
}

#[test]
fn empty_containers_are_not_absent() {
    let empty_map: Option<HashMap<String, i64>> = Some(HashMap::new());
    let absent_map: Option<HashMap<String, i64>> = None;
    let empty_vec: Option<Vec<i64>> = Some(Vec::new());
    let absent_vec: Option<Vec<i64>> = None;

    assert_eq!(convert(&empty_map, None), string_dict(vec![]));
    assert_eq!(convert(&absent_map, None), DynamicValue::Null);
    assert_eq!(convert(&empty_vec, None), DynamicValue::List(vec![]));
    assert_eq!(convert(&absent_vec, None), DynamicValue::Null);
    assert_ne!(convert(&empty_map, None), convert(&absent_map, None));
    assert_ne!(convert(&empty_vec, None), convert(&absent_vec, None));
}

#[test]
fn result_does_not_alias_input() {
    let mut source = DummyStructTest {
        field3: Some(vec![1, 2]),
        ..Default::default()
    };
    let mut converted = convert(&source, None);

    if let DynamicValue::Record(rec) = &mut converted {
        rec.insert("field3", ints(&[9]));
    }
    assert_eq!(source.field3, Some(vec![1, 2]));

    if let Some(items) = source.field3.as_mut() {
        items.push(3);
    }
    assert_eq!(converted.get("field3"), Some(&ints(&[9])));
}

#[test]
fn reconverting_output_is_idempotent() {
    let source = DummyStructTest {
        field1: Some(string_map(&[("a", "b")])),
        field8: Some(vec![DummyStructTest::default()]),
        ..Default::default()
    };
    let once = convert(&source, None);
    let twice = convert(&once, None);

    assert_eq!(once, twice);
}
