use serde_json::Value;

use crate::convert::Convert;
use crate::options::ConvertOptions;
use crate::scalar::Scalar;
use crate::value::{Dict, DynamicValue, KeyKind, MapKey};

/// A JSON document is already dynamic: objects are maps (string-keyed
/// `Dict`), not structs, so no naming policy applies.
impl Convert for Value {
    fn convert_with(&self, options: &ConvertOptions) -> DynamicValue {
        match self {
            Value::Null => DynamicValue::Null,
            Value::Bool(v) => DynamicValue::Scalar(Scalar::Bool(*v)),
            Value::Number(n) => {
                let scalar = if let Some(v) = n.as_u64() {
                    Scalar::U64(v)
                } else if let Some(v) = n.as_i64() {
                    Scalar::I64(v)
                } else {
                    // `None` only under serde_json/arbitrary_precision.
                    Scalar::F64(n.as_f64().unwrap_or(f64::NAN))
                };
                DynamicValue::Scalar(scalar)
            }
            Value::String(v) => DynamicValue::Scalar(Scalar::String(v.clone())),
            Value::Array(items) => {
                DynamicValue::List(items.iter().map(|item| item.convert_with(options)).collect())
            }
            Value::Object(map) => {
                let mut dict = Dict::new(KeyKind::String);
                for (key, value) in map {
                    dict.insert(MapKey::String(key.clone()), value.convert_with(options));
                }
                DynamicValue::Dict(dict)
            }
        }
    }
}
