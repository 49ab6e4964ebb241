use std::collections::BTreeMap;

use serde::de::{self, Visitor};
use serde::Deserializer;
use serde_derive::{Deserialize, Serialize};

use workdays_store_core::{StoreError, StoreResult};

/// Firestore's tagged-union value encoding. Only the variants the workday
/// documents use are modelled.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireValue {
    StringValue(String),
    IntegerValue(#[serde(deserialize_with = "integer_from_wire")] i64),
    BooleanValue(bool),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<WireValue>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MapValue {
    pub fields: BTreeMap<String, WireValue>,
}

impl WireValue {
    pub fn string(value: impl Into<String>) -> Self {
        WireValue::StringValue(value.into())
    }

    pub fn as_str(&self) -> StoreResult<&str> {
        match self {
            WireValue::StringValue(value) => Ok(value),
            other => Err(type_mismatch("stringValue", other)),
        }
    }

    pub fn as_integer(&self) -> StoreResult<i64> {
        match self {
            WireValue::IntegerValue(value) => Ok(*value),
            other => Err(type_mismatch("integerValue", other)),
        }
    }

    pub fn as_boolean(&self) -> StoreResult<bool> {
        match self {
            WireValue::BooleanValue(value) => Ok(*value),
            other => Err(type_mismatch("booleanValue", other)),
        }
    }

    pub fn as_array(&self) -> StoreResult<&[WireValue]> {
        match self {
            WireValue::ArrayValue(array) => Ok(&array.values),
            other => Err(type_mismatch("arrayValue", other)),
        }
    }

    pub fn as_map(&self) -> StoreResult<&BTreeMap<String, WireValue>> {
        match self {
            WireValue::MapValue(map) => Ok(&map.fields),
            other => Err(type_mismatch("mapValue", other)),
        }
    }
}

fn type_mismatch(expected: &str, got: &WireValue) -> StoreError {
    StoreError::CorruptedDocument(format!("expected {expected}, got {got:?}"))
}

/// The store answers int64 fields as decimal strings while our own writes
/// carry plain numbers; both shapes must decode.
fn integer_from_wire<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegerVisitor;

    impl<'de> Visitor<'de> for IntegerVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer or a decimal string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(de::Error::custom)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            value.parse().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(IntegerVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_serialize_with_their_wire_tags() {
        assert_eq!(
            serde_json::to_value(WireValue::string("ok")).unwrap(),
            json!({ "stringValue": "ok" })
        );
        assert_eq!(
            serde_json::to_value(WireValue::IntegerValue(42)).unwrap(),
            json!({ "integerValue": 42 })
        );
        assert_eq!(
            serde_json::to_value(WireValue::BooleanValue(false)).unwrap(),
            json!({ "booleanValue": false })
        );
    }

    #[test]
    fn arrays_wrap_their_values() {
        let value = WireValue::ArrayValue(ArrayValue {
            values: vec![WireValue::IntegerValue(1)],
        });

        assert_eq!(
            serde_json::to_value(value).unwrap(),
            json!({ "arrayValue": { "values": [{ "integerValue": 1 }] } })
        );
    }

    #[test]
    fn integers_decode_from_decimal_strings() {
        let value: WireValue = serde_json::from_value(json!({ "integerValue": "42" })).unwrap();
        assert_eq!(value, WireValue::IntegerValue(42));
    }

    #[test]
    fn integers_decode_from_plain_numbers() {
        let value: WireValue = serde_json::from_value(json!({ "integerValue": 42 })).unwrap();
        assert_eq!(value, WireValue::IntegerValue(42));
    }

    #[test]
    fn empty_arrays_decode_without_a_values_key() {
        let value: WireValue = serde_json::from_value(json!({ "arrayValue": {} })).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 0);
    }

    #[test]
    fn accessors_reject_mismatched_variants() {
        let value = WireValue::BooleanValue(true);
        assert!(value.as_str().is_err());
        assert!(value.as_integer().is_err());
        assert!(value.as_boolean().is_ok());
    }
}
