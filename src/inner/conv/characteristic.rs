use serde_json::{Map, Value};

use crate::inner::model::characteristic_record::CharacteristicRecord;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Expected {kind} to be a JSON object, got {actual}")]
    NotAnObject { kind: &'static str, actual: String },
}

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Turns a value into the JSON payload handed across the plugin boundary.
pub trait JsonConverter<T> {
    fn to_json_value(&self, value: &T) -> ConversionResult<Value>;

    fn to_json(&self, value: &T) -> ConversionResult<String> {
        Ok(serde_json::to_string(&self.to_json_value(value)?)?)
    }

    fn to_json_pretty(&self, value: &T) -> ConversionResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value(value)?)?)
    }
}

pub(crate) fn into_object(kind: &'static str, value: Value) -> ConversionResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConversionError::NotAnObject {
            kind,
            actual: other.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CharacteristicJsonConverter;

impl JsonConverter<CharacteristicRecord> for CharacteristicJsonConverter {
    fn to_json_value(&self, value: &CharacteristicRecord) -> ConversionResult<Value> {
        Ok(serde_json::to_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::inner::conv::bt_uuid::from_u16;
    use crate::inner::model::characteristic_record::CharacteristicProperties;

    #[test]
    fn test_characteristic_keys() {
        let record = CharacteristicRecord::new(12, from_u16(0x2a19), 4, from_u16(0x180f))
            .with_properties(CharacteristicProperties::from_gatt_flags(0x12))
            .with_value(b"hello".to_vec());

        let value = CharacteristicJsonConverter.to_json_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 12,
                "characteristicUuid": "00002a19-0000-1000-8000-00805f9b34fb",
                "serviceId": 4,
                "serviceUuid": "0000180f-0000-1000-8000-00805f9b34fb",
                "isReadable": true,
                "isWritableWithResponse": false,
                "isWritableWithoutResponse": false,
                "isNotifiable": true,
                "isIndicatable": false,
                "value": "aGVsbG8=",
            })
        );
    }

    #[test]
    fn test_null_value() {
        let record = CharacteristicRecord::new(1, from_u16(0x2a00), 1, from_u16(0x1800));
        let json = CharacteristicJsonConverter.to_json(&record).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["value"], Value::Null);
    }

    #[test]
    fn test_into_object() {
        assert!(into_object("characteristic", json!({"id": 1})).is_ok());

        let err = into_object("characteristic", json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::NotAnObject { kind: "characteristic", .. }
        ));
    }
}
