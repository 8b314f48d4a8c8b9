use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;
use uuid::Uuid;

use crate::inner::conv::bt_uuid::deserialize_normalized;

const GATT_READ: u8 = 0x02;
const GATT_WRITE_WITHOUT_RESPONSE: u8 = 0x04;
const GATT_WRITE: u8 = 0x08;
const GATT_NOTIFY: u8 = 0x10;
const GATT_INDICATE: u8 = 0x20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicProperties {
    #[serde(default)]
    pub is_readable: bool,
    #[serde(default)]
    pub is_writable_with_response: bool,
    #[serde(default)]
    pub is_writable_without_response: bool,
    #[serde(default)]
    pub is_notifiable: bool,
    #[serde(default)]
    pub is_indicatable: bool,
}

impl CharacteristicProperties {
    /// Decodes the properties octet of a characteristic declaration.
    pub fn from_gatt_flags(flags: u8) -> Self {
        Self {
            is_readable: flags & GATT_READ != 0,
            is_writable_with_response: flags & GATT_WRITE != 0,
            is_writable_without_response: flags & GATT_WRITE_WITHOUT_RESPONSE != 0,
            is_notifiable: flags & GATT_NOTIFY != 0,
            is_indicatable: flags & GATT_INDICATE != 0,
        }
    }
}

/// A single GATT characteristic as reported by the host stack.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicRecord {
    pub id: i64,
    #[serde(rename = "characteristicUuid", deserialize_with = "deserialize_normalized")]
    pub uuid: Uuid,
    pub service_id: i64,
    #[serde(deserialize_with = "deserialize_normalized")]
    pub service_uuid: Uuid,
    #[serde(flatten)]
    pub properties: CharacteristicProperties,
    #[serde_as(as = "Option<Base64>")]
    pub value: Option<Vec<u8>>,
}

impl CharacteristicRecord {
    pub fn new(id: i64, uuid: Uuid, service_id: i64, service_uuid: Uuid) -> Self {
        Self {
            id,
            uuid,
            service_id,
            service_uuid,
            properties: CharacteristicProperties::default(),
            value: None,
        }
    }

    pub fn with_properties(mut self, properties: CharacteristicProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_value(mut self, value: Vec<u8>) -> Self {
        self.value = Some(value);
        self
    }
}

impl Display for CharacteristicRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}#{}:{}#{}",
            self.service_uuid, self.service_id, self.uuid, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner::conv::bt_uuid::from_u16;

    #[test]
    fn test_gatt_flags() {
        let properties = CharacteristicProperties::from_gatt_flags(0x02 | 0x10);
        assert!(properties.is_readable);
        assert!(properties.is_notifiable);
        assert!(!properties.is_writable_with_response);
        assert!(!properties.is_writable_without_response);
        assert!(!properties.is_indicatable);

        let properties = CharacteristicProperties::from_gatt_flags(0x04 | 0x08 | 0x20 | 0x01);
        assert!(!properties.is_readable);
        assert!(properties.is_writable_with_response);
        assert!(properties.is_writable_without_response);
        assert!(properties.is_indicatable);
    }

    #[test]
    fn test_load_from_yaml() {
        let yaml = r#"
id: 7
characteristicUuid: 2A37
serviceId: 3
serviceUuid: 0000180d-0000-1000-8000-00805f9b34fb
isReadable: true
isNotifiable: true
value: AQID
"#;
        let record: CharacteristicRecord = serde_yaml::from_str(yaml).unwrap();

        let expected = CharacteristicRecord::new(7, from_u16(0x2a37), 3, from_u16(0x180d))
            .with_properties(CharacteristicProperties {
                is_readable: true,
                is_notifiable: true,
                ..Default::default()
            })
            .with_value(vec![1, 2, 3]);
        assert_eq!(record, expected);
    }

    #[test]
    fn test_missing_value_and_flags() {
        let yaml = r#"
id: 1
characteristicUuid: 2A19
serviceId: 1
serviceUuid: 180F
"#;
        let record: CharacteristicRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.value, None);
        assert_eq!(record.properties, CharacteristicProperties::default());
    }
}
