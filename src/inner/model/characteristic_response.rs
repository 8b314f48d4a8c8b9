use serde::{Deserialize, Serialize};

use crate::inner::model::characteristic_record::CharacteristicRecord;

/// Result of a read or write on a single characteristic.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SingleCharacteristicResponse {
    pub service_uuid: String,
    pub service_id: i64,
    pub transaction_id: String,
    pub characteristic: CharacteristicRecord,
}

/// Characteristics discovered on a single service.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiCharacteristicsResponse {
    pub service_uuid: String,
    pub service_id: i64,
    #[serde(default)]
    pub characteristics: Vec<CharacteristicRecord>,
}
