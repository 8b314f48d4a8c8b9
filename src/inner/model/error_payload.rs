use serde::{Deserialize, Serialize};

use crate::inner::error::BridgeError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BridgeErrorCode {
    Unknown,
    InvalidIdentifiers,
    SerializationFailed,
    InvalidInput,
}

impl BridgeErrorCode {
    pub fn code(&self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::InvalidIdentifiers => 1,
            Self::SerializationFailed => 2,
            Self::InvalidInput => 3,
        }
    }
}

impl From<&BridgeError> for BridgeErrorCode {
    fn from(value: &BridgeError) -> Self {
        match value {
            BridgeError::InvalidIdentifiers(_) => Self::InvalidIdentifiers,
            BridgeError::ConversionError(_) | BridgeError::SerializationError(_) => {
                Self::SerializationFailed
            }
            BridgeError::InputError(_) => Self::InvalidInput,
            BridgeError::IoError(_) => Self::Unknown,
        }
    }
}

/// Payload returned across the plugin boundary in place of a failed operation result.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub error_code: u16,
    pub reason: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(rename = "serviceUUID")]
    pub service_uuid: Option<String>,
    #[serde(rename = "characteristicUUID")]
    pub characteristic_uuid: Option<String>,
}

impl ErrorPayload {
    pub fn new(code: BridgeErrorCode, reason: impl Into<String>) -> Self {
        Self {
            error_code: code.code(),
            reason: Some(reason.into()),
            transaction_id: None,
            service_uuid: None,
            characteristic_uuid: None,
        }
    }

    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn with_service_uuid(mut self, service_uuid: impl Into<String>) -> Self {
        self.service_uuid = Some(service_uuid.into());
        self
    }

    pub fn with_characteristic_uuid(mut self, characteristic_uuid: impl Into<String>) -> Self {
        self.characteristic_uuid = Some(characteristic_uuid.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&BridgeError> for ErrorPayload {
    fn from(value: &BridgeError) -> Self {
        Self::new(BridgeErrorCode::from(value), value.to_string())
    }
}
