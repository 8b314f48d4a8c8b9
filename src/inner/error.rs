use crate::inner::conv::characteristic::ConversionError;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Invalid identifiers: {0:?}")]
    InvalidIdentifiers(Vec<String>),

    #[error("Conversion error: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("IoError: {0:?}")]
    IoError(#[from] std::io::Error),

    #[error("Input document error: {0}")]
    InputError(#[from] serde_yaml::Error),

    #[error("Serialization Error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
