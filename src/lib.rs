//! Conversions between a BLE host stack and a cross-platform plugin boundary.
//!
//! Two stateless pieces: characteristic responses serialized into the JSON payloads
//! the plugin transport expects, and Bluetooth UUID normalization of 16-bit and
//! 32-bit aliases against the Bluetooth Base UUID.

mod inner;

pub use inner::command::run;
pub use inner::conf::cmd_args::{AppConf, Command};
pub use inner::conv::bt_uuid::{
    canonical_text, deserialize_normalized, from_u16, from_u32, normalize, normalize_all,
    short_alias, BLUETOOTH_BASE_UUID,
};
pub use inner::conv::characteristic::{
    CharacteristicJsonConverter, ConversionError, ConversionResult, JsonConverter,
};
pub use inner::conv::response::{serialize, serialize_multi, ResponseJsonConverter};
pub use inner::error::{BridgeError, BridgeResult};
pub use inner::model::characteristic_record::{CharacteristicProperties, CharacteristicRecord};
pub use inner::model::characteristic_response::{
    MultiCharacteristicsResponse, SingleCharacteristicResponse,
};
pub use inner::model::error_payload::{BridgeErrorCode, ErrorPayload};
