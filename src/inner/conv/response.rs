use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::inner::conv::characteristic::{
    into_object, CharacteristicJsonConverter, ConversionResult, JsonConverter,
};
use crate::inner::model::characteristic_record::CharacteristicRecord;
use crate::inner::model::characteristic_response::{
    MultiCharacteristicsResponse, SingleCharacteristicResponse,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SingleCharacteristicPayload<'a> {
    service_uuid: &'a str,
    service_id: i64,
    transaction_id: &'a str,
    characteristic: Map<String, Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MultiCharacteristicsPayload<'a> {
    service_uuid: &'a str,
    service_id: i64,
    characteristics: Vec<Map<String, Value>>,
}

/// Serializes responses, delegating each characteristic to `C`.
#[derive(Debug, Clone, Default)]
pub struct ResponseJsonConverter<C = CharacteristicJsonConverter> {
    characteristic_converter: C,
}

impl<C> ResponseJsonConverter<C>
where
    C: JsonConverter<CharacteristicRecord>,
{
    pub fn new(characteristic_converter: C) -> Self {
        Self {
            characteristic_converter,
        }
    }

    fn convert_characteristic(
        &self,
        characteristic: &CharacteristicRecord,
    ) -> ConversionResult<Map<String, Value>> {
        let value = self.characteristic_converter.to_json_value(characteristic)?;
        into_object("characteristic", value)
    }
}

impl<C> JsonConverter<SingleCharacteristicResponse> for ResponseJsonConverter<C>
where
    C: JsonConverter<CharacteristicRecord>,
{
    #[tracing::instrument(level = "debug", skip_all, fields(transaction_id = %value.transaction_id), err)]
    fn to_json_value(&self, value: &SingleCharacteristicResponse) -> ConversionResult<Value> {
        let payload = SingleCharacteristicPayload {
            service_uuid: &value.service_uuid,
            service_id: value.service_id,
            transaction_id: &value.transaction_id,
            characteristic: self.convert_characteristic(&value.characteristic)?,
        };
        debug!(characteristic = %value.characteristic, "Serialized characteristic response");
        Ok(serde_json::to_value(payload)?)
    }
}

impl<C> JsonConverter<MultiCharacteristicsResponse> for ResponseJsonConverter<C>
where
    C: JsonConverter<CharacteristicRecord>,
{
    #[tracing::instrument(level = "debug", skip_all, fields(service_uuid = %value.service_uuid), err)]
    fn to_json_value(&self, value: &MultiCharacteristicsResponse) -> ConversionResult<Value> {
        let characteristics = value
            .characteristics
            .iter()
            .map(|characteristic| self.convert_characteristic(characteristic))
            .collect::<ConversionResult<Vec<_>>>()?;

        let payload = MultiCharacteristicsPayload {
            service_uuid: &value.service_uuid,
            service_id: value.service_id,
            characteristics,
        };
        Ok(serde_json::to_value(payload)?)
    }
}

/// Serializes a single characteristic response with the default characteristic converter.
pub fn serialize(response: &SingleCharacteristicResponse) -> ConversionResult<String> {
    ResponseJsonConverter::<CharacteristicJsonConverter>::default().to_json(response)
}

pub fn serialize_multi(response: &MultiCharacteristicsResponse) -> ConversionResult<String> {
    ResponseJsonConverter::<CharacteristicJsonConverter>::default().to_json(response)
}
