pub(crate) mod characteristic_record;
pub(crate) mod characteristic_response;
pub(crate) mod error_payload;
