pub(crate) mod bt_uuid;
pub(crate) mod characteristic;
pub(crate) mod response;
