use std::io::Write;

use tracing::{info, warn};

use crate::inner::conf::cmd_args::Command;
use crate::inner::conv::bt_uuid::{canonical_text, normalize, normalize_all, short_alias};
use crate::inner::conv::characteristic::JsonConverter;
use crate::inner::conv::response::ResponseJsonConverter;
use crate::inner::error::{BridgeError, BridgeResult};
use crate::inner::model::characteristic_response::{
    MultiCharacteristicsResponse, SingleCharacteristicResponse,
};

const INVALID_MARKER: &str = "invalid";

pub fn run<W: Write>(command: &Command, out: &mut W) -> BridgeResult<()> {
    match command {
        Command::Normalize { uuids, each } => run_normalize(uuids, *each, out),
        Command::Alias { uuids } => run_alias(uuids, out),
        Command::Serialize {
            input,
            multi,
            pretty,
        } => {
            let document = std::fs::read_to_string(input)?;
            let payload = serialize_document(&document, *multi, *pretty)?;
            writeln!(out, "{payload}")?;
            Ok(())
        }
    }
}

fn run_normalize<W: Write>(uuids: &[String], each: bool, out: &mut W) -> BridgeResult<()> {
    if each {
        for input in uuids {
            match normalize(input) {
                Some(uuid) => writeln!(out, "{}", canonical_text(&uuid))?,
                None => {
                    warn!(input, "Invalid UUID");
                    writeln!(out, "{INVALID_MARKER}")?
                }
            }
        }
        return Ok(());
    }

    let Some(normalized) = normalize_all(uuids) else {
        let invalid = uuids
            .iter()
            .filter(|input| normalize(input).is_none())
            .cloned()
            .collect();
        return Err(BridgeError::InvalidIdentifiers(invalid));
    };

    info!(count = normalized.len(), "Normalized UUIDs");
    for uuid in normalized {
        writeln!(out, "{}", canonical_text(&uuid))?;
    }
    Ok(())
}

fn run_alias<W: Write>(uuids: &[String], out: &mut W) -> BridgeResult<()> {
    let Some(normalized) = normalize_all(uuids) else {
        let invalid = uuids
            .iter()
            .filter(|input| normalize(input).is_none())
            .cloned()
            .collect();
        return Err(BridgeError::InvalidIdentifiers(invalid));
    };

    for uuid in normalized {
        let alias = short_alias(&uuid).unwrap_or_else(|| canonical_text(&uuid));
        writeln!(out, "{alias}")?;
    }
    Ok(())
}

fn serialize_document(document: &str, multi: bool, pretty: bool) -> BridgeResult<String> {
    let converter = ResponseJsonConverter::default();
    let payload = if multi {
        let response: MultiCharacteristicsResponse = serde_yaml::from_str(document)?;
        render(&converter, &response, pretty)?
    } else {
        let response: SingleCharacteristicResponse = serde_yaml::from_str(document)?;
        render(&converter, &response, pretty)?
    };
    Ok(payload)
}

fn render<T>(converter: &ResponseJsonConverter, value: &T, pretty: bool) -> BridgeResult<String>
where
    ResponseJsonConverter: JsonConverter<T>,
{
    let payload = if pretty {
        converter.to_json_pretty(value)?
    } else {
        converter.to_json(value)?
    };
    Ok(payload)
}
