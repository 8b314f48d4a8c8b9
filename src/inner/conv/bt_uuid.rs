//! Bluetooth UUID helpers.
//!
//! The Bluetooth SIG assigns 16-bit and 32-bit aliases that expand into full
//! 128-bit UUIDs by placing them into the first group of the Bluetooth Base UUID
//! `0000xxxx-0000-1000-8000-00805F9B34FB`.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use tracing::debug;
use uuid::Uuid;

const BLUETOOTH_BASE: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// The Bluetooth Base UUID.
pub const BLUETOOTH_BASE_UUID: Uuid = Uuid::from_u128(BLUETOOTH_BASE);

const BASE_UUID_PREFIX: &str = "0000";
const BASE_UUID_SUFFIX: &str = "-0000-1000-8000-00805F9B34FB";
const HYPHENATED_LEN: usize = 36;
const ALIAS_SHIFT: u32 = 96;

/// Builds the full UUID for a 16-bit alias.
pub const fn from_u16(alias: u16) -> Uuid {
    Uuid::from_u128(((alias as u128) << ALIAS_SHIFT) | BLUETOOTH_BASE)
}

/// Builds the full UUID for a 32-bit alias.
pub const fn from_u32(alias: u32) -> Uuid {
    Uuid::from_u128(((alias as u128) << ALIAS_SHIFT) | BLUETOOTH_BASE)
}

/// Expands a 4 or 8 character alias against the Base UUID and parses the result.
///
/// Any other input is parsed as is and must be in the hyphenated form. Parse failures
/// are reported as `None`.
#[tracing::instrument(level = "trace")]
pub fn normalize(input: &str) -> Option<Uuid> {
    let expanded: Cow<str> = match input.chars().count() {
        4 => Cow::Owned(format!("{BASE_UUID_PREFIX}{input}{BASE_UUID_SUFFIX}")),
        8 => Cow::Owned(format!("{input}{BASE_UUID_SUFFIX}")),
        _ => Cow::Borrowed(input),
    };

    if expanded.len() != HYPHENATED_LEN {
        debug!(input, "Not a hyphenated UUID");
        return None;
    }

    match Uuid::try_parse(&expanded) {
        Ok(uuid) => Some(uuid),
        Err(err) => {
            debug!(input, %err, "Failed to parse UUID");
            None
        }
    }
}

/// Normalizes every input in order.
///
/// A single invalid input turns the whole result into `None`; successfully parsed
/// elements are discarded in that case.
pub fn normalize_all<I>(inputs: I) -> Option<Vec<Uuid>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| normalize(input.as_ref()))
        .collect()
}

pub fn canonical_text(uuid: &Uuid) -> String {
    uuid.hyphenated().to_string()
}

/// Returns the shortest alias of a UUID built on the Base UUID: 4 hex digits when it
/// fits into 16 bits, 8 otherwise.
pub fn short_alias(uuid: &Uuid) -> Option<String> {
    let value = uuid.as_u128();
    if value & ((1u128 << ALIAS_SHIFT) - 1) != BLUETOOTH_BASE {
        return None;
    }

    let alias = (value >> ALIAS_SHIFT) as u32;
    if alias & 0xffff_0000 == 0 {
        Some(format!("{alias:04x}"))
    } else {
        Some(format!("{alias:08x}"))
    }
}

/// Serde adapter accepting short aliases wherever a UUID is expected.
pub fn deserialize_normalized<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    normalize(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid UUID: {raw}")))
}
