//! services/api/src/web/payload.rs
//!
//! Helpers for lenient request payloads. The mobile and admin clients send
//! boolean flags as either JSON booleans or 0/1 numbers, and as plain text
//! in multipart forms.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    fn as_bool(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Int(i) => *i != 0,
        }
    }
}

/// Deserializes a required flag that may be a boolean or a 0/1 number.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Flag::deserialize(deserializer)?.as_bool())
}

/// Deserializes an optional flag that may be a boolean or a 0/1 number.
pub fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Flag>::deserialize(deserializer)?.map(|f| f.as_bool()))
}

/// Parses a flag sent as multipart text. `None` when the text is not a
/// recognizable flag value.
pub fn parse_flag(text: &str) -> Option<bool> {
    match text.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
