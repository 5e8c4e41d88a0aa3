//! crates/fitness_core/src/validate.rs
//!
//! Pure request-field validators. These run before any store access and have
//! no side effects; handlers translate the error into a 400 response.

use uuid::Uuid;

/// A validation failure with a human-readable reason, suitable for returning
/// to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Checks that a required name field is present and non-empty.
/// Whitespace-only values count as empty.
pub fn require_name<'a>(label: &str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError(format!("Enter {label} Name!"))),
    }
}

/// Parses a raw request string as a store identifier. Fails with
/// `Invalid <Entity> ID` when the string is not a well-formed identifier.
/// Must be called before any store operation that uses the identifier.
pub fn parse_id(entity: &str, raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| ValidationError(format!("Invalid {entity} ID")))
}
