//! YAML codec for raw configuration documents
//!
//! Decoding preserves exactly what is present in the source: no defaults
//! are injected and no overrides are applied. For any valid document,
//! `decode(encode(p)) == p`.

use notebook_fs::ConfigLocation;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::schema::PartialConfig;

/// Decode YAML text into a partial configuration.
///
/// An empty document (or one holding only comments) decodes to the empty
/// partial. A document whose top level is not a mapping is malformed.
/// The `location` is only used for error reporting.
pub fn decode(content: &str, location: &ConfigLocation) -> Result<PartialConfig> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        path: location.path(),
        message: e.to_string(),
    })?;

    match value {
        Value::Null => Ok(PartialConfig::empty()),
        Value::Object(_) => Ok(PartialConfig::new(value)),
        other => Err(ConfigError::Parse {
            path: location.path(),
            message: format!(
                "expected a mapping at the document root, found {}",
                value_kind(&other)
            ),
        }),
    }
}

/// Encode a partial configuration as YAML text.
pub fn encode(partial: &PartialConfig, location: &ConfigLocation) -> Result<String> {
    serde_yaml::to_string(partial.as_value()).map_err(|e| ConfigError::Persist {
        path: location.path(),
        message: e.to_string(),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
