//! Merge engine
//!
//! Recursive, field-by-field deep merge over configuration trees, plus
//! the provenance-aware subtraction used by write-back filtering.
//!
//! Merge semantics:
//! - Objects: deep-merge by key (recursive)
//! - Arrays: REPLACE (higher-priority operand wins entirely)
//! - Scalars: override (higher-priority operand wins)
//! - Explicitly present falsy values (`false`, `""`, `[]`, `null`) win;
//!   only true absence of the key falls through.

use serde_json::Value;

use crate::schema::{NotebookConfig, PartialConfig};

/// Deep merge two trees; `overlay` takes precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        // Arrays are atomic at the field level: no concatenation.
        (Value::Array(_), overlay @ Value::Array(_)) => overlay,

        (_, overlay) => overlay,
    }
}

/// Merge `overlay` over `base`; fields defined in `overlay` win.
pub fn merge_override(base: PartialConfig, overlay: PartialConfig) -> PartialConfig {
    PartialConfig::new(deep_merge(base.into_value(), overlay.into_value()))
}

/// Fill every absent field of `base` from `defaults`.
///
/// Guarantees total population: the result carries a value for every
/// field the schema recognizes. Fails when the merged tree no longer
/// matches the schema (for example an explicit `null` over a required
/// scalar).
pub fn merge_defaults(
    base: &PartialConfig,
    defaults: NotebookConfig,
) -> serde_json::Result<NotebookConfig> {
    let defaults_value = defaults.to_value()?;
    let merged = deep_merge(defaults_value, base.as_value().clone());
    serde_json::from_value(merged)
}

/// Controls which field paths are eligible for write-back subtraction.
///
/// By default every field an override defines is eligible. A filter can
/// restrict subtraction to an explicit set of dot-separated paths; a
/// listed path also covers everything nested under it.
#[derive(Debug, Clone, Default)]
pub struct WriteFilter {
    paths: Option<Vec<String>>,
}

impl WriteFilter {
    /// Subtract every override-defined field (the default).
    pub fn all() -> Self {
        Self { paths: None }
    }

    /// Subtract only the listed field paths (and their descendants).
    pub fn paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: Some(paths.into_iter().map(Into::into).collect()),
        }
    }

    fn applies(&self, path: &str) -> bool {
        match &self.paths {
            None => true,
            Some(paths) => paths
                .iter()
                .any(|p| p == path || path.starts_with(&format!("{p}."))),
        }
    }
}

/// Remove from `config` every field the override layer owns.
///
/// Field-path-scoped: for each path the override defines, the matching
/// field is removed from `config` only when its value equals the
/// override's value there; sibling fields of the same parent object are
/// retained. A nested object emptied out by subtraction is dropped.
pub fn subtract_overrides(
    config: Value,
    overrides: &PartialConfig,
    filter: &WriteFilter,
) -> PartialConfig {
    let mut config = config;
    if let (Value::Object(base_map), Value::Object(override_map)) =
        (&mut config, overrides.as_value())
    {
        subtract_map(base_map, override_map, "", filter);
    }
    PartialConfig::new(config)
}

fn subtract_map(
    base: &mut serde_json::Map<String, Value>,
    overrides: &serde_json::Map<String, Value>,
    prefix: &str,
    filter: &WriteFilter,
) {
    for (key, override_value) in overrides {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        let Some(base_value) = base.get_mut(key) else {
            continue;
        };

        match (base_value, override_value) {
            (Value::Object(base_inner), Value::Object(override_inner)) => {
                let was_populated = !base_inner.is_empty();
                subtract_map(base_inner, override_inner, &path, filter);
                if was_populated && base_inner.is_empty() {
                    base.remove(key);
                }
            }
            (base_value, override_value) => {
                if filter.applies(&path) && base_value == override_value {
                    base.remove(key);
                }
            }
        }
    }
}
