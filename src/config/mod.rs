//! Configuration management for `taiga_report`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides (`--source`)
//! 2. Explicit config file (`--config <PATH>`)
//! 3. Defaults
//!
//! Nothing is read implicitly: without flags the report always comes from
//! the built-in export URL. The environment and home directory are never
//! consulted.

use crate::error::{ReportError, Result};
use crate::fetch::{DEFAULT_REPORT_URL, ReportSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SOURCE_KEY: &str = "source";

/// A flat key/value configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub values: HashMap<String, String>,
}

impl ConfigLayer {
    /// Merge another layer on top of this one (higher precedence wins).
    pub fn merge_from(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Merge multiple layers in precedence order (lowest to highest).
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            merged.merge_from(layer);
        }
        merged
    }

    /// Build a layer from a YAML file path. Missing files return empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&contents)?;
        Ok(layer_from_yaml_value(&value))
    }

    fn insert(&mut self, key: &str, value: String) {
        self.values.insert(normalize_key(key), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(&normalize_key(key))
    }
}

/// CLI overrides for config loading (optional).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source: Option<String>,
    pub config: Option<PathBuf>,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        let mut layer = ConfigLayer::default();
        if let Some(source) = &self.source {
            layer.insert(SOURCE_KEY, source.clone());
        }
        layer
    }
}

/// Settings the report run needs, after all layers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReporterConfig {
    pub source: ReportSource,
}

impl ReporterConfig {
    /// Resolve settings from a merged layer. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is present but blank.
    pub fn from_layer(layer: &ConfigLayer) -> Result<Self> {
        let source = match layer.get(SOURCE_KEY) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ReportError::Config("source must not be empty".to_string()));
            }
            Some(raw) => ReportSource::parse(raw),
            None => ReportSource::default(),
        };
        Ok(Self { source })
    }
}

/// Default config layer (lowest precedence).
#[must_use]
pub fn default_config_layer() -> ConfigLayer {
    let mut layer = ConfigLayer::default();
    layer.insert(SOURCE_KEY, DEFAULT_REPORT_URL.to_string());
    layer
}

/// Load an explicitly named config file, which must exist.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not valid YAML.
pub fn load_explicit_config(path: &Path) -> Result<ConfigLayer> {
    if !path.is_file() {
        return Err(ReportError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    ConfigLayer::from_yaml(path)
}

/// Load configuration with the documented precedence order.
///
/// # Errors
///
/// Returns an error if any config file cannot be read or parsed, or the
/// merged values are invalid.
pub fn load_config(cli: &CliOverrides) -> Result<ReporterConfig> {
    let explicit = match &cli.config {
        Some(path) => load_explicit_config(path)?,
        None => ConfigLayer::default(),
    };

    let merged = ConfigLayer::merge_layers(&[
        default_config_layer(),
        explicit,
        cli.as_layer(),
    ]);

    let config = ReporterConfig::from_layer(&merged)?;
    debug!(source = %config.source, "Resolved configuration");
    Ok(config)
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

fn layer_from_yaml_value(value: &serde_yaml::Value) -> ConfigLayer {
    let mut layer = ConfigLayer::default();
    let mut flat = HashMap::new();
    flatten_yaml(value, "", &mut flat);

    for (key, value) in flat {
        layer.insert(&key, value);
    }

    layer
}

fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, out: &mut HashMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, value) in map {
                let Some(key_str) = key.as_str() else {
                    continue;
                };
                let next_prefix = if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml(value, &next_prefix, out);
            }
        }
        _ => {
            if let Some(value) = yaml_scalar_to_string(value) {
                out.insert(prefix.to_string(), value);
            }
        }
    }
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Bool(v) => Some(v.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_) => None,
        serde_yaml::Value::Tagged(tagged) => yaml_scalar_to_string(&tagged.value),
    }
}
