// File: crates/vizkit-core/src/config/mod.rs
// Summary: Style configuration document: loading with fallback and defensive keyed lookups.

//! Style configuration.
//!
//! A [`StyleConfig`] is the YAML document as written by the user. It is never
//! merged with the defaults; instead every consumer reads it through
//! [`StyleConfig::get_or`], which resolves a key path to the user's value or to
//! a literal default. A document that only carries some sections is therefore
//! always safe to render with.

mod defaults;
mod params;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::{VizError, VizResult};

pub use defaults::{DEFAULT_CONFIG_PATH, DEFAULT_STYLE_YAML};
pub use params::{
    AxesParams, BBoxMode, BoxParams, FontSizes, GlobalSettings, HeatmapParams, HistogramParams,
    LineStyle, SaveParams, ScatterParams, TrendLineParams,
};

#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    root: Value,
}

impl Default for StyleConfig {
    /// The built-in document used whenever a user document cannot be loaded.
    fn default() -> Self {
        Self { root: defaults::default_document().clone() }
    }
}

impl StyleConfig {
    /// Load the document at `path`, falling back to [`StyleConfig::default`]
    /// on any read or parse failure. Never fails.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded style config");
                config
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Failed to load config, falling back to built-in defaults"
                );
                Self::default()
            }
        }
    }

    /// Load the document at `path`, reporting failures instead of recovering.
    pub fn try_load(path: impl AsRef<Path>) -> VizResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| VizError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> VizResult<Self> {
        let root: Value = serde_yaml::from_str(text)?;
        Self::from_value(root)
    }

    /// Wrap an already parsed document. The root must be a mapping.
    pub fn from_value(root: Value) -> VizResult<Self> {
        if !root.is_mapping() {
            return Err(VizError::ConfigNotMapping);
        }
        Ok(Self { root })
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Walk a key path through nested mappings.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.root, |node, key| node.get(*key))
    }

    /// Resolve `path` to a typed value, or `default` when the key is absent.
    ///
    /// A present but mistyped value also resolves to `default`, with a warning
    /// naming the key so that typos in the document stay visible.
    pub fn get_or<T: DeserializeOwned>(&self, path: &[&str], default: T) -> T {
        let Some(value) = self.lookup(path) else {
            return default;
        };
        match serde_yaml::from_value(value.clone()) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(key = %path.join("."), error = %err, "ignoring mistyped style value");
                default
            }
        }
    }

    /// Nested mapping at `path`, if present.
    pub fn section(&self, path: &[&str]) -> Option<&Mapping> {
        self.lookup(path).and_then(Value::as_mapping)
    }

    /// String-to-string pairs of the mapping at `path`, in document order.
    /// Entries whose key or value is not a string are skipped.
    pub fn string_pairs(&self, path: &[&str]) -> Vec<(String, String)> {
        let Some(section) = self.section(path) else {
            return Vec::new();
        };
        section
            .iter()
            .filter_map(|(k, v)| Some((k.as_str()?.to_owned(), v.as_str()?.to_owned())))
            .collect()
    }
}
