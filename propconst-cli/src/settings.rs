//! Optional TOML configuration for `propconst generate`.
//!
//! ```toml
//! namespace = "com.example.i18n"
//! flatten = false
//! suffix = "Keys"
//! template = "keys"
//! include = ["**/*.properties", "**/*.xml"]
//! exclude = ["legacy/**"]
//!
//! [options]
//! genGetters = "true"
//! ```
//!
//! Relative `resource-dir` and `output-dir` entries are resolved against the
//! directory containing the file. Command line flags take precedence.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub resource_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub flatten: Option<bool>,
    pub suffix: Option<String>,
    pub template: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub options: BTreeMap<String, String>,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Invalid configuration file: {}", e))
    }

    /// Reads `path`, resolving relative directories against its parent.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
        let mut settings = Self::from_toml(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for dir in [&mut settings.resource_dir, &mut settings.output_dir]
            .into_iter()
            .flatten()
        {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        Ok(settings)
    }
}

/// Parses a `KEY=VALUE` option.
pub fn parse_option(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("Expected KEY=VALUE, got '{}'", s)),
    }
}
