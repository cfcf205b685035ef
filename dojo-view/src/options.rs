//! Container options and their loaders

use crate::{DojoError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Supported option file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// A value that may be given either as a single item or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// Bulk container configuration.
///
/// Every field is optional; [`Container::set_options`](crate::Container::set_options)
/// applies the present ones through the regular mutators, in declaration
/// order, so validation rules still hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerOptions {
    pub require_modules: Option<OneOrMany>,
    pub module_paths: Option<IndexMap<String, String>>,
    pub layers: Option<OneOrMany>,
    pub cdn_base: Option<String>,
    pub cdn_version: Option<String>,
    pub cdn_dojo_path: Option<String>,
    pub local_path: Option<String>,
    pub dojo_config: Option<Map<String, Value>>,
    pub stylesheet_modules: Option<OneOrMany>,
    pub stylesheets: Option<OneOrMany>,
    pub register_dojo_stylesheet: Option<bool>,
    pub enable: Option<bool>,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| DojoError::Config(format!("JSON parse error: {}", e)))
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DojoError::Config(format!("TOML parse error: {}", e)))
    }

    /// Parse options in the given format
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        match format {
            FileFormat::Json => Self::from_json_str(content),
            FileFormat::Toml => Self::from_toml_str(content),
        }
    }

    /// Load options from a file, detecting the format from its extension
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DojoError::Config("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| DojoError::Config(format!("Unsupported format: {}", ext)))?;

        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Serialize options back to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_require_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require_modules = Some(OneOrMany::Many(modules.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_module_path(mut self, module: impl Into<String>, path: impl Into<String>) -> Self {
        self.module_paths
            .get_or_insert_with(IndexMap::new)
            .insert(module.into(), path.into());
        self
    }

    pub fn with_cdn_version(mut self, version: impl Into<String>) -> Self {
        self.cdn_version = Some(version.into());
        self
    }

    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn with_dojo_config_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.dojo_config
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_stylesheet_module(mut self, module: impl Into<String>) -> Self {
        let mut modules = self
            .stylesheet_modules
            .take()
            .map(OneOrMany::into_vec)
            .unwrap_or_default();
        modules.push(module.into());
        self.stylesheet_modules = Some(OneOrMany::Many(modules));
        self
    }

    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = Some(enable);
        self
    }
}
