//! Builder configuration.
//!
//! Settings are read from a TOML file, `.formbuilder.toml` by default:
//!
//! ```toml
//! form_name = "Customer intake"
//! palette_title = "Form Builder"
//! phone_pattern = '^\+?[0-9 ]{6,20}$'
//! print_json = true
//!
//! [[countries]]
//! code = "NL"
//! name = "Netherlands"
//! ```

use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    data::{field::DEFAULT_PHONE_PATTERN, schema::DEFAULT_FORM_NAME},
    preview::countries,
};

/// Configuration file looked up when none is given.
pub const DEFAULT_CONFIG_PATH: &str = ".formbuilder.toml";

/// Settings of the form builder.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct BuilderConfig {
    /// Name a new form starts with.
    pub form_name: String,
    /// Heading of the palette sidebar.
    pub palette_title: String,
    /// Pattern assigned to newly added phone fields.
    pub phone_pattern: String,
    /// Countries offered by country fields without own options.
    ///
    /// When unset the built-in ISO 3166 list is used.
    pub countries: Option<Vec<Country>>,
    /// Print the debug JSON of the form when the builder exits.
    pub print_json: bool,
}

/// A country entry offered by country fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, submitted as the value.
    pub code: String,
    /// Display name, looked up from the code when left out.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Country {
    /// Name shown in country selects.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return &self.name;
        }
        countries::name_of(&self.code).unwrap_or(&self.code)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            form_name: DEFAULT_FORM_NAME.to_string(),
            palette_title: "Form Builder".to_string(),
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
            countries: None,
            print_json: false,
        }
    }
}

impl BuilderConfig {
    /// Load the configuration, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed,
    /// or when `phone_pattern` is not a valid regular expression.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to access {}", path.display()))?;
        if !exists {
            debug!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and check a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: BuilderConfig = toml::from_str(content)?;
        if !config.phone_pattern.is_empty() {
            regex::Regex::new(&config.phone_pattern)
                .with_context(|| format!("invalid phone_pattern '{}'", config.phone_pattern))?;
        }
        Ok(config)
    }

    /// JSON Schema describing the configuration file.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(BuilderConfig);
        serde_json::to_value(&schema).unwrap_or_default()
    }
}
