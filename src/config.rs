//! Configuration System
//!
//! Layered configuration in the order defaults, then an optional
//! `mkhelp.toml` next to the rule file, then `MKHELP_*` environment
//! variables. Everything has a working default; no config file is required.

use crate::error::HelpError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MkhelpConfig {
    /// Listing layout and styling
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listing layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Columns reserved for the rule name (left-justified)
    #[serde(default = "default_left_column_width")]
    pub left_column_width: usize,

    /// Terminal width assumed when the query fails
    #[serde(default = "default_fallback_width")]
    pub fallback_width: usize,

    /// Emit ANSI color and bold escapes
    #[serde(default = "default_true")]
    pub color: bool,

    /// Header line printed above the listing
    #[serde(default = "default_header")]
    pub header: String,
}

fn default_left_column_width() -> usize {
    19
}

fn default_fallback_width() -> usize {
    80
}

fn default_true() -> bool {
    true
}

fn default_header() -> String {
    "Available rules:".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            left_column_width: default_left_column_width(),
            fallback_width: default_fallback_width(),
            color: default_true(),
            header: default_header(),
        }
    }
}

impl RenderConfig {
    /// Validate layout constraints
    pub fn validate(&self) -> Result<(), String> {
        if self.left_column_width == 0 {
            return Err("left_column_width must be at least 1".to_string());
        }
        if self.fallback_width <= self.left_column_width {
            return Err(format!(
                "fallback_width ({}) must exceed left_column_width ({})",
                self.fallback_width, self.left_column_width
            ));
        }
        Ok(())
    }
}

impl MkhelpConfig {
    /// Validate the full configuration
    pub fn validate(&self) -> Result<(), HelpError> {
        self.render.validate().map_err(HelpError::ConfigError)
    }
}

/// Configuration loader: builds the layered config source stack.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a rule file: `mkhelp.toml` in the rule file's
    /// directory (if present), then environment overrides.
    pub fn load(rule_file: &Path) -> Result<MkhelpConfig, HelpError> {
        let dir = rule_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut builder = Config::builder();
        let local = dir.join("mkhelp.toml");
        if local.exists() {
            builder = builder.add_source(File::from(local).required(false));
        }

        Self::finish(builder)
    }

    /// Load configuration from an explicit file path (the file must exist),
    /// then environment overrides.
    pub fn load_from_file(path: &Path) -> Result<MkhelpConfig, HelpError> {
        let builder = Config::builder().add_source(File::from(path.to_path_buf()));
        Self::finish(builder)
    }

    fn finish(
        builder: config::builder::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<MkhelpConfig, HelpError> {
        // try_parsing so numeric and bool env values deserialize into
        // usize/bool fields instead of arriving as strings.
        let settings = builder
            .add_source(
                Environment::with_prefix("MKHELP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: MkhelpConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
