//! CLI route: single route table and run context. Dispatches to extraction
//! and rendering, then formats per-command output.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, MkhelpConfig};
use crate::error::HelpError;
use crate::makefile::{self, ScanOutcome};
use crate::render::render_listing;
use crate::term;
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: rule file path, loaded config, and
/// flag overrides applied on top of it.
pub struct RunContext {
    rule_file: PathBuf,
    config: MkhelpConfig,
    width_override: Option<usize>,
    force_no_color: bool,
}

impl RunContext {
    /// Create run context from rule file path and optional config path.
    /// Uses ConfigLoader only.
    pub fn new(rule_file: PathBuf, config_path: Option<PathBuf>) -> Result<Self, HelpError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&rule_file)?
        };

        Ok(Self {
            rule_file,
            config,
            width_override: None,
            force_no_color: false,
        })
    }

    /// Apply flag overrides: `--width` and `--no-color`.
    pub fn with_overrides(mut self, width: Option<usize>, no_color: bool) -> Self {
        self.width_override = width;
        self.force_no_color = no_color;
        self
    }

    /// Execute a command and return its stdout payload.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, HelpError> {
        info!(command = command_name(command), file = %self.rule_file.display(), "Executing command");
        let outcome = self.scan_rule_file()?;

        match command {
            None | Some(Commands::Show) => self.run_show(&outcome),
            Some(Commands::List { format }) => self.run_list(&outcome, format),
            Some(Commands::Check { format }) => self.run_check(&outcome, format),
        }
    }

    fn scan_rule_file(&self) -> Result<ScanOutcome, HelpError> {
        let text =
            std::fs::read_to_string(&self.rule_file).map_err(|e| HelpError::ReadFailed {
                path: self.rule_file.clone(),
                source: e,
            })?;
        let outcome = makefile::scan(&text);
        debug!(
            documented = outcome.documented.len(),
            undocumented = outcome.undocumented.len(),
            "Scan complete"
        );
        Ok(outcome)
    }

    fn run_show(&self, outcome: &ScanOutcome) -> Result<String, HelpError> {
        let width = self
            .width_override
            .unwrap_or_else(|| term::terminal_width(self.config.render.fallback_width));
        let mut render_config = self.config.render.clone();
        if self.force_no_color {
            render_config.color = false;
        }
        Ok(render_listing(&outcome.documented, width, &render_config))
    }

    fn run_list(&self, outcome: &ScanOutcome, format: &str) -> Result<String, HelpError> {
        match format {
            "text" => Ok(outcome
                .documented
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            "json" => Ok(serde_json::to_string_pretty(&json!({
                "rules": outcome.documented,
            }))?),
            other => Err(HelpError::InvalidFormat(other.to_string())),
        }
    }

    fn run_check(&self, outcome: &ScanOutcome, format: &str) -> Result<String, HelpError> {
        match format {
            "text" => {
                if outcome.undocumented.is_empty() {
                    Ok("All targets documented.".to_string())
                } else {
                    let mut lines = vec![format!(
                        "Undocumented targets ({}):",
                        outcome.undocumented.len()
                    )];
                    for name in &outcome.undocumented {
                        lines.push(format!("  {}", name));
                    }
                    Ok(lines.join("\n"))
                }
            }
            "json" => Ok(serde_json::to_string_pretty(&json!({
                "undocumented": outcome.undocumented,
                "count": outcome.undocumented.len(),
            }))?),
            other => Err(HelpError::InvalidFormat(other.to_string())),
        }
    }
}
