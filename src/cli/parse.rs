//! CLI parse: clap types for mkhelp. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mkhelp - self-documenting help listings for Makefile-style rule files
#[derive(Parser)]
#[command(name = "mkhelp")]
#[command(about = "Print aligned, documented help for Makefile targets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Rule file to scan
    #[arg(short, long, default_value = "Makefile")]
    pub file: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the detected terminal width
    #[arg(long)]
    pub width: Option<usize>,

    /// Disable ANSI color and bold in the listing
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the full help listing (default when no subcommand is given)
    Show,
    /// List documented rule names
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Report targets that have no documentation comment
    Check {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
