//! mkhelp: self-documenting help for Makefile-style rule files.
//!
//! Extracts `## ` documentation comments paired with target declarations
//! and renders an aligned, color-highlighted, word-wrapped listing.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod makefile;
pub mod render;
pub mod term;
