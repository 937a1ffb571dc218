//! Integration tests for the mkhelp rule-listing tool

mod listing_commands;

use std::path::PathBuf;
use tempfile::TempDir;

/// Write a rule file into `dir` and return its path.
pub fn write_rule_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("Makefile");
    std::fs::write(&path, contents).unwrap();
    path
}

/// A small rule file exercising docs, multi-line docs, omission, and sorting.
pub const SAMPLE_RULES: &str = "\
.PHONY: clean reqs lint
PYTHON := python3

## Delete all
## compiled py files
clean:
\tfind . -name '*.pyc' -delete

## Install dependencies
reqs: test-env
\tpip install -r requirements.txt

lint:
\tflake8 src

## Set up the
## development environment
Bootstrap:
\tmake env
";
