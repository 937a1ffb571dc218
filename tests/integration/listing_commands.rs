//! Integration tests for show, list, and check routed through RunContext.

use crate::integration::{write_rule_file, SAMPLE_RULES};
use mkhelp::cli::{Commands, RunContext};
use mkhelp::error::HelpError;
use tempfile::TempDir;

fn context(width: usize) -> (TempDir, RunContext) {
    let temp = TempDir::new().unwrap();
    let rule_file = write_rule_file(&temp, SAMPLE_RULES);
    let ctx = RunContext::new(rule_file, None)
        .unwrap()
        .with_overrides(Some(width), true);
    (temp, ctx)
}

#[test]
fn test_show_lists_sorted_documented_rules() {
    let (_temp, ctx) = context(80);
    let out = ctx.execute(None).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Available rules:");
    assert_eq!(lines[1], "");
    // Case-insensitive order: Bootstrap, clean, reqs. `lint` is undocumented.
    assert!(lines[2].starts_with("Bootstrap"));
    assert!(lines[3].starts_with("clean"));
    assert!(lines[4].starts_with("reqs"));
    assert!(!out.contains("lint"));
}

#[test]
fn test_show_aligns_descriptions_at_left_column() {
    let (_temp, ctx) = context(80);
    let out = ctx.execute(Some(&Commands::Show)).unwrap();
    let clean_line = out
        .lines()
        .find(|l| l.starts_with("clean"))
        .expect("clean entry");
    assert_eq!(
        clean_line,
        format!("{:<19} Delete all compiled py files", "clean")
    );
}

#[test]
fn test_show_wraps_to_narrow_terminal() {
    let (_temp, ctx) = context(40);
    let out = ctx.execute(None).unwrap();
    // "Set up the development environment" does not fit in 21 columns.
    let bootstrap_at = out.find("Bootstrap").unwrap();
    let entry: Vec<&str> = out[bootstrap_at..].lines().take(2).collect();
    assert_eq!(entry[0], format!("{:<19} Set up the", "Bootstrap"));
    assert_eq!(entry[1], format!("{} development", " ".repeat(19)));
}

#[test]
fn test_list_text_outputs_names_only() {
    let (_temp, ctx) = context(80);
    let out = ctx
        .execute(Some(&Commands::List {
            format: "text".to_string(),
        }))
        .unwrap();
    assert_eq!(out, "Bootstrap\nclean\nreqs");
}

#[test]
fn test_list_json_carries_names_and_descriptions() {
    let (_temp, ctx) = context(80);
    let out = ctx
        .execute(Some(&Commands::List {
            format: "json".to_string(),
        }))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rules = parsed["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[2]["name"], "reqs");
    assert_eq!(rules[2]["description"], "Install dependencies");
}

#[test]
fn test_check_reports_undocumented_targets() {
    let (_temp, ctx) = context(80);
    let out = ctx
        .execute(Some(&Commands::Check {
            format: "text".to_string(),
        }))
        .unwrap();
    assert!(out.contains("Undocumented targets (1):"));
    assert!(out.contains("  lint"));
}

#[test]
fn test_check_json_counts_undocumented() {
    let (_temp, ctx) = context(80);
    let out = ctx
        .execute(Some(&Commands::Check {
            format: "json".to_string(),
        }))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["undocumented"][0], "lint");
}

#[test]
fn test_check_all_documented() {
    let temp = TempDir::new().unwrap();
    let rule_file = write_rule_file(&temp, "## Only rule\nonly:\n");
    let ctx = RunContext::new(rule_file, None).unwrap();
    let out = ctx
        .execute(Some(&Commands::Check {
            format: "text".to_string(),
        }))
        .unwrap();
    assert_eq!(out, "All targets documented.");
}

#[test]
fn test_invalid_format_is_rejected() {
    let (_temp, ctx) = context(80);
    let err = ctx
        .execute(Some(&Commands::List {
            format: "yaml".to_string(),
        }))
        .unwrap_err();
    assert!(matches!(err, HelpError::InvalidFormat(_)));
}

#[test]
fn test_missing_rule_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let ctx = RunContext::new(temp.path().join("absent"), None).unwrap();
    let err = ctx.execute(None).unwrap_err();
    assert!(matches!(err, HelpError::ReadFailed { .. }));
}

#[test]
fn test_show_without_color_override_emits_ansi() {
    let temp = TempDir::new().unwrap();
    let rule_file = write_rule_file(&temp, SAMPLE_RULES);
    let ctx = RunContext::new(rule_file, None)
        .unwrap()
        .with_overrides(Some(80), false);
    let out = ctx.execute(None).unwrap();
    assert!(out.contains("\u{1b}[36m"), "names should be cyan by default");
    assert!(out.contains("\u{1b}[1m"), "header should be bold by default");
}
