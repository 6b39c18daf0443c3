//! # Check Subcommand
//!
//! Validates a record (a YAML or JSON mapping of field name to value)
//! against a YAML form definition, reporting every failing field.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use canteiro_core::{FormReport, FormSpec};

use crate::EXIT_INVALID;

/// Arguments for `canteiro check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Form definition (YAML), resolved against --forms-dir when relative.
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// Record to check: a YAML or JSON mapping of field name to value.
    #[arg(value_name = "VALUES")]
    pub values: PathBuf,

    /// Print the full report as JSON instead of one line per failure.
    #[arg(long)]
    pub json: bool,
}

/// Execute `canteiro check`.
///
/// Returns exit code 0 when every field passes, 1 otherwise.
pub fn run_check(args: &CheckArgs, forms_dir: &Path, out: &mut impl Write) -> Result<u8> {
    let form_path = crate::resolve_path(&args.form, forms_dir);
    let form = FormSpec::from_path(&form_path)
        .with_context(|| format!("failed to load form {}", form_path.display()))?;

    let values = load_values(&args.values)?;
    let unknown: Vec<&str> = values
        .keys()
        .map(String::as_str)
        .filter(|name| form.field(name).is_none())
        .collect();
    if !unknown.is_empty() {
        tracing::warn!(fields = ?unknown, "record has fields the form does not define");
    }

    let report = form.check(&values);
    tracing::info!(
        checked = report.checked,
        failed = report.errors.len(),
        "record checked"
    );

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        print_report(&report, out)?;
    }

    Ok(if report.is_valid() { 0 } else { EXIT_INVALID })
}

fn print_report(report: &FormReport, out: &mut impl Write) -> Result<()> {
    for error in &report.errors {
        writeln!(out, "  FAIL: {} — {}", error.field, error.message)?;
    }
    writeln!(
        out,
        "Fields: {}/{} passed",
        report.checked - report.errors.len(),
        report.checked
    )?;
    Ok(())
}

/// Read a record file. JSON is valid YAML, so one parser covers both.
/// Scalar values (numbers, booleans) are taken as their text.
fn load_values(path: &Path) -> Result<BTreeMap<String, String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&text)
        .with_context(|| format!("{} is not a mapping of field values", path.display()))?;

    raw.into_iter()
        .map(|(name, value)| {
            let text = match value {
                serde_yaml::Value::Null => String::new(),
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                other => anyhow::bail!("field {name:?} has a non-scalar value: {other:?}"),
            };
            Ok((name, text))
        })
        .collect()
}
