use anyhow::{Result, bail};

use mailclean_lib::{RunSummary, ValidationResult};

/// Rejects unknown formats before any network work is done.
pub fn check_format(format: &str) -> Result<()> {
    match format {
        "human" | "json" => Ok(()),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn write_summary(summary: &RunSummary, format: &str) -> Result<()> {
    match format {
        "human" => write_summary_human(summary),
        "json" => write_summary_json(summary),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn write_single(result: &ValidationResult, format: &str) -> Result<()> {
    match format {
        "human" => {
            println!("{}", single_line(result));
            Ok(())
        }
        "json" => write_single_json(result),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

fn write_summary_human(summary: &RunSummary) -> Result<()> {
    println!("{}", summary.report);
    println!(
        "Saved {} safe addresses to {}",
        summary.report.safe,
        summary.output.display()
    );
    if let Some(path) = &summary.removed_output {
        println!(
            "Saved {} removed addresses to {}",
            summary.report.removed,
            path.display()
        );
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_summary_json(summary: &RunSummary) -> Result<()> {
    let value = serde_json::json!({
        "loaded": summary.loaded,
        "report": summary.report,
        "output": summary.output,
        "removed_output": summary.removed_output,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_summary_json(_: &RunSummary) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_single_json(result: &ValidationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_single_json(_: &ValidationResult) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

fn single_line(result: &ValidationResult) -> String {
    let mut line = match result.removal_reason() {
        None => format!("[SAFE]    {}", result.address),
        Some(reason) => format!("[REMOVE]  {} :: {reason}", result.address),
    };
    line.push_str(&format!(
        " (result={}, risk={}",
        result.result, result.risk
    ));
    if result.is_role {
        line.push_str(", role");
    }
    if let Some(reason) = &result.reason {
        line.push_str(&format!(", reason={reason}"));
    }
    line.push(')');
    line
}
