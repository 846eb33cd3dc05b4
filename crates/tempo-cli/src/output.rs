use std::fmt::Write as _;

use serde::Serialize;
use tempo_engine::RunSummary;

use crate::check::CheckReport;
use crate::cli::OutputFormat;

fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a run summary in the requested format.
pub fn render_summary(summary: &RunSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => render_json(summary),
        OutputFormat::Text => {
            let rows = [
                ("records", summary.total),
                ("updated", summary.updated),
                ("already complete", summary.already_complete),
                ("skipped (blank)", summary.skipped_blank),
                ("skipped (no options)", summary.skipped_no_options),
                ("unresolved", summary.unresolved),
                ("write failed", summary.failed),
            ];
            let mut out = format!("Tempo run for {}", summary.date);
            for (label, count) in rows {
                let _ = write!(out, "\n  {label:<21}{count}");
            }
            Ok(out)
        }
    }
}

/// Render a `--check` report in the requested format.
pub fn render_check(report: &CheckReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Text => {
            let mut out = String::from("Configuration");
            for setting in &report.settings {
                let _ = write!(out, "\n  {:<19}{}", setting.name, setting.value);
            }
            out.push_str("\nConnections");
            for connection in &report.connections {
                let mark = if connection.ok { "ok" } else { "FAILED" };
                let _ = write!(
                    out,
                    "\n  {:<7}{mark:<7}{}",
                    connection.service, connection.detail
                );
            }
            Ok(out)
        }
    }
}

pub fn print_summary(summary: &RunSummary, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_summary(summary, format)?);
    Ok(())
}

pub fn print_check(report: &CheckReport, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_check(report, format)?);
    Ok(())
}
