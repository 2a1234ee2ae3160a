//! Console output formatter for command outcomes

use colored::Colorize;
use netcall_application::DotNetError;
use netcall_domain::CommandOutcome;
use serde_json::json;

/// Formats command outcomes and failures for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One-line success summary, preceded by captured stdout if any
    pub fn format(outcome: &CommandOutcome) -> String {
        let mut output = String::new();

        if let Some(stdout) = outcome.stdout.as_deref().filter(|s| !s.is_empty()) {
            output.push_str(stdout);
            if !stdout.ends_with('\n') {
                output.push('\n');
            }
        }

        output.push_str(&format!(
            "{} {} {}",
            "✓".green().bold(),
            format!("dotnet {}", outcome.command).bold(),
            format!("succeeded in {}", Self::duration(outcome.duration_ms)).dimmed()
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &CommandOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable failure, with captured stderr indented below
    pub fn format_error(error: &DotNetError) -> String {
        let mut output = format!("{} {}", "✗".red().bold(), error.to_string().red());

        match error {
            DotNetError::ToolExecution {
                stderr: Some(stderr),
                ..
            } if !stderr.trim().is_empty() => {
                output.push('\n');
                output.push_str(&Self::indent(stderr.trim_end(), "  "));
            }
            DotNetError::ToolNotFound { .. } => {
                output.push_str(&format!(
                    "\n  {}",
                    "Install the .NET SDK or pass --tool-path".dimmed()
                ));
            }
            _ => {}
        }

        output
    }

    /// Format a failure as JSON
    pub fn format_error_json(error: &DotNetError) -> String {
        let mut value = json!({
            "error": error.to_string(),
            "exit_code": error.exit_code(),
        });
        if let DotNetError::ToolExecution {
            command, stderr, ..
        } = error
        {
            value["command"] = json!(command);
            value["stderr"] = json!(stderr);
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn duration(ms: u64) -> String {
        if ms < 1000 {
            format!("{}ms", ms)
        } else {
            format!("{:.2}s", ms as f64 / 1000.0)
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
