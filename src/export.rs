//! Export — renders normalised events to an output stream.
//!
//! Two formats: `json` writes one compact JSON object per line (the shape
//! downstream pipelines ingest); `text` writes an aligned human-readable
//! row honouring the `show_details` config key.

use std::io::Write;

use sentinel_core::LogEvent;

/// Output format for the CLI, selectable via `--format` or `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format {other:?} (expected text or json)"),
        }
    }
}

/// Write one event to `out` in the requested format, newline-terminated.
pub fn write_event<W: Write>(
    out: &mut W,
    event: &LogEvent,
    format: OutputFormat,
    show_details: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, event)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", render_text(event, show_details))?;
        }
    }
    Ok(())
}

/// Render one aligned text row for an event.
pub fn render_text(event: &LogEvent, show_details: bool) -> String {
    use std::fmt::Write as _;

    let mut row = format!(
        "{:<13} {:<5} {:<18} {:<6} {}: {}",
        event.time, event.level, event.service, event.module, event.action, event.message,
    );
    if let Some(entity) = &event.entity {
        let _ = write!(row, " ({entity})");
    }
    if show_details {
        if let Some(details) = &event.details {
            let _ = write!(row, " [{details}]");
        }
    }
    row
}
