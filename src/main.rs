use clap::Parser;
use tokio::sync::mpsc;

use sentinel::export::{self, OutputFormat};
use sentinel::{normalizer, Config, RawLine};

#[derive(Parser)]
#[command(name = "sentinel", about = "Normalise port-operations service logs into structured events")]
struct Cli {
    /// Log file to read. Reads stdin when omitted.
    file: Option<std::path::PathBuf>,

    /// Originating service, e.g. "EDI Service" or "Container Service".
    /// Routes lines to that service's classification rules.
    #[arg(long)]
    service: String,

    /// Output format. Overrides the config file default.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep the file open and stream lines as they are appended.
    #[arg(long, short = 'f')]
    follow: bool,

    /// Write debug logs to /tmp/sentinel-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::load()?;
    let format = match cli.format {
        Some(format) => format,
        None => config.output.format.parse()?,
    };

    let (tx, mut rx) = mpsc::channel::<RawLine>(256);
    let feed = tokio::spawn(async move {
        match cli.file {
            Some(path) => sentinel_feeds::file::stream(path, cli.follow, tx).await,
            None => sentinel_feeds::stdin::stream(tx).await,
        }
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut emitted = 0usize;
    let mut dropped = 0usize;

    while let Some(line) = rx.recv().await {
        match normalizer::normalize(&line.text, line.index, &cli.service) {
            Some(event) => {
                export::write_event(&mut out, &event, format, config.output.show_details)?;
                emitted += 1;
            }
            None => {
                tracing::debug!(index = line.index, "dropped line with no recognisable shape");
                dropped += 1;
            }
        }
    }

    feed.await??;
    if config.output.summary {
        tracing::info!(emitted, dropped, "normalisation complete");
    }
    Ok(())
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/sentinel-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("sentinel debug log started, tail -f /tmp/sentinel-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}
