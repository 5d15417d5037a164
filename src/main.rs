use anyhow::Context;
use changescan::output;
use changescan_core::config::{Config, OutputFormat};
use changescan_core::FeedMode;
use clap::Parser;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changescan", about = "Scan a captured _changes feed into one record per line")]
struct Cli {
    /// Feed to read; stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Record rendering: jsonl, ids or seq. Defaults to `[output] format`.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Delivery mode the feed was requested with (reported in the summary).
    #[arg(long)]
    mode: Option<FeedMode>,

    /// Print last_seq, pending and the record count to stderr at end of feed.
    #[arg(long, conflicts_with = "no_summary")]
    summary: bool,

    /// Suppress the end-of-feed summary even if enabled in config.
    #[arg(long)]
    no_summary: bool,

    /// Config file to use instead of ~/.config/changescan/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/changescan-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match &cli.config {
        Some(path) => (Config::load_from(path)?, None),
        None => Config::load_or_defaults(),
    };

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/changescan-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
            )
            .init();
        tracing::info!("changescan debug log started — tail -f /tmp/changescan-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
            )
            .init();
    }

    if let Some(e) = config_error {
        tracing::warn!(error = %format!("{e:#}"), "ignoring unreadable config file, using defaults");
    }

    let format = cli.format.unwrap_or(config.output.format);
    let mode = cli.mode.unwrap_or(config.feed.mode);

    let input: Box<dyn BufRead> = match cli.input.as_deref() {
        None => Box::new(io::stdin().lock()),
        Some(path) if path.as_os_str() == "-" => Box::new(io::stdin().lock()),
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = output::scan_to(input, &mut out, format, mode)?;

    let summary = !cli.no_summary && (cli.summary || config.output.summary);
    if summary {
        eprintln!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
