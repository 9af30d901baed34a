use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use vertaaldb_acquire::ChromiumFetcher;
use vertaaldb_model::{FilterConfig, OptionValues};

#[derive(Parser)]
#[command(name = "vertaaldb")]
#[command(about = "Scrape the letterenfonds.nl translation database into delimited text")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Translation language (must be in the approved-values list)
    #[arg(short, long, default_value = "Duits")]
    language: String,

    /// Translation genre (must be in the approved-values list)
    #[arg(short, long, default_value = "Fiction")]
    genre: String,

    /// Publication status filter
    #[arg(short, long, default_value = "Published")]
    publication_status: String,

    /// Minimum translation year (inclusive)
    #[arg(long, default_value_t = 1800)]
    year_min: i32,

    /// Maximum translation year (inclusive)
    #[arg(long, default_value_t = 2026)]
    year_max: i32,

    /// Number of result pages to scrape
    #[arg(short = 'n', long, default_value_t = 1)]
    pages: u32,

    /// Seconds to wait for a page's result list to render
    #[arg(short, long, default_value_t = 5)]
    timeout: u64,

    /// Path to the approved-values JSON (language and genre lists)
    #[arg(long, default_value = "option_values.json")]
    options: PathBuf,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    // Approved values load before anything touches the network.
    let options_text = std::fs::read_to_string(&cli.options).with_context(|| {
        format!(
            "Failed to read approved values from {}",
            cli.options.display()
        )
    })?;
    let option_values =
        OptionValues::from_json(&options_text).context("Approved-values file is not valid JSON")?;

    let config = FilterConfig::new(
        cli.language,
        cli.genre,
        cli.publication_status,
        cli.year_min,
        cli.year_max,
    )?;
    option_values.validate(&config)?;

    tracing::info!(
        language = %config.language,
        genre = %config.genre,
        status = %config.publication_status,
        years = %config.year_range(),
        pages = cli.pages,
        "Scraping translation database"
    );

    let summary = vertaaldb_acquire::run(
        &ChromiumFetcher,
        &config,
        cli.pages,
        cli.timeout,
        &cli.output,
    )
    .await
    .context("Scrape run failed")?;

    if summary.truncated {
        tracing::warn!(
            pages = summary.pages_fetched,
            records = summary.records_written,
            path = %cli.output.display(),
            "Run stopped early, wrote the records accumulated so far"
        );
    } else {
        tracing::info!(
            pages = summary.pages_fetched,
            records = summary.records_written,
            path = %cli.output.display(),
            "Scrape complete"
        );
    }

    Ok(())
}

fn init_tracing(cli: &Cli) {
    // Map log level, suppressing noisy HTML-parsing and browser crates at
    // debug/trace.
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,chromiumoxide=info",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,chromiumoxide=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-08-07 19:44:09.123 +02:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(
                time_format.to_string(),
            ))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                time_format.to_string(),
            ))
            .init();
    }
}
