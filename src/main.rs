//! Riskboard report - headless risk indicator tables
//!
//! Loads the configured price sources, computes per-asset risk indicators and
//! prints one table per source. Logs go to stderr so stdout stays parseable.
//!
//! # Usage
//! ```sh
//! STOCKS_CSV=stocks.csv cargo run --bin riskboard -- --format csv --tickers PG,KO
//! ```
//!
//! # Environment Variables
//! - `STOCKS_CSV` - Wide close-price matrix (default: disabled)
//! - `CRYPTO_CSV` - Long `Date,ticker,Close` table (default: Crypto_historical_data.csv)
//! - `MOMENT_CONVENTION` - `population` or `sample` (default: population)
//! - `RISK_PARALLEL` - Process tickers on the Rayon pool (default: true)
//! - `REPORT_FORMAT` - `table`, `csv` or `json` (default: table)

use anyhow::Result;
use clap::Parser;
use riskboard::config::{Config, MomentConvention, ReportFormat};
use riskboard::infrastructure::report_writer::{write_chart, write_indicators};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Risk indicators per asset from historical prices", long_about = None)]
struct Cli {
    /// Wide CSV: Date column plus one close column per ticker
    #[arg(long)]
    stocks: Option<PathBuf>,

    /// Long CSV with Date, ticker and Close columns
    #[arg(long)]
    crypto: Option<PathBuf>,

    /// Output format: table, csv or json
    #[arg(long)]
    format: Option<String>,

    /// Skewness/kurtosis convention: population or sample
    #[arg(long)]
    convention: Option<String>,

    /// Process tickers one at a time
    #[arg(long)]
    sequential: bool,

    /// Also print chart series for these tickers (comma-separated)
    #[arg(long, value_delimiter = ',')]
    tickers: Vec<String>,

    /// Chart returns instead of closing prices
    #[arg(long)]
    returns: bool,
}

fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.stocks {
        config.stocks_csv = Some(path.clone());
    }
    if let Some(path) = &cli.crypto {
        config.crypto_csv = Some(path.clone());
    }
    if let Some(format) = &cli.format {
        config.report_format = ReportFormat::from_str(format)?;
    }
    if let Some(convention) = &cli.convention {
        config.moment_convention = MomentConvention::from_str(convention)?;
    }
    if cli.sequential {
        config.parallel = false;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stderr, stdout carries the report)
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    apply_overrides(&mut config, &cli)?;
    info!(
        "Configuration loaded: Stocks={:?}, Crypto={:?}, Convention={:?}, Parallel={}",
        config.stocks_csv, config.crypto_csv, config.moment_convention, config.parallel
    );

    let sources = config.sources();
    if sources.is_empty() {
        anyhow::bail!("No price sources configured (set STOCKS_CSV or CRYPTO_CSV)");
    }

    let pipeline = config.pipeline();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for source in &sources {
        let report = match pipeline.run_source(&**source) {
            Ok(report) => report,
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
                continue;
            }
        };

        write_indicators(&mut out, &report, config.report_format)?;

        if !cli.tickers.is_empty() {
            let series = if cli.returns {
                pipeline.return_chart(&report, &cli.tickers)?
            } else {
                report.chart(&cli.tickers)
            };
            write_chart(&mut out, &series, config.report_format)?;
        }
    }
    out.flush()?;

    if failures == sources.len() {
        anyhow::bail!("All {} price sources failed to load", failures);
    }
    Ok(())
}
