//! Riskboard dashboard - interactive view of the risk indicators
//!
//! Computes every configured source once at startup, then shows the closing
//! price chart and the indicator grid of each source side by side.
//!
//! # Usage
//! ```sh
//! STOCKS_CSV=stocks.csv cargo run --bin dashboard
//! ```
//!
//! Reads the same environment variables as the `riskboard` report.

use anyhow::Result;
use riskboard::config::Config;
use riskboard::interfaces::dashboard::{DASHBOARD_TITLE, RiskDashboard};
use riskboard::interfaces::design_system::DesignSystem;
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Riskboard Dashboard {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Stocks={:?}, Crypto={:?}, Convention={:?}",
        config.stocks_csv, config.crypto_csv, config.moment_convention
    );

    let pipeline = config.pipeline();
    let mut reports = Vec::new();
    for source in config.sources() {
        match pipeline.run_source(&*source) {
            Ok(report) => reports.push(report),
            Err(e) => error!("{:#}", e),
        }
    }

    let app = RiskDashboard::new(reports);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(DASHBOARD_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Riskboard",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
