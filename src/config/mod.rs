//! Configuration module for Riskboard.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: price Sources and Pipeline.

mod pipeline_config;
mod sources_config;

pub use pipeline_config::PipelineEnvConfig;
pub use sources_config::{DEFAULT_CRYPTO_CSV, SourcesEnvConfig};

pub use crate::domain::performance::MomentConvention;
pub use crate::infrastructure::report_writer::ReportFormat;

use crate::application::risk_management::pipeline::RiskPipeline;
use crate::domain::ports::PriceSource;
use crate::infrastructure::csv_source::{LongCsvSource, WideCsvSource};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Report label of the wide equity source.
pub const STOCKS_SOURCE_NAME: &str = "Acciones";
/// Report label of the long crypto source.
pub const CRYPTO_SOURCE_NAME: &str = "Criptomonedas";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Sources (from SourcesEnvConfig)
    pub stocks_csv: Option<PathBuf>,
    pub crypto_csv: Option<PathBuf>,

    // Pipeline (from PipelineEnvConfig)
    pub moment_convention: MomentConvention,
    pub parallel: bool,

    // Output
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        let sources = SourcesEnvConfig::default();
        let pipeline = PipelineEnvConfig::default();
        Self {
            stocks_csv: sources.stocks_csv,
            crypto_csv: sources.crypto_csv,
            moment_convention: pipeline.moment_convention,
            parallel: pipeline.parallel,
            report_format: ReportFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let sources = SourcesEnvConfig::from_env();
        let pipeline = PipelineEnvConfig::from_env().context("Failed to load pipeline config")?;

        let format_str = env::var("REPORT_FORMAT").unwrap_or_else(|_| "table".to_string());
        let report_format = ReportFormat::from_str(&format_str)?;

        Ok(Self {
            stocks_csv: sources.stocks_csv,
            crypto_csv: sources.crypto_csv,
            moment_convention: pipeline.moment_convention,
            parallel: pipeline.parallel,
            report_format,
        })
    }

    pub fn pipeline(&self) -> RiskPipeline {
        RiskPipeline::new(self.moment_convention, self.parallel)
    }

    /// Configured sources: the wide equity matrix first, then the crypto table.
    pub fn sources(&self) -> Vec<Box<dyn PriceSource>> {
        let mut sources: Vec<Box<dyn PriceSource>> = Vec::new();
        if let Some(path) = &self.stocks_csv {
            sources.push(Box::new(WideCsvSource::new(STOCKS_SOURCE_NAME, path)));
        }
        if let Some(path) = &self.crypto_csv {
            sources.push(Box::new(LongCsvSource::new(CRYPTO_SOURCE_NAME, path)));
        }
        sources
    }
}
