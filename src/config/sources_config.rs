//! Price source configuration parsing from environment variables.

use std::env;
use std::path::PathBuf;

/// Default long-format crypto history file.
pub const DEFAULT_CRYPTO_CSV: &str = "Crypto_historical_data.csv";

/// Price source environment configuration
#[derive(Debug, Clone)]
pub struct SourcesEnvConfig {
    /// Wide matrix of equity closes (`STOCKS_CSV`), disabled when unset.
    pub stocks_csv: Option<PathBuf>,
    /// Long crypto table (`CRYPTO_CSV`); an empty value disables it.
    pub crypto_csv: Option<PathBuf>,
}

impl Default for SourcesEnvConfig {
    fn default() -> Self {
        Self {
            stocks_csv: None,
            crypto_csv: Some(PathBuf::from(DEFAULT_CRYPTO_CSV)),
        }
    }
}

impl SourcesEnvConfig {
    pub fn from_env() -> Self {
        Self {
            stocks_csv: env::var("STOCKS_CSV")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|s| PathBuf::from(s.trim())),
            crypto_csv: match env::var("CRYPTO_CSV") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(PathBuf::from(v.trim())),
                Err(_) => Some(PathBuf::from(DEFAULT_CRYPTO_CSV)),
            },
        }
    }
}
