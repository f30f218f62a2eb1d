use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Contract violations detected at a partition boundary, before reduction.
///
/// Statistical degeneracy (too few returns, zero variance) is never reported
/// here; it flows through the indicator record instead.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Unsorted series for {ticker}: {date} does not follow {previous}")]
    UnsortedDates {
        ticker: String,
        previous: NaiveDate,
        date: NaiveDate,
    },

    #[error("Mixed tickers in one partition: expected {expected}, found {found}")]
    MixedTickers { expected: String, found: String },
}

/// Errors raised while loading price sources from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in header")]
    MissingColumn { column: String },

    #[error("Invalid date '{value}' on line {line}")]
    InvalidDate { value: String, line: u64 },

    #[error("Invalid price '{value}' for {ticker} on line {line}")]
    InvalidPrice {
        ticker: String,
        value: String,
        line: u64,
    },
}
