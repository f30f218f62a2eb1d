use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One closing price for one asset on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub ticker: String,
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceObservation {
    pub fn new(ticker: impl Into<String>, date: NaiveDate, close: f64) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            close,
        }
    }
}

/// Simple return `close[t] / close[t-1] - 1` observed on `date`.
///
/// The first price of a series has no return and is never represented here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnObservation {
    pub ticker: String,
    pub date: NaiveDate,
    #[serde(rename = "return")]
    pub value: f64,
}

impl ReturnObservation {
    pub fn new(ticker: impl Into<String>, date: NaiveDate, value: f64) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            value,
        }
    }
}

/// Rows that belong to exactly one asset.
pub trait TickerKeyed {
    fn ticker(&self) -> &str;
}

impl TickerKeyed for PriceObservation {
    fn ticker(&self) -> &str {
        &self.ticker
    }
}

impl TickerKeyed for ReturnObservation {
    fn ticker(&self) -> &str {
        &self.ticker
    }
}
