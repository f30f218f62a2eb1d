use crate::domain::errors::LoadError;
use crate::domain::market::{PriceObservation, WidePriceMatrix};

/// Price history as delivered by a source, in whichever shape it arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceHistory {
    /// One column per ticker on a shared date index.
    Wide(WidePriceMatrix),
    /// (ticker, date, close) rows, interleaved across tickers.
    Long(Vec<PriceObservation>),
}

/// Anything that can hand the pipeline a historical price window.
pub trait PriceSource: Send + Sync {
    /// Short label used in logs and report headings.
    fn name(&self) -> &str;

    fn load(&self) -> Result<PriceHistory, LoadError>;
}
