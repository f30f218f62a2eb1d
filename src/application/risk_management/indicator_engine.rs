use crate::domain::market::ReturnObservation;
use crate::domain::performance::{MomentConvention, Stats};
use crate::domain::risk::RiskIndicatorRecord;
use tracing::debug;

/// Percentile used for the 95% VaR (left tail).
pub const VAR_95_PERCENTILE: f64 = 0.05;
/// Percentile used for the 90% VaR (left tail).
pub const VAR_90_PERCENTILE: f64 = 0.10;
/// Below this many finite returns the record is all-null.
pub const MIN_RETURNS: usize = 2;

/// Reduces one asset's return series to a `RiskIndicatorRecord`.
///
/// VaR is the raw return percentile; no sign flip is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskIndicatorEngine {
    convention: MomentConvention,
}

impl RiskIndicatorEngine {
    pub fn new(convention: MomentConvention) -> Self {
        Self { convention }
    }

    pub fn evaluate(&self, ticker: &str, returns: &[ReturnObservation]) -> RiskIndicatorRecord {
        let values: Vec<f64> = returns.iter().map(|r| r.value).collect();
        self.evaluate_values(ticker, &values)
    }

    /// Non-finite returns are discarded first; statistical degeneracy after
    /// that (e.g. zero variance) is reported as non-finite values.
    pub fn evaluate_values(&self, ticker: &str, returns: &[f64]) -> RiskIndicatorRecord {
        let finite: Vec<f64> = returns.iter().copied().filter(|v| v.is_finite()).collect();

        if finite.len() < MIN_RETURNS {
            debug!(
                "{}: {} usable returns (of {}), indicators left null",
                ticker,
                finite.len(),
                returns.len()
            );
            return RiskIndicatorRecord::empty(ticker);
        }

        RiskIndicatorRecord::computed(
            ticker,
            Stats::sample_std_dev(&finite),
            Stats::percentile_linear(&finite, VAR_95_PERCENTILE),
            Stats::percentile_linear(&finite, VAR_90_PERCENTILE),
            Stats::skewness(&finite, self.convention),
            Stats::excess_kurtosis(&finite, self.convention),
        )
    }
}
