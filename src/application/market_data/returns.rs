use crate::domain::errors::SeriesError;
use crate::domain::market::{PriceObservation, ReturnObservation};
use tracing::warn;

/// Derives simple returns from one ticker's chronologically sorted prices.
///
/// Must run per ticker partition: computing across a concatenated series would
/// turn the last price of one asset into the base of the next asset's first return.
pub struct ReturnCalculator;

impl ReturnCalculator {
    /// `return[i] = close[i] / close[i-1] - 1` for i >= 1; the first price yields nothing.
    ///
    /// A zero, negative or non-finite prior price produces a NaN return instead
    /// of failing, so one corrupt asset cannot block the others.
    pub fn compute(prices: &[PriceObservation]) -> Result<Vec<ReturnObservation>, SeriesError> {
        Self::validate(prices)?;

        let returns = prices
            .windows(2)
            .map(|pair| {
                let (prev, curr) = (&pair[0], &pair[1]);
                ReturnObservation::new(
                    curr.ticker.clone(),
                    curr.date,
                    Self::simple_return(prev, curr),
                )
            })
            .collect();
        Ok(returns)
    }

    /// Checks the partition holds one ticker with strictly increasing dates.
    pub fn validate(prices: &[PriceObservation]) -> Result<(), SeriesError> {
        for pair in prices.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            if curr.ticker != prev.ticker {
                return Err(SeriesError::MixedTickers {
                    expected: prev.ticker.clone(),
                    found: curr.ticker.clone(),
                });
            }
            if curr.date <= prev.date {
                return Err(SeriesError::UnsortedDates {
                    ticker: curr.ticker.clone(),
                    previous: prev.date,
                    date: curr.date,
                });
            }
        }
        Ok(())
    }

    fn simple_return(prev: &PriceObservation, curr: &PriceObservation) -> f64 {
        if !prev.close.is_finite() || prev.close <= 0.0 {
            warn!(
                "Invalid prior price for {} on {}: {} (return set to NaN)",
                prev.ticker, prev.date, prev.close
            );
            return f64::NAN;
        }
        curr.close / prev.close - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(ticker: &str, closes: &[f64]) -> Vec<PriceObservation> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                PriceObservation::new(
                    ticker,
                    NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                    c,
                )
            })
            .collect()
    }

    #[test]
    fn test_first_price_has_no_return() {
        let returns = ReturnCalculator::compute(&series("X", &[100.0, 105.0, 102.0])).unwrap();

        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!((returns[0].value - 0.05).abs() < 1e-12);
        assert!((returns[1].value - (102.0 / 105.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_short_series() {
        assert!(ReturnCalculator::compute(&[]).unwrap().is_empty());
        assert!(ReturnCalculator::compute(&series("Y", &[42.0])).unwrap().is_empty());
    }

    #[test]
    fn test_non_positive_prior_price_yields_nan() {
        let returns = ReturnCalculator::compute(&series("Z", &[0.0, 10.0, -5.0, 7.0, 8.0])).unwrap();

        assert!(returns[0].value.is_nan());
        assert!((returns[1].value - (-1.5)).abs() < 1e-12);
        assert!(returns[2].value.is_nan());
        assert!((returns[3].value - (8.0 / 7.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_unsorted_dates_rejected() {
        let mut prices = series("X", &[100.0, 101.0, 102.0]);
        prices.swap(1, 2);

        let err = ReturnCalculator::compute(&prices).unwrap_err();
        assert!(matches!(err, SeriesError::UnsortedDates { ref ticker, .. } if ticker == "X"));
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let mut prices = series("X", &[100.0, 101.0]);
        prices[1].date = prices[0].date;
        assert!(ReturnCalculator::compute(&prices).is_err());
    }

    #[test]
    fn test_mixed_tickers_rejected() {
        let mut prices = series("X", &[100.0, 101.0]);
        prices[1].ticker = "Y".to_string();

        let err = ReturnCalculator::compute(&prices).unwrap_err();
        assert_eq!(
            err,
            SeriesError::MixedTickers {
                expected: "X".to_string(),
                found: "Y".to_string()
            }
        );
    }
}
