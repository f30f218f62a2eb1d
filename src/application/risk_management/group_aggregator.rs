use crate::application::market_data::returns::ReturnCalculator;
use crate::application::risk_management::indicator_engine::RiskIndicatorEngine;
use crate::domain::errors::SeriesError;
use crate::domain::market::{PriceObservation, ReturnObservation, TickerKeyed};
use crate::domain::risk::{RiskIndicatorRecord, RiskTable};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Rows of one ticker, in input order.
pub type Partition<T> = (String, Vec<T>);

/// Splits a long series by ticker and reduces each partition independently.
///
/// Output holds exactly one record per distinct input ticker, in the order
/// tickers first appear. With `parallel` set, partitions run on the Rayon
/// pool; the indexed collect keeps first-seen order.
#[derive(Debug, Clone, Copy)]
pub struct GroupAggregator {
    engine: RiskIndicatorEngine,
    parallel: bool,
}

impl GroupAggregator {
    pub fn new(engine: RiskIndicatorEngine, parallel: bool) -> Self {
        Self { engine, parallel }
    }

    /// Groups rows by ticker, preserving first-appearance order of tickers and
    /// input order within each group.
    pub fn partition<T: TickerKeyed + Clone>(rows: &[T]) -> Vec<Partition<T>> {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut partitions: Vec<Partition<T>> = Vec::new();

        for row in rows {
            let slot = *slots.entry(row.ticker()).or_insert_with(|| {
                partitions.push((row.ticker().to_string(), Vec::new()));
                partitions.len() - 1
            });
            partitions[slot].1.push(row.clone());
        }
        partitions
    }

    /// Distinct tickers in first-seen order.
    pub fn tickers<T: TickerKeyed>(rows: &[T]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        rows.iter()
            .filter(|row| seen.insert(row.ticker()))
            .map(|row| row.ticker().to_string())
            .collect()
    }

    /// Per-ticker returns, computed after partitioning.
    pub fn returns_by_ticker(
        &self,
        prices: &[PriceObservation],
    ) -> Result<Vec<Partition<ReturnObservation>>, SeriesError> {
        let partitions = Self::partition(prices);
        self.map_partitions(
            &partitions,
            |(ticker, rows)| -> Result<Partition<ReturnObservation>, SeriesError> {
                Ok((ticker.clone(), ReturnCalculator::compute(rows)?))
            },
        )
        .into_iter()
        .collect()
    }

    /// Prices -> per-ticker returns -> indicator records.
    ///
    /// Fails only when a partition breaks the sorted-dates contract.
    pub fn aggregate_prices(&self, prices: &[PriceObservation]) -> Result<RiskTable, SeriesError> {
        let partitions = Self::partition(prices);
        debug!(
            "Aggregating {} price rows over {} tickers",
            prices.len(),
            partitions.len()
        );

        let records = self
            .map_partitions(
                &partitions,
                |(ticker, rows)| -> Result<RiskIndicatorRecord, SeriesError> {
                    let returns = ReturnCalculator::compute(rows)?;
                    Ok(self.engine.evaluate(ticker, &returns))
                },
            )
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RiskTable::new(records))
    }

    /// Returns already computed per ticker -> indicator records.
    pub fn aggregate_returns(&self, returns: &[ReturnObservation]) -> RiskTable {
        let partitions = Self::partition(returns);
        let records =
            self.map_partitions(&partitions, |(ticker, rows)| self.engine.evaluate(ticker, rows));
        RiskTable::new(records)
    }

    fn map_partitions<T, R, F>(&self, partitions: &[Partition<T>], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&Partition<T>) -> R + Sync + Send,
    {
        if self.parallel {
            partitions.par_iter().map(f).collect()
        } else {
            partitions.iter().map(f).collect()
        }
    }
}
