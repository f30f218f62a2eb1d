use crate::application::market_data::chart_series::ChartSeries;
use crate::application::market_data::normalizer::TimeSeriesNormalizer;
use crate::application::risk_management::group_aggregator::GroupAggregator;
use crate::application::risk_management::indicator_engine::RiskIndicatorEngine;
use crate::domain::errors::SeriesError;
use crate::domain::market::PriceObservation;
use crate::domain::performance::MomentConvention;
use crate::domain::ports::{PriceHistory, PriceSource};
use crate::domain::risk::RiskTable;
use anyhow::{Context, Result};
use tracing::info;

/// Indicator table and long-format prices of one source.
///
/// Sources are never merged; the presentation layer shows reports side by side.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub name: String,
    pub prices: Vec<PriceObservation>,
    pub table: RiskTable,
}

impl SourceReport {
    /// Tickers available for selection, in first-seen order.
    pub fn tickers(&self) -> Vec<String> {
        GroupAggregator::tickers(&self.prices)
    }

    /// One preselected ticker, or nothing for an empty source.
    pub fn default_selection(&self) -> Vec<String> {
        self.tickers().into_iter().take(1).collect()
    }

    pub fn chart(&self, selection: &[String]) -> Vec<ChartSeries> {
        ChartSeries::prices(&self.prices, selection)
    }
}

/// Wide or long price history -> per-ticker risk indicators.
#[derive(Debug, Clone, Copy)]
pub struct RiskPipeline {
    aggregator: GroupAggregator,
}

impl Default for RiskPipeline {
    fn default() -> Self {
        Self::new(MomentConvention::default(), true)
    }
}

impl RiskPipeline {
    pub fn new(convention: MomentConvention, parallel: bool) -> Self {
        Self {
            aggregator: GroupAggregator::new(RiskIndicatorEngine::new(convention), parallel),
        }
    }

    /// Long-format prices, normalizing wide input first.
    pub fn long_prices(history: &PriceHistory) -> Vec<PriceObservation> {
        match history {
            PriceHistory::Wide(matrix) => TimeSeriesNormalizer::to_long(matrix),
            PriceHistory::Long(rows) => rows.clone(),
        }
    }

    pub fn run(&self, name: &str, history: &PriceHistory) -> Result<SourceReport, SeriesError> {
        let prices = Self::long_prices(history);
        let table = self.aggregator.aggregate_prices(&prices)?;

        let empty = table.iter().filter(|r| r.is_empty()).count();
        info!(
            "{}: {} price rows -> {} indicator records ({} without enough history)",
            name,
            prices.len(),
            table.len(),
            empty
        );

        Ok(SourceReport {
            name: name.to_string(),
            prices,
            table,
        })
    }

    /// Return series of the selected tickers, recomputed from the report's prices.
    pub fn return_chart(
        &self,
        report: &SourceReport,
        selection: &[String],
    ) -> Result<Vec<ChartSeries>, SeriesError> {
        let returns: Vec<_> = self
            .aggregator
            .returns_by_ticker(&report.prices)?
            .into_iter()
            .flat_map(|(_, rows)| rows)
            .collect();
        Ok(ChartSeries::returns(&returns, selection))
    }

    /// Loads a source and runs it.
    pub fn run_source(&self, source: &dyn PriceSource) -> Result<SourceReport> {
        let history = source
            .load()
            .with_context(|| format!("Failed to load price source '{}'", source.name()))?;
        self.run(source.name(), &history)
            .with_context(|| format!("Invalid price series in '{}'", source.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::LoadError;
    use crate::domain::market::WidePriceMatrix;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    struct StaticSource(PriceHistory);

    impl PriceSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn load(&self) -> Result<PriceHistory, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct MissingSource;

    impl PriceSource for MissingSource {
        fn name(&self) -> &str {
            "missing"
        }

        fn load(&self) -> Result<PriceHistory, LoadError> {
            Err(LoadError::MissingColumn {
                column: "Close".to_string(),
            })
        }
    }

    #[test]
    fn test_wide_and_long_shapes_agree() {
        let mut matrix = WidePriceMatrix::new(vec!["PG".to_string(), "KO".to_string()]);
        matrix.push_row(day(1), vec![Some(100.0), Some(50.0)]);
        matrix.push_row(day(2), vec![Some(102.0), Some(49.0)]);
        matrix.push_row(day(3), vec![Some(101.0), Some(51.0)]);
        let long = TimeSeriesNormalizer::to_long(&matrix);

        let pipeline = RiskPipeline::default();
        let wide_report = pipeline.run("wide", &PriceHistory::Wide(matrix)).unwrap();
        let long_report = pipeline.run("long", &PriceHistory::Long(long)).unwrap();

        assert!(wide_report.table.bit_identical(&long_report.table));
        assert_eq!(wide_report.tickers(), vec!["PG", "KO"]);
    }

    #[test]
    fn test_default_selection_and_chart() {
        let history = PriceHistory::Long(vec![
            PriceObservation::new("BTC-USD", day(1), 60000.0),
            PriceObservation::new("ETH-USD", day(1), 3000.0),
        ]);
        let report = RiskPipeline::default().run("crypto", &history).unwrap();

        assert_eq!(report.default_selection(), vec!["BTC-USD"]);
        let chart = report.chart(&report.default_selection());
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].points, vec![(day(1), 60000.0)]);
    }

    #[test]
    fn test_return_chart() {
        let history = PriceHistory::Long(vec![
            PriceObservation::new("BTC-USD", day(1), 100.0),
            PriceObservation::new("ETH-USD", day(1), 10.0),
            PriceObservation::new("BTC-USD", day(2), 110.0),
            PriceObservation::new("ETH-USD", day(2), 9.0),
            PriceObservation::new("BTC-USD", day(3), 99.0),
        ]);
        let pipeline = RiskPipeline::default();
        let report = pipeline.run("crypto", &history).unwrap();

        let chart = pipeline.return_chart(&report, &["BTC-USD".to_string()]).unwrap();
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].ticker, "BTC-USD");
        assert_eq!(chart[0].points.len(), 2);
        assert_eq!(chart[0].points[0].0, day(2));
        assert!((chart[0].points[0].1 - 0.1).abs() < 1e-12);
        assert!((chart[0].points[1].1 - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_run_source() {
        let pipeline = RiskPipeline::new(MomentConvention::SampleAdjusted, false);
        let source = StaticSource(PriceHistory::Long(vec![PriceObservation::new("Y", day(1), 10.0)]));

        let report = pipeline.run_source(&source).unwrap();
        assert_eq!(report.name, "static");
        assert!(report.table.records[0].is_empty());

        let err = pipeline.run_source(&MissingSource).unwrap_err();
        assert!(format!("{:#}", err).contains("missing"));
    }
}
