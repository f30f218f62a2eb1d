use crate::domain::market::{PriceObservation, WidePriceMatrix};
use tracing::debug;

/// Reshapes a wide price matrix into long (ticker, date, close) rows.
pub struct TimeSeriesNormalizer;

impl TimeSeriesNormalizer {
    /// Melts the matrix into observations ordered by date, then column order.
    ///
    /// Columns without a single price and rows without a single price are
    /// dropped. Missing cells inside kept rows are skipped, never filled.
    pub fn to_long(matrix: &WidePriceMatrix) -> Vec<PriceObservation> {
        if matrix.is_empty() {
            return Vec::new();
        }

        let columns = matrix.populated_columns();
        let mut rows: Vec<usize> = (0..matrix.row_count())
            .filter(|&row| columns.iter().any(|&col| matrix.get(row, col).is_some()))
            .collect();
        rows.sort_by_key(|&row| matrix.dates[row]);

        debug!(
            "Normalizing wide matrix: {}/{} rows, {}/{} columns kept",
            rows.len(),
            matrix.row_count(),
            columns.len(),
            matrix.tickers.len()
        );

        let mut out = Vec::with_capacity(rows.len() * columns.len());
        for &row in &rows {
            for &col in &columns {
                if let Some(close) = matrix.get(row, col) {
                    out.push(PriceObservation::new(
                        matrix.tickers[col].clone(),
                        matrix.dates[row],
                        close,
                    ));
                }
            }
        }
        out
    }
}
