//! CSV price sources.
//!
//! - Long layout: `Date,ticker,Close` rows (extra columns ignored), tickers interleaved.
//! - Wide layout: a `Date` column followed by one close-price column per ticker.

use crate::domain::errors::LoadError;
use crate::domain::market::{PriceObservation, WidePriceMatrix};
use crate::domain::ports::{PriceHistory, PriceSource};
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DATE_COLUMN: &str = "date";
const TICKER_COLUMN: &str = "ticker";
const CLOSE_COLUMN: &str = "close";

/// Long-format CSV file (one row per ticker and date).
#[derive(Debug, Clone)]
pub struct LongCsvSource {
    name: String,
    path: PathBuf,
}

impl LongCsvSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl PriceSource for LongCsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<PriceHistory, LoadError> {
        let rows = read_long(open(&self.path)?)?;
        info!("Loaded {} long-format rows from {:?}", rows.len(), self.path);
        Ok(PriceHistory::Long(rows))
    }
}

/// Wide-format CSV file (one column per ticker).
#[derive(Debug, Clone)]
pub struct WideCsvSource {
    name: String,
    path: PathBuf,
}

impl WideCsvSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl PriceSource for WideCsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<PriceHistory, LoadError> {
        let matrix = read_wide(open(&self.path)?)?;
        info!(
            "Loaded {} dates x {} tickers from {:?}",
            matrix.row_count(),
            matrix.tickers.len(),
            self.path
        );
        Ok(PriceHistory::Wide(matrix))
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Parses long-format rows. Rows with an empty close are skipped.
pub fn read_long<R: Read>(reader: R) -> Result<Vec<PriceObservation>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let ticker_idx = column_index(&headers, TICKER_COLUMN)?;
    let close_idx = column_index(&headers, CLOSE_COLUMN)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result?;
        let line = line_of(&record);
        let ticker = record.get(ticker_idx).unwrap_or_default();
        let date = parse_date(record.get(date_idx).unwrap_or_default(), line)?;

        match parse_price(record.get(close_idx).unwrap_or_default(), ticker, line)? {
            Some(close) => rows.push(PriceObservation::new(ticker, date, close)),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} rows without a close price", skipped);
    }
    Ok(rows)
}

/// Parses a wide matrix: the first column is the date, the rest are tickers.
pub fn read_wide<R: Read>(reader: R) -> Result<WidePriceMatrix, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers
        .get(0)
        .is_none_or(|h| !h.eq_ignore_ascii_case(DATE_COLUMN))
    {
        return Err(LoadError::MissingColumn {
            column: "Date".to_string(),
        });
    }

    let tickers: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    let mut matrix = WidePriceMatrix::new(tickers);

    for result in rdr.records() {
        let record = result?;
        let line = line_of(&record);
        let date = parse_date(record.get(0).unwrap_or_default(), line)?;

        let mut row = Vec::with_capacity(matrix.tickers.len());
        for (col, ticker) in matrix.tickers.iter().enumerate() {
            row.push(parse_price(record.get(col + 1).unwrap_or_default(), ticker, line)?);
        }
        matrix.push_row(date, row);
    }
    Ok(matrix)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| LoadError::MissingColumn {
            column: name.to_string(),
        })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// Accepts `YYYY-MM-DD`, timestamps starting with it, and `MM/DD/YYYY`.
fn parse_date(value: &str, line: u64) -> Result<NaiveDate, LoadError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| {
            let prefix = value.get(..10).unwrap_or(value);
            NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        })
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| LoadError::InvalidDate {
            value: value.to_string(),
            line,
        })
}

/// Gap markers read as "no price", matched case-insensitively.
const MISSING_TOKENS: [&str; 6] = ["nan", "-nan", "na", "n/a", "#n/a", "null"];

/// Empty cells, gap markers and NaN mean no price; anything else must parse as a float.
fn parse_price(value: &str, ticker: &str, line: u64) -> Result<Option<f64>, LoadError> {
    if value.is_empty() || MISSING_TOKENS.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(price) if price.is_nan() => Ok(None),
        Ok(price) => Ok(Some(price)),
        Err(_) => Err(LoadError::InvalidPrice {
            ticker: ticker.to_string(),
            value: value.to_string(),
            line,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    #[test]
    fn test_read_long_interleaved() {
        let data = "\
Date,Open,Close,ticker
2023-01-01,1,16625.08,BTC-USD
2023-01-01,1,1200.96,ETH-USD
2023-01-02,1,16688.47,BTC-USD
2023-01-02,1,,ETH-USD
";
        let rows = read_long(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], PriceObservation::new("ETH-USD", day(1, 1), 1200.96));
        assert_eq!(rows[2].ticker, "BTC-USD");
        assert_eq!(rows[2].date, day(1, 2));
    }

    #[test]
    fn test_read_long_accepts_timestamps_and_case() {
        let data = "date,TICKER,close\n2023-03-05 00:00:00+00:00,SOL-USD,21.5\n";
        let rows = read_long(data.as_bytes()).unwrap();
        assert_eq!(rows, vec![PriceObservation::new("SOL-USD", day(3, 5), 21.5)]);
    }

    #[test]
    fn test_read_long_missing_column() {
        let data = "Date,Symbol,Close\n2023-01-01,BTC-USD,1.0\n";
        let err = read_long(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "ticker"));
    }

    #[test]
    fn test_read_long_bad_date_reports_line() {
        let data = "Date,ticker,Close\n2023-01-01,BTC-USD,1.0\nyesterday,BTC-USD,2.0\n";
        let err = read_long(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { line: 3, .. }));
    }

    #[test]
    fn test_read_long_bad_price() {
        let data = "Date,ticker,Close\n2023-01-01,BTC-USD,abc\n";
        let err = read_long(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPrice { ref ticker, .. } if ticker == "BTC-USD"));
    }

    #[test]
    fn test_read_long_gap_markers_match_empty_cells() {
        let empty = "Date,ticker,Close\n2023-01-01,X,100\n2023-01-02,X,\n2023-01-03,X,110\n";
        let expected = read_long(empty.as_bytes()).unwrap();
        assert_eq!(expected.len(), 2);

        for token in ["NaN", "nan", "NA", "null", "N/A"] {
            let data = empty.replace("2023-01-02,X,", &format!("2023-01-02,X,{}", token));
            assert_eq!(read_long(data.as_bytes()).unwrap(), expected, "token {}", token);
        }
    }

    #[test]
    fn test_read_long_us_dates() {
        let data = "Date,ticker,Close\n01/31/2023,BTC-USD,23125.1\n";
        let rows = read_long(data.as_bytes()).unwrap();
        assert_eq!(rows, vec![PriceObservation::new("BTC-USD", day(1, 31), 23125.1)]);
    }

    #[test]
    fn test_read_wide_with_gaps() {
        let data = "\
Date,CAT,HON,MMM
2023-01-03,240.1,NaN,
2023-01-04,241.0,210.5,nan
";
        let matrix = read_wide(data.as_bytes()).unwrap();

        assert_eq!(matrix.tickers, vec!["CAT", "HON", "MMM"]);
        assert_eq!(matrix.dates, vec![day(1, 3), day(1, 4)]);
        assert_eq!(matrix.cells[0], vec![Some(240.1), None, None]);
        assert_eq!(matrix.populated_columns(), vec![0, 1]);
    }

    #[test]
    fn test_read_wide_requires_date_column() {
        let data = "Ticker,CAT\n2023-01-03,240.1\n";
        assert!(matches!(
            read_wide(data.as_bytes()),
            Err(LoadError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let source = LongCsvSource::new("crypto", "/nonexistent/prices.csv");
        assert!(matches!(source.load(), Err(LoadError::Open { .. })));
    }
}
