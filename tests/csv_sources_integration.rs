use riskboard::application::risk_management::pipeline::RiskPipeline;
use riskboard::config::{Config, ReportFormat};
use riskboard::domain::ports::PriceSource;
use riskboard::infrastructure::csv_source::{LongCsvSource, WideCsvSource};
use riskboard::infrastructure::report_writer::write_indicators;
use std::fs;
use std::path::PathBuf;

const STOCKS: &str = "\
Date,PG,KO,MSFT
2024-01-02,150.0,60.0,370.0
2024-01-03,151.0,,372.5
2024-01-04,149.5,60.6,
2024-01-05,152.0,61.2,375.0
";

const CRYPTO: &str = "\
Date,ticker,Close
2024-01-01,BTC-USD,42000.0
2024-01-01,ETH-USD,2300.0
2024-01-02,BTC-USD,43100.0
2024-01-02,ETH-USD,2350.0
2024-01-03,BTC-USD,42800.0
2024-01-03,ETH-USD,
2024-01-04,BTC-USD,44000.0
";

fn fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("riskboard_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_wide_file_end_to_end() {
    let path = fixture("stocks.csv", STOCKS);
    let source = WideCsvSource::new("Acciones", &path);
    let report = RiskPipeline::default().run_source(&source).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(report.name, "Acciones");
    assert_eq!(report.table.tickers(), vec!["PG", "KO", "MSFT"]);
    assert!(report.table.iter().all(|r| !r.is_empty()));
    assert!(report.table.iter().all(|r| r.beta.is_none()));
}

#[test]
fn test_long_file_end_to_end() {
    let path = fixture("crypto.csv", CRYPTO);
    let source = LongCsvSource::new("Criptomonedas", &path);
    let report = RiskPipeline::default().run_source(&source).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(report.table.tickers(), vec!["BTC-USD", "ETH-USD"]);
    // ETH keeps two closes -> a single return -> no indicators.
    assert!(report.table.get("ETH-USD").unwrap().is_empty());
    assert!(!report.table.get("BTC-USD").unwrap().is_empty());

    let chart = report.chart(&report.default_selection());
    assert_eq!(chart.len(), 1);
    assert_eq!(chart[0].ticker, "BTC-USD");
    assert_eq!(chart[0].points.len(), 4);
}

#[test]
fn test_missing_file_reports_source_name() {
    let source = LongCsvSource::new("Criptomonedas", "/nonexistent/riskboard/prices.csv");
    let err = RiskPipeline::default().run_source(&source).unwrap_err();
    assert!(format!("{:#}", err).contains("Criptomonedas"));
}

#[test]
fn test_sources_run_independently() {
    let stocks = fixture("indep_stocks.csv", STOCKS);
    let config = Config {
        stocks_csv: Some(stocks.clone()),
        crypto_csv: Some(PathBuf::from("/nonexistent/riskboard/crypto.csv")),
        ..Config::default()
    };

    let pipeline = config.pipeline();
    let results: Vec<_> = config
        .sources()
        .iter()
        .map(|s| (s.name().to_string(), pipeline.run_source(&**s)))
        .collect();
    fs::remove_file(&stocks).ok();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, "Acciones");
    assert!(results[0].1.is_ok());
    assert_eq!(results[1].0, "Criptomonedas");
    assert!(results[1].1.is_err());
}

#[test]
fn test_csv_report_has_fixed_columns() {
    let path = fixture("report_crypto.csv", CRYPTO);
    let report = RiskPipeline::default()
        .run_source(&LongCsvSource::new("Criptomonedas", &path))
        .unwrap();
    fs::remove_file(&path).ok();

    let mut out = Vec::new();
    write_indicators(&mut out, &report, ReportFormat::Csv).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("ticker,Volatilidad,VaR_95,VaR_90,Skewness,Kurtosis,Beta")
    );
    assert!(lines.next().unwrap().starts_with("BTC-USD,"));
    assert_eq!(lines.next(), Some("ETH-USD,,,,,,"));
}

#[test]
fn test_gap_spelling_does_not_change_indicators() {
    use riskboard::domain::ports::PriceHistory;
    use riskboard::infrastructure::csv_source::{read_long, read_wide};

    let long_empty = "Date,ticker,Close\n2024-01-01,X,100\n2024-01-02,X,\n2024-01-03,X,110\n2024-01-04,X,121\n";
    let long_nan = long_empty.replace("2024-01-02,X,\n", "2024-01-02,X,NaN\n");
    let wide_nan = "Date,X\n2024-01-01,100\n2024-01-02,NaN\n2024-01-03,110\n2024-01-04,121\n";

    let pipeline = RiskPipeline::default();
    let run = |history: PriceHistory| pipeline.run("X", &history).unwrap().table;

    let from_empty = run(PriceHistory::Long(read_long(long_empty.as_bytes()).unwrap()));
    let from_nan = run(PriceHistory::Long(read_long(long_nan.as_bytes()).unwrap()));
    let from_wide = run(PriceHistory::Wide(read_wide(wide_nan.as_bytes()).unwrap()));

    let record = from_empty.get("X").unwrap();
    assert!(!record.is_empty());
    assert!(from_empty.bit_identical(&from_nan));
    assert!(from_empty.bit_identical(&from_wide));
}
