use serde::{Serialize, Serializer};

/// Column header of the indicator table, in output order.
pub const INDICATOR_COLUMNS: [&str; 7] = [
    "ticker",
    "Volatilidad",
    "VaR_95",
    "VaR_90",
    "Skewness",
    "Kurtosis",
    "Beta",
];

/// Risk indicators for a single asset.
///
/// Either all five numeric fields are `Some` or all are `None`; `beta` is
/// always `None`. Non-finite values (e.g. skewness of a flat series) are kept
/// as-is rather than nulled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskIndicatorRecord {
    pub ticker: String,
    #[serde(rename = "Volatilidad", serialize_with = "serialize_indicator")]
    pub volatility: Option<f64>,
    #[serde(rename = "VaR_95", serialize_with = "serialize_indicator")]
    pub var95: Option<f64>,
    #[serde(rename = "VaR_90", serialize_with = "serialize_indicator")]
    pub var90: Option<f64>,
    #[serde(rename = "Skewness", serialize_with = "serialize_indicator")]
    pub skewness: Option<f64>,
    #[serde(rename = "Kurtosis", serialize_with = "serialize_indicator")]
    pub kurtosis: Option<f64>,
    #[serde(rename = "Beta", serialize_with = "serialize_indicator")]
    pub beta: Option<f64>,
}

impl RiskIndicatorRecord {
    /// Record for an asset with too little return history.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            volatility: None,
            var95: None,
            var90: None,
            skewness: None,
            kurtosis: None,
            beta: None,
        }
    }

    pub fn computed(
        ticker: impl Into<String>,
        volatility: f64,
        var95: f64,
        var90: f64,
        skewness: f64,
        kurtosis: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            volatility: Some(volatility),
            var95: Some(var95),
            var90: Some(var90),
            skewness: Some(skewness),
            kurtosis: Some(kurtosis),
            beta: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.volatility.is_none()
    }

    /// Numeric cells in column order (excluding `ticker`).
    pub fn values(&self) -> [Option<f64>; 6] {
        [
            self.volatility,
            self.var95,
            self.var90,
            self.skewness,
            self.kurtosis,
            self.beta,
        ]
    }

    /// Bitwise equality, so NaN cells compare equal to themselves.
    pub fn bit_identical(&self, other: &Self) -> bool {
        self.ticker == other.ticker
            && self
                .values()
                .iter()
                .zip(other.values().iter())
                .all(|(a, b)| a.map(f64::to_bits) == b.map(f64::to_bits))
    }
}

/// Null stays null; finite values are numbers; NaN and infinities become the
/// strings `NaN`, `inf`, `-inf` so JSON output does not collapse them to null.
fn serialize_indicator<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        None => serializer.serialize_none(),
        Some(v) if v.is_finite() => serializer.serialize_f64(*v),
        Some(v) => serializer.serialize_str(&format_non_finite(*v)),
    }
}

fn format_non_finite(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Formats one cell for text output.
pub fn format_cell(value: Option<f64>, precision: usize) -> String {
    match value {
        None => "null".to_string(),
        Some(v) if v.is_finite() => format!("{:.*}", precision, v),
        Some(v) => format_non_finite(v),
    }
}

/// Ordered indicator records for one price source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RiskTable {
    pub records: Vec<RiskIndicatorRecord>,
}

impl RiskTable {
    pub fn new(records: Vec<RiskIndicatorRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskIndicatorRecord> {
        self.records.iter()
    }

    pub fn get(&self, ticker: &str) -> Option<&RiskIndicatorRecord> {
        self.records.iter().find(|r| r.ticker == ticker)
    }

    pub fn tickers(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.ticker.as_str()).collect()
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.records.len().div_ceil(page_size)
    }

    /// Records on a zero-based page; out-of-range pages are empty.
    pub fn page(&self, index: usize, page_size: usize) -> &[RiskIndicatorRecord] {
        let start = index.saturating_mul(page_size).min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());
        &self.records[start..end]
    }

    pub fn bit_identical(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
            && self
                .records
                .iter()
                .zip(other.records.iter())
                .all(|(a, b)| a.bit_identical(b))
    }
}
