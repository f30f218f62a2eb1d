use chrono::NaiveDate;

/// Wide price table: one row per date, one column per ticker.
///
/// `cells[row][col]` is `None` where the source had no price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidePriceMatrix {
    pub dates: Vec<NaiveDate>,
    pub tickers: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl WidePriceMatrix {
    pub fn new(tickers: Vec<String>) -> Self {
        Self {
            dates: Vec::new(),
            tickers,
            cells: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with `None`, long rows truncated.
    pub fn push_row(&mut self, date: NaiveDate, mut row: Vec<Option<f64>>) {
        row.resize(self.tickers.len(), None);
        self.dates.push(date);
        self.cells.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.tickers.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    /// Present price at (row, col), ignoring NaN cells.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .flatten()
            .filter(|v| !v.is_nan())
    }

    /// Column index per ticker that holds at least one price.
    pub fn populated_columns(&self) -> Vec<usize> {
        (0..self.tickers.len())
            .filter(|&col| (0..self.row_count()).any(|row| self.get(row, col).is_some()))
            .collect()
    }
}
