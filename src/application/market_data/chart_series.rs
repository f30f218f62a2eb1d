use crate::application::risk_management::group_aggregator::GroupAggregator;
use crate::domain::market::{PriceObservation, ReturnObservation};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Date-keyed values of one ticker, ready for a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub ticker: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl ChartSeries {
    /// Closing-price series for the selected tickers.
    ///
    /// Series follow the tickers' first-seen order in `prices`; selected tickers
    /// absent from the data are ignored. The selection comes from the caller.
    pub fn prices(prices: &[PriceObservation], selection: &[String]) -> Vec<ChartSeries> {
        GroupAggregator::partition(prices)
            .into_iter()
            .filter(|(ticker, _)| selection.contains(ticker))
            .map(|(ticker, rows)| ChartSeries {
                ticker,
                points: rows.into_iter().map(|o| (o.date, o.close)).collect(),
            })
            .collect()
    }

    /// Return series for the selected tickers, same ordering rules as `prices`.
    pub fn returns(returns: &[ReturnObservation], selection: &[String]) -> Vec<ChartSeries> {
        GroupAggregator::partition(returns)
            .into_iter()
            .filter(|(ticker, _)| selection.contains(ticker))
            .map(|(ticker, rows)| ChartSeries {
                ticker,
                points: rows.into_iter().map(|o| (o.date, o.value)).collect(),
            })
            .collect()
    }

    /// `[x, y]` pairs with x as days since 1970-01-01.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|(date, value)| [day_number(*date), *value])
            .collect()
    }
}

/// `num_days_from_ce` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Days since the Unix epoch, used as the chart x axis.
pub fn day_number(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - EPOCH_DAYS_FROM_CE) as f64
}

/// Inverse of `day_number`, for axis labels.
pub fn date_from_day_number(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32 + EPOCH_DAYS_FROM_CE)
}
