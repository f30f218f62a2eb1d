// Risk indicator records
pub mod indicators;

pub use indicators::{INDICATOR_COLUMNS, RiskIndicatorRecord, RiskTable};
