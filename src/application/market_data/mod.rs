pub mod chart_series;
pub mod normalizer;
pub mod returns;
