pub mod card;
pub mod indicator_grid;
pub mod price_chart;
pub mod ticker_picker;
