// Price and return series
pub mod observation;
pub mod price_matrix;

pub use observation::{PriceObservation, ReturnObservation, TickerKeyed};
pub use price_matrix::WidePriceMatrix;
