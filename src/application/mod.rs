pub mod market_data;
pub mod risk_management;
