// Return-distribution statistics
pub mod stats;

pub use stats::{MomentConvention, Stats};
