// Price and return series
pub mod market;

// Return-distribution statistics
pub mod performance;

// Port interfaces
pub mod ports;

// Risk indicator records
pub mod risk;

// Domain-specific error types
pub mod errors;
