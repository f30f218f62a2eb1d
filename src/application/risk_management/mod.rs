pub mod group_aggregator;
pub mod indicator_engine;
pub mod pipeline;
