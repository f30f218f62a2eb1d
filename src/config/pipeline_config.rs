//! Pipeline configuration parsing from environment variables.
//!
//! This module handles the statistical convention and execution mode of the
//! indicator pipeline.

use crate::domain::performance::MomentConvention;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Pipeline environment configuration
#[derive(Debug, Clone)]
pub struct PipelineEnvConfig {
    pub moment_convention: MomentConvention,
    pub parallel: bool,
}

impl Default for PipelineEnvConfig {
    fn default() -> Self {
        Self {
            moment_convention: MomentConvention::Population,
            parallel: true,
        }
    }
}

impl PipelineEnvConfig {
    pub fn from_env() -> Result<Self> {
        let convention_str =
            env::var("MOMENT_CONVENTION").unwrap_or_else(|_| "population".to_string());
        let moment_convention = MomentConvention::from_str(&convention_str)?;

        let parallel = env::var("RISK_PARALLEL")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .context("Failed to parse RISK_PARALLEL (expected true/false)")?;

        Ok(Self {
            moment_convention,
            parallel,
        })
    }
}
