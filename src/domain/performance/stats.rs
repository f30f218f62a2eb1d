use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution};
use std::str::FromStr;

/// Bias convention for the third and fourth standardized moments.
///
/// Statistical packages disagree on the default, so it is pinned explicitly:
/// - `Population`: g1 = m3 / m2^1.5, g2 = m4 / m2^2 - 3, with m_k = sum((x - mean)^k) / n.
/// - `SampleAdjusted`: adjusted Fisher-Pearson G1 = g1 * sqrt(n(n-1)) / (n-2) and
///   G2 = ((n+1) g2 + 6) (n-1) / ((n-2)(n-3)). NaN below 3 (skew) or 4 (kurtosis) points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentConvention {
    #[default]
    Population,
    SampleAdjusted,
}

impl FromStr for MomentConvention {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "population" => Ok(MomentConvention::Population),
            "sample" | "sample_adjusted" => Ok(MomentConvention::SampleAdjusted),
            _ => anyhow::bail!(
                "Invalid MOMENT_CONVENTION: {}. Must be 'population' or 'sample'",
                s
            ),
        }
    }
}

/// Shared statistics utilities for return distributions.
pub struct Stats;

impl Stats {
    /// Sample standard deviation (n-1 divisor). NaN below two points.
    pub fn sample_std_dev(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return f64::NAN;
        }
        Data::new(values.to_vec()).std_dev().unwrap_or(f64::NAN)
    }

    /// Percentile `p` in [0, 1] with linear interpolation between order statistics.
    ///
    /// rank = p * (n - 1); the result interpolates between the two sorted values
    /// bracketing that rank. Empty input yields NaN.
    pub fn percentile_linear(values: &[f64], p: f64) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let frac = rank - lower as f64;
        match sorted.get(lower + 1) {
            Some(&upper) => sorted[lower] + (upper - sorted[lower]) * frac,
            None => sorted[lower],
        }
    }

    /// Skewness under the given convention. Zero variance gives NaN.
    pub fn skewness(values: &[f64], convention: MomentConvention) -> f64 {
        let n = values.len() as f64;
        let (m2, m3, _) = Self::central_moments(values);
        let g1 = m3 / m2.powf(1.5);

        match convention {
            MomentConvention::Population => g1,
            MomentConvention::SampleAdjusted => {
                if values.len() < 3 {
                    return f64::NAN;
                }
                g1 * (n * (n - 1.0)).sqrt() / (n - 2.0)
            }
        }
    }

    /// Excess kurtosis under the given convention. Zero variance gives NaN.
    pub fn excess_kurtosis(values: &[f64], convention: MomentConvention) -> f64 {
        let n = values.len() as f64;
        let (m2, _, m4) = Self::central_moments(values);
        let g2 = m4 / (m2 * m2) - 3.0;

        match convention {
            MomentConvention::Population => g2,
            MomentConvention::SampleAdjusted => {
                if values.len() < 4 {
                    return f64::NAN;
                }
                ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
            }
        }
    }

    /// Biased central moments (m2, m3, m4).
    fn central_moments(values: &[f64]) -> (f64, f64, f64) {
        if values.is_empty() {
            return (f64::NAN, f64::NAN, f64::NAN);
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for v in values {
            let d = v - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        (m2 / n, m3 / n, m4 / n)
    }
}
