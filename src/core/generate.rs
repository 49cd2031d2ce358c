use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::ConfigError;

pub const BASE_MEAN: f64 = 50.0;
pub const BASE_STD: f64 = 15.0;

// Year-to-year persistence: each period keeps 70% of the previous sample
// (elementwise) and pulls 30% toward the new target mean. Fixed design
// constants, not user-tunable.
const CARRYOVER_WEIGHT: f64 = 0.7;
const TARGET_WEIGHT: f64 = 0.3;

// The uniform spread jitter can undershoot a small base spread; the draw
// itself must stay well-defined.
const MIN_SPREAD: f64 = 1e-6;

/// The six-year reference timeline, in emission order.
pub fn reference_periods() -> Vec<i32> {
    (2010..=2015).collect()
}

/// Generator parameters. A value of this type plus a period list fully
/// determines the output stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParams {
    pub sample_count: usize,
    pub trend_strength: f64,
    pub volatility: f64,
    pub seed: u64,
}

impl GenParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count < 1 {
            return Err(ConfigError::SampleCount(self.sample_count));
        }
        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(ConfigError::Volatility(self.volatility));
        }
        if !self.trend_strength.is_finite() || self.trend_strength < 0.0 {
            return Err(ConfigError::TrendStrength(self.trend_strength));
        }
        Ok(())
    }
}

/// One sample vector per period, read-only once built. A new parameter set
/// produces a new `SampleSet`; nothing edits one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    periods: Vec<i32>,
    values: Vec<Vec<f64>>,
}

impl SampleSet {
    pub fn periods(&self) -> &[i32] {
        &self.periods
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Observations per period (identical across periods).
    pub fn sample_count(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn samples(&self, idx: usize) -> &[f64] {
        &self.values[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &[f64])> {
        self.periods
            .iter()
            .copied()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Min and max over the union of all periods' observations.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for sample in &self.values {
            for &x in sample {
                range = Some(match range {
                    Some((lo, hi)) => (lo.min(x), hi.max(x)),
                    None => (x, x),
                });
            }
        }
        range
    }
}

/// Synthesize the per-period samples for `periods`.
///
/// Deterministic for a given (params, periods): the stream is owned by a
/// `StdRng` seeded from `params.seed`, never a process-wide generator.
/// Period 0 draws independent normals around a jittered base mean/spread;
/// every later period blends the previous sample with the new target mean
/// and adds fresh noise at the new spread, so consecutive periods stay
/// correlated.
pub fn generate(params: &GenParams, periods: &[i32]) -> Result<SampleSet, ConfigError> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(params.seed);
    let n = params.sample_count;
    let mut values: Vec<Vec<f64>> = Vec::with_capacity(periods.len());

    for i in 0..periods.len() {
        let mean_jitter = 2.0 * normal_deviate(&mut rng);
        let target_mean = BASE_MEAN + params.trend_strength * i as f64 + mean_jitter;
        let spread =
            (BASE_STD * params.volatility + rng.random_range(-2.0..2.0)).max(MIN_SPREAD);

        let sample: Vec<f64> = if i == 0 {
            (0..n)
                .map(|_| target_mean + spread * normal_deviate(&mut rng))
                .collect()
        } else {
            values[i - 1]
                .iter()
                .map(|&prev| {
                    CARRYOVER_WEIGHT * prev
                        + TARGET_WEIGHT * target_mean
                        + spread * normal_deviate(&mut rng)
                })
                .collect()
        };
        values.push(sample);
    }

    Ok(SampleSet {
        periods: periods.to_vec(),
        values,
    })
}

fn normal_deviate(rng: &mut StdRng) -> f64 {
    rng.sample(StandardNormal)
}
