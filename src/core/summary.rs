use crate::core::generate::SampleSet;
use crate::error::StatsError;

/// Descriptive statistics for one period. Std-dev uses the population
/// formula (denominator n) so periods stay comparable at any sample size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodSummary {
    pub period: i32,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

pub fn summarize(period: i32, sample: &[f64]) -> Result<PeriodSummary, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(PeriodSummary {
        period,
        mean,
        std_dev: variance.sqrt(),
        min,
        max,
    })
}

/// Summary rows for every period, in period order.
pub fn summarize_all(set: &SampleSet) -> Result<Vec<PeriodSummary>, StatsError> {
    set.iter()
        .map(|(period, sample)| summarize(period, sample))
        .collect()
}
