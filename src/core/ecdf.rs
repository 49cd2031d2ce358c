use crate::error::StatsError;

pub const QUARTILE_PROBS: [f64; 3] = [0.25, 0.50, 0.75];
pub const QUARTILE_LABELS: [&str; 3] = ["Q1 (25%)", "Q2 (50%)", "Q3 (75%)"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartilePoint {
    pub value: f64,
    pub prob: f64,
    pub label: &'static str,
}

/// One period's empirical CDF: values ascending, cumulative probability
/// k/n for the k-th smallest, ending exactly at 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfCurve {
    pub sorted_values: Vec<f64>,
    pub cum_prob: Vec<f64>,
    pub quartiles: [QuartilePoint; 3],
}

/// Build the empirical CDF and quartile markers for one sample.
/// Pure; recomputed per frame, never cached across frames.
pub fn ecdf(sample: &[f64]) -> Result<CdfCurve, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    let cum_prob: Vec<f64> = (1..=n).map(|k| k as f64 / n as f64).collect();

    let quartiles = std::array::from_fn(|i| QuartilePoint {
        value: quantile_sorted(&sorted, QUARTILE_PROBS[i]),
        prob: QUARTILE_PROBS[i],
        label: QUARTILE_LABELS[i],
    });

    Ok(CdfCurve {
        sorted_values: sorted,
        cum_prob,
        quartiles,
    })
}

/// Linear-interpolation quantile (Hyndman-Fan R-7, the NumPy/R default)
/// on pre-sorted data. Caller guarantees `sorted` is non-empty.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}
