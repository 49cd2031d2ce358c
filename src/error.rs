use thiserror::Error;

/// Rejected generator parameters. Raised before any sample data exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sample_count must be at least 1, got {0}")]
    SampleCount(usize),
    #[error("volatility must be finite and > 0, got {0}")]
    Volatility(f64),
    #[error("trend_strength must be finite and >= 0, got {0}")]
    TrendStrength(f64),
}

/// An empty sample reached a statistics routine. The generator never
/// produces one when sample_count >= 1, so this marks a broken contract
/// upstream, not a user mistake.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("statistics require a non-empty sample")]
    EmptySample,
}

/// Terminal failure of an animation run. No retries: every core
/// computation is deterministic, so a retry would fail identically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}
