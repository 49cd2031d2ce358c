use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::core::generate::{generate, GenParams, SampleSet};
use crate::error::ConfigError;

/// Content-addressed key: float params enter by bit pattern so equal
/// configs collide and nothing else does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    sample_count: usize,
    trend_bits: u64,
    volatility_bits: u64,
    seed: u64,
    periods: Vec<i32>,
}

impl CacheKey {
    fn new(params: &GenParams, periods: &[i32]) -> Self {
        Self {
            sample_count: params.sample_count,
            trend_bits: params.trend_strength.to_bits(),
            volatility_bits: params.volatility.to_bits(),
            seed: params.seed,
            periods: periods.to_vec(),
        }
    }
}

/// Session-lifetime memo of generated sample sets. No eviction: a session
/// touches a handful of configs and the sets are shared, not copied.
#[derive(Debug, Default)]
pub struct SampleCache {
    map: HashMap<CacheKey, Arc<SampleSet>>,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set for (params, periods), generating on miss.
    /// Hits hand back the same `Arc`, never a recomputation.
    pub fn get_or_generate(
        &mut self,
        params: &GenParams,
        periods: &[i32],
    ) -> Result<Arc<SampleSet>, ConfigError> {
        let key = CacheKey::new(params, periods);
        if let Some(hit) = self.map.get(&key) {
            debug!(seed = params.seed, "sample cache hit");
            return Ok(Arc::clone(hit));
        }
        debug!(seed = params.seed, "sample cache miss, generating");
        let set = Arc::new(generate(params, periods)?);
        self.map.insert(key, Arc::clone(&set));
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
