use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::generate::GenParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "AnimationConfig::default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "AnimationConfig::default_trend_strength")]
    pub trend_strength: f64,
    #[serde(default = "AnimationConfig::default_volatility")]
    pub volatility: f64,
    #[serde(default = "AnimationConfig::default_animation_delay_seconds")]
    pub animation_delay_seconds: f64,
    #[serde(default = "AnimationConfig::default_seed")]
    pub seed: u64,
}

impl AnimationConfig {
    fn default_sample_count() -> usize {
        1000
    }
    fn default_trend_strength() -> f64 {
        0.5
    }
    fn default_volatility() -> f64 {
        1.0
    }
    fn default_animation_delay_seconds() -> f64 {
        1.0
    }
    fn default_seed() -> u64 {
        42
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            sample_count: Self::default_sample_count(),
            trend_strength: Self::default_trend_strength(),
            volatility: Self::default_volatility(),
            animation_delay_seconds: Self::default_animation_delay_seconds(),
            seed: Self::default_seed(),
        }
    }
}

impl AnimationConfig {
    /// The generator-facing slice of the config. UI-range checks belong
    /// to the widget layer; the generator re-validates the physical
    /// constraints itself.
    pub fn gen_params(&self) -> GenParams {
        GenParams {
            sample_count: self.sample_count,
            trend_strength: self.trend_strength,
            volatility: self.volatility,
            seed: self.seed,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        let secs = self.animation_delay_seconds;
        if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        }
    }

    /// Read the config at `path`, or write a commented default template
    /// there and return the defaults. Parse and IO failures fall back to
    /// defaults with a warning rather than aborting.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    if line.trim().is_empty() {
                        commented.push('\n');
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}. Continuing with defaults.");
            }
        }
        default_cfg
    }
}
