//! Dashboard settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `VITALWATCH_*` environment variables. CLI flags override the result where
//! they overlap (see `main.rs`).
//!
//! # Configuration
//!
//! ```toml
//! refresh_secs = 30
//!
//! [heart_rate_range]
//! min = 60.0
//! max = 100.0
//!
//! [temperature_range]
//! min = 97.0
//! max = 99.0
//! ```

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Inclusive display band drawn on a trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    /// Whether a value falls inside the band.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Resolved dashboard settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Seconds between automatic refreshes.
    pub refresh_secs: u64,
    /// Normal band for the heart rate chart, in bpm.
    pub heart_rate_range: NormalRange,
    /// Normal band for the temperature chart, in °F.
    pub temperature_range: NormalRange,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_secs: 30,
            heart_rate_range: NormalRange { min: 60.0, max: 100.0 },
            temperature_range: NormalRange { min: 97.0, max: 99.0 },
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus the environment.
    ///
    /// Missing file or keys fall back to defaults; a present-but-broken file
    /// is an error rather than a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("refresh_secs", 30_u64)?
            .set_default("heart_rate_range.min", 60.0)?
            .set_default("heart_rate_range.max", 100.0)?
            .set_default("temperature_range.min", 97.0)?
            .set_default("temperature_range.max", 99.0)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix("VITALWATCH").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
