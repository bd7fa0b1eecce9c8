use anyhow::{bail, Result};
use classwork_core::linspace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// Settings for one walkthrough run
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Seed for the random lines; drawn fresh (and logged) when absent
    pub seed: Option<u64>,
    /// Sample points per plotted curve
    pub samples: usize,
    /// Start of the plotted x-range
    pub from: f64,
    /// End of the plotted x-range
    pub to: f64,
    /// Number of random lines to plot
    pub lines: usize,
    /// Text file whose first line names the factory-built employee
    pub employee_file: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            samples: 100,
            from: -5.0,
            to: 5.0,
            lines: 4,
            employee_file: None,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            bail!("plot range must be finite, got [{}, {}]", self.from, self.to);
        }
        if self.from >= self.to {
            bail!("plot range start {} must be below its end {}", self.from, self.to);
        }
        if self.samples < 2 {
            bail!("need at least 2 samples per curve, got {}", self.samples);
        }
        Ok(())
    }

    /// The dense x-range every curve is sampled over
    pub fn xs(&self) -> Vec<f64> {
        linspace(self.from, self.to, self.samples)
    }

    /// A generator for the random lines
    pub fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!(seed, "random line seed");
        StdRng::seed_from_u64(seed)
    }
}
