//! Simulation configuration.

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of campaigns to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Autopilot drinks a potion when HP falls below this percent of max
    pub potion_percent: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            potion_percent: 35,
            verbosity: 1,
        }
    }
}
