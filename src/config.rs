//! Configuration options for the Monte Carlo player
//!
//! This module defines the parameters that control how much work
//! [`crate::Monty`] does per move and how it does it.

use crate::{Connect4Error, Result};

/// Configuration for [`crate::Monty`]
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use connect_four_bots::MontyConfig;
///
/// let config = MontyConfig::default()
///     .with_simulations(500)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MontyConfig {
    /// Number of playouts run for every candidate column
    ///
    /// Must be at least 1.
    pub simulations: usize,

    /// Whether to spread each candidate's playouts over the rayon thread pool
    ///
    /// Every playout gets its own generator seeded from the caller's
    /// generator before any of them run, so the chosen move for a given seed
    /// is the same in both modes.
    pub parallel: bool,
}

impl Default for MontyConfig {
    fn default() -> Self {
        MontyConfig {
            simulations: 100,
            parallel: false,
        }
    }
}

impl MontyConfig {
    /// Sets the number of playouts per candidate column
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    /// Sets whether playouts run in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(Connect4Error::InvalidConfiguration(
                "simulations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
