//! Statistics collection for Monte Carlo move searches
//!
//! This module provides structures for reporting what [`crate::Monty`] did
//! while choosing a move.

use std::time::Duration;

use crate::utils::win_rate;

/// Playout results for one candidate column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateStats {
    /// The candidate column
    pub column: usize,

    /// Playouts won by the searching player
    pub wins: usize,

    /// Playouts run for this column
    pub simulations: usize,
}

impl CandidateStats {
    /// Fraction of playouts won
    pub fn win_rate(&self) -> f64 {
        win_rate(self.wins, self.simulations)
    }
}

/// Statistics collected during one move search
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Candidates that were scored by playouts, in the order they were tried
    pub candidates: Vec<CandidateStats>,

    /// Total number of playouts run
    pub simulations_run: usize,

    /// Column that won on the spot and ended the search early
    pub immediate_win: Option<usize>,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the playout results for a candidate
    pub fn record(&mut self, column: usize, wins: usize, simulations: usize) {
        self.candidates.push(CandidateStats {
            column,
            wins,
            simulations,
        });
        self.simulations_run += simulations;
    }

    /// Win rate of `column`, if it was scored
    pub fn win_rate(&self, column: usize) -> Option<f64> {
        self.candidates
            .iter()
            .find(|c| c.column == column)
            .map(CandidateStats::win_rate)
    }

    /// Returns the number of playouts per second
    pub fn simulations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.simulations_run as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Monte Carlo Search Statistics:\n\
             - Candidates scored: {}\n\
             - Playouts: {}\n\
             - Total time: {:.3} seconds\n\
             - Playouts per second: {:.1}\n\
             - Immediate win: {}",
            self.candidates.len(),
            self.simulations_run,
            self.total_time.as_secs_f64(),
            self.simulations_per_second(),
            match self.immediate_win {
                Some(col) => format!("column {}", col),
                None => "none".to_string(),
            }
        );
        for c in &self.candidates {
            out.push_str(&format!(
                "\n - Column {}: {}/{} ({:.1}%)",
                c.column,
                c.wins,
                c.simulations,
                c.win_rate() * 100.0
            ));
        }
        out
    }
}
