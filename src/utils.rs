//! Small helpers shared by the players

use rand::RngCore;

/// Safely calculates the win rate from wins and simulations
///
/// Returns 0.0 if no simulations have been run.
pub fn win_rate(wins: usize, simulations: usize) -> f64 {
    if simulations == 0 {
        return 0.0;
    }
    wins as f64 / simulations as f64
}

/// Draws `count` seeds for per-playout generators
///
/// The seeds are drawn in order from `rng`, so the same parent seed always
/// yields the same streams no matter how the playouts are scheduled.
pub fn playout_seeds(rng: &mut dyn RngCore, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.next_u64()).collect()
}
