//! The Monte Carlo player
//!
//! For every candidate column Monty plays the move on a copy of the board,
//! runs a number of playouts to the end of the game with the opponent to
//! move, and keeps the column whose playouts it won most often. A column that
//! wins on the spot is returned straight away, before any playouts.

use std::time::Instant;

use log::debug;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::{
    board::Player,
    config::MontyConfig,
    player::{candidates, Strategy},
    simulator::{Outcome, Playout, SimplePlayout},
    stats::SearchStatistics,
    utils::playout_seeds,
    Board, Result,
};

/// The column Monty picked and how it got there
#[derive(Debug, Clone)]
pub struct MoveEvaluation {
    /// Chosen column
    pub column: usize,

    /// What the search did
    pub statistics: SearchStatistics,
}

/// Monte Carlo player
///
/// Monty stores an inner strategy at construction, but playouts are driven
/// by the configured [`Playout`] policy ([`SimplePlayout`] by default, simple
/// vs simple). The inner strategy is only reachable through
/// [`Monty::strategy`].
pub struct Monty {
    /// Search configuration
    config: MontyConfig,

    /// Strategy handed in at construction; not consulted during playouts
    strategy: Box<dyn Strategy>,

    /// Policy used to finish games
    playout: Box<dyn Playout>,
}

impl Monty {
    /// Creates a Monty that runs `n` playouts per candidate column
    ///
    /// Fails with `InvalidConfiguration` if `n` is zero.
    pub fn new(n: usize, strategy: Box<dyn Strategy>) -> Result<Self> {
        Self::with_config(MontyConfig::default().with_simulations(n), strategy)
    }

    /// Creates a Monty from a full configuration
    pub fn with_config(config: MontyConfig, strategy: Box<dyn Strategy>) -> Result<Self> {
        config.validate()?;
        Ok(Monty {
            config,
            strategy,
            playout: Box::new(SimplePlayout::new()),
        })
    }

    /// Sets the policy used to play games to the end
    pub fn with_playout<P: Playout + 'static>(mut self, playout: P) -> Self {
        self.playout = Box::new(playout);
        self
    }

    /// The search configuration
    pub fn config(&self) -> &MontyConfig {
        &self.config
    }

    /// The strategy handed in at construction
    pub fn strategy(&self) -> &dyn Strategy {
        &*self.strategy
    }

    /// Chooses a column for `player` and reports the search statistics
    ///
    /// Candidates are tried in ascending column order. The first one that
    /// wins on the spot is returned without scoring the rest. Otherwise the
    /// column with strictly the most playout wins is returned, so earlier
    /// columns win ties and the first candidate is returned when every
    /// column scores zero.
    pub fn evaluate(
        &self,
        board: &Board,
        player: u8,
        rng: &mut dyn RngCore,
    ) -> Result<MoveEvaluation> {
        let start_time = Instant::now();
        let (player, moves) = candidates(board, player)?;
        let opponent = player.other();

        let mut statistics = SearchStatistics::new();
        let mut top_move = moves[0];
        let mut best = 0;

        for &col in &moves {
            let mut copy = board.clone();
            copy.apply_move(col, player.number())?;
            if copy.is_win(col)? {
                debug!("monty: column {} wins immediately", col);
                statistics.immediate_win = Some(col);
                statistics.total_time = start_time.elapsed();
                return Ok(MoveEvaluation {
                    column: col,
                    statistics,
                });
            }

            let wins = self.count_wins(&copy, player, opponent, rng)?;
            debug!(
                "monty: column {} won {}/{} playouts",
                col, wins, self.config.simulations
            );
            statistics.record(col, wins, self.config.simulations);

            if wins > best {
                best = wins;
                top_move = col;
            }
        }

        statistics.total_time = start_time.elapsed();
        debug!(
            "monty: player {} chooses column {} ({} playouts in {:?})",
            player.number(),
            top_move,
            statistics.simulations_run,
            statistics.total_time
        );

        Ok(MoveEvaluation {
            column: top_move,
            statistics,
        })
    }

    /// Runs the configured number of playouts from `board` and counts the
    /// ones `player` won
    fn count_wins(
        &self,
        board: &Board,
        player: Player,
        opponent: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize> {
        let seeds = playout_seeds(rng, self.config.simulations);
        let run_one = |seed: u64| -> Result<Outcome> {
            let mut child = StdRng::seed_from_u64(seed);
            self.playout.playout(board.clone(), opponent, &mut child)
        };

        let outcomes: Vec<Outcome> = if self.config.parallel {
            seeds.par_iter().map(|&seed| run_one(seed)).collect::<Result<_>>()?
        } else {
            seeds.iter().map(|&seed| run_one(seed)).collect::<Result<_>>()?
        };

        Ok(outcomes
            .into_iter()
            .filter(|outcome| *outcome == Outcome::Win(player))
            .count())
    }
}

impl Clone for Monty {
    fn clone(&self) -> Self {
        Monty {
            config: self.config.clone(),
            strategy: self.strategy.clone_box(),
            playout: self.playout.clone_box(),
        }
    }
}

impl std::fmt::Debug for Monty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monty")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Strategy for Monty {
    fn choose_move(&self, board: &Board, player: u8, rng: &mut dyn RngCore) -> Result<usize> {
        self.evaluate(board, player, rng)
            .map(|evaluation| evaluation.column)
    }

    fn name(&self) -> &str {
        "monty"
    }

    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(self.clone())
    }
}
