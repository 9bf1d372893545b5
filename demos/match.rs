//! Monty vs BetterPlayer
//!
//! Plays a short series of games between the Monte Carlo player and the
//! defensive player, alternating who starts, and prints the tally.
//!
//! ```bash
//! cargo run --release --example match -- [seed] [simulations] [games]
//! ```

use connect_four_bots::{
    BetterPlayer, Board, Monty, MontyConfig, Outcome, Player, SimplePlayer, Simulator, Strategy,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let simulations = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(50);
    let games = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    println!("Monty vs Better Connect Four");
    println!("============================");
    println!("seed: {}, playouts per column: {}, games: {}", seed, simulations, games);
    println!();

    let config = MontyConfig::default()
        .with_simulations(simulations)
        .with_parallel(true);
    let monty = match Monty::with_config(config, Box::new(SimplePlayer::new())) {
        Ok(monty) => monty,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    let better = BetterPlayer::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut monty_wins = 0;
    let mut better_wins = 0;
    let mut draws = 0;
    let mut last_board = Board::new();

    for game in 0..games {
        // Monty sits in seat 1 for even games and seat 2 for odd ones
        let monty_seat = if game % 2 == 0 { Player::One } else { Player::Two };
        let (first, second): (&dyn Strategy, &dyn Strategy) = match monty_seat {
            Player::One => (&monty, &better),
            Player::Two => (&better, &monty),
        };

        match Simulator::new(Board::new(), first, second, Player::One).run(&mut rng) {
            Ok((outcome, board)) => {
                match outcome {
                    Outcome::Win(winner) if winner == monty_seat => monty_wins += 1,
                    Outcome::Win(_) => better_wins += 1,
                    Outcome::Draw => draws += 1,
                }
                println!("Game {}: {:?} after {} moves", game + 1, outcome, board.move_count());
                last_board = board;
            }
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        }
    }

    println!();
    println!("Final position of the last game:");
    println!("{}", last_board);
    println!("Monty: {}  Better: {}  Draws: {}", monty_wins, better_wins, draws);
}
