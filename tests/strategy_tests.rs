use connect_four_bots::{
    BetterPlayer, Board, Connect4Error, RandomPlayer, SimplePlayer, Strategy, COLS, ROWS,
};
use rand::{rngs::StdRng, SeedableRng};

fn board_from(moves: &[(usize, u8)]) -> Board {
    let mut board = Board::new();
    for &(col, player) in moves {
        board.apply_move(col, player).unwrap();
    }
    board
}

/// Every column full except column 6
fn one_column_left() -> Board {
    let mut board = Board::new();
    for col in 0..COLS - 1 {
        for row in 0..ROWS {
            board.apply_move(col, 1 + ((col / 2 + row) % 2) as u8).unwrap();
        }
    }
    board
}

fn full_board() -> Board {
    let mut board = one_column_left();
    for row in 0..ROWS {
        board.apply_move(COLS - 1, 1 + (row % 2) as u8).unwrap();
    }
    board
}

/// Player 1 on row 0 at columns 3, 4 and 5, so columns 2 and 6 both win
fn two_winning_columns() -> Board {
    board_from(&[(3, 1), (0, 2), (4, 1), (0, 2), (5, 1), (1, 2)])
}

/// Player 2 holds row 1 at columns 1 to 3, so player 1 must not fill
/// row 0 at column 0 or column 4
fn opponent_threat_board() -> Board {
    board_from(&[(1, 1), (1, 2), (2, 2), (2, 2), (3, 1), (3, 2)])
}

#[test]
fn test_random_player_picks_legal_columns() {
    let board = board_from(&[(0, 1), (0, 2), (0, 1), (0, 2), (0, 1), (0, 2)]);
    let player = RandomPlayer::new();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let col = player.choose_move(&board, 1, &mut rng).unwrap();
        assert!(board.possible_moves().contains(&col));
        assert_ne!(col, 0);
    }
}

#[test]
fn test_random_player_is_deterministic_for_a_seed() {
    let board = Board::new();
    let player = RandomPlayer::new();

    let picks = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| player.choose_move(&board, 2, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(3), picks(3));
}

#[test]
fn test_simple_player_takes_lowest_winning_column() {
    let board = two_winning_columns();
    let player = SimplePlayer::new();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(player.choose_move(&board, 1, &mut rng), Ok(2));
    }
}

#[test]
fn test_simple_player_does_not_mutate_board() {
    let board = two_winning_columns();
    let before = board.clone();
    let mut rng = StdRng::seed_from_u64(0);

    SimplePlayer::new().choose_move(&board, 2, &mut rng).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_players_reject_invalid_input() {
    let mut rng = StdRng::seed_from_u64(0);
    let strategies: Vec<Box<dyn Strategy>> = vec![
        Box::new(RandomPlayer::new()),
        Box::new(SimplePlayer::new()),
        Box::new(BetterPlayer::new()),
    ];

    for strategy in &strategies {
        assert_eq!(
            strategy.choose_move(&Board::new(), 0, &mut rng),
            Err(Connect4Error::InvalidPlayer(0)),
            "{} accepted player 0",
            strategy.name()
        );
        assert_eq!(
            strategy.choose_move(&full_board(), 1, &mut rng),
            Err(Connect4Error::NoLegalMoves),
            "{} moved on a full board",
            strategy.name()
        );
    }
}

#[test]
fn test_last_open_column_is_played() {
    let board = one_column_left();
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(RandomPlayer::new().choose_move(&board, 1, &mut rng), Ok(6));
    assert_eq!(SimplePlayer::new().choose_move(&board, 2, &mut rng), Ok(6));
    assert_eq!(BetterPlayer::new().choose_move(&board, 1, &mut rng), Ok(6));
}

#[test]
fn test_better_player_takes_immediate_win() {
    let board = two_winning_columns();
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(BetterPlayer::new().choose_move(&board, 1, &mut rng), Ok(2));
}

#[test]
fn test_better_player_avoids_opponent_winners() {
    let board = opponent_threat_board();
    let player = BetterPlayer::new();

    // Sanity: both columns really hand player 2 a win
    for col in [0, 4] {
        let mut copy = board.clone();
        copy.apply_move(col, 1).unwrap();
        assert!(copy.is_winning_move(col, 2).unwrap());
    }

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let col = player.choose_move(&board, 1, &mut rng).unwrap();
        assert!(col != 0 && col != 4, "seed {} chose column {}", seed, col);
    }
}

#[test]
fn test_better_player_plays_when_every_move_loses() {
    // Player 2 has three stacked in columns 1 and 5, so every move leaves
    // one of the stacks open
    let board = board_from(&[(1, 2), (1, 2), (1, 2), (5, 2), (5, 2), (5, 2)]);
    let mut rng = StdRng::seed_from_u64(11);

    let col = BetterPlayer::new().choose_move(&board, 1, &mut rng).unwrap();
    assert!(board.possible_moves().contains(&col));
}
