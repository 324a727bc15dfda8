//! Board engine rules: legal moves, line detection, terminal states

use noughts::tictactoe::{BoardState, Cell, Game, GameStatus, LineAnalyzer, Player, WINNING_LINES};

fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap()
}

#[test]
fn available_actions_are_the_empty_cells_in_order() {
    let mut game = Game::new();
    assert_eq!(game.available_actions(), (0..9).collect::<Vec<_>>());

    for (index, player) in [(7, Player::X), (2, Player::O), (4, Player::X)] {
        assert!(game.make_move(index, player));
    }
    assert_eq!(game.available_actions(), vec![0, 1, 3, 5, 6, 8]);
    assert_eq!(game.state().empty_positions(), game.available_actions());
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let mut game = Game::new();
    assert!(game.make_move(4, Player::X));
    let before = game.state();

    assert!(!game.make_move(4, Player::O));
    assert!(!game.make_move(4, Player::X));
    assert_eq!(game.state(), before);
    assert_eq!(game.moves().len(), 1);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut game = Game::new();
    assert!(!game.make_move(9, Player::X));
    assert!(!game.make_move(usize::MAX, Player::X));
    assert_eq!(game.status(), GameStatus::Empty);
}

#[test]
fn every_line_wins_for_its_owner_only() {
    for line in WINNING_LINES {
        for player in [Player::X, Player::O] {
            let mut game = Game::new();
            for &pos in &line {
                assert!(game.make_move(pos, player));
            }
            assert!(game.check_winner(player), "line {line:?}");
            assert!(!game.check_winner(player.opponent()), "line {line:?}");
            assert_eq!(game.winner(), Some(player));
            assert_eq!(game.status(), GameStatus::Won(player));
        }
    }
}

#[test]
fn two_in_a_line_is_not_a_win() {
    let mut game = Game::new();
    game.make_move(0, Player::X);
    game.make_move(1, Player::X);
    game.make_move(5, Player::X);
    assert!(!game.check_winner(Player::X));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut game = Game::new();
    let sequence = [
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (4, Player::O),
        (3, Player::X),
        (5, Player::O),
        (7, Player::X),
        (6, Player::O),
        (8, Player::X),
    ];
    for (index, player) in sequence {
        assert!(game.make_move(index, player), "move {index}");
    }

    assert!(game.is_full());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.available_actions().is_empty());
    assert_eq!(game.state(), board("XOXXOOOXX"));
}

#[test]
fn no_moves_after_the_game_is_won() {
    let mut game = Game::new();
    for pos in [0, 1, 2] {
        game.make_move(pos, Player::O);
    }
    assert!(game.is_terminal());
    assert!(!game.make_move(5, Player::X));
    assert_eq!(game.state().get(5), Cell::Empty);
}

#[test]
fn reset_clears_board_and_winner() {
    let mut game = Game::new();
    for pos in [2, 4, 6] {
        game.make_move(pos, Player::X);
    }
    assert_eq!(game.winner(), Some(Player::X));

    let fresh = game.reset();
    assert_eq!(fresh, BoardState::new());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Empty);
    assert_eq!(game.available_actions().len(), 9);
}

#[test]
fn winning_moves_lists_every_completing_cell() {
    let state = board("XX.X.....");
    assert_eq!(LineAnalyzer::winning_moves(&state.cells, Player::X), vec![2, 6]);
    assert!(LineAnalyzer::winning_moves(&state.cells, Player::O).is_empty());
}

#[test]
fn board_strings_are_validated() {
    assert!(BoardState::from_string("XO.").is_err());
    assert!(BoardState::from_string("XO.XO.XOZ").is_err());
    assert_eq!(board("XO. ... ..."), board("XO._-...."));
    assert_eq!(board("xo......."), board("XO......."));
}
