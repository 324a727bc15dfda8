//! Live game: the mutable board plus its winner

use super::board::{BoardState, Cell, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Empty,
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}

/// The live game board
///
/// The winner is recorded by the move that completes a line and stays set
/// until [`Game::reset`]. Once the game is won or drawn every further move is
/// rejected.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: BoardState,
    winner: Option<Player>,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new empty game
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the board and the winner, returning the fresh state
    pub fn reset(&mut self) -> BoardState {
        self.board = BoardState::new();
        self.winner = None;
        self.moves.clear();
        self.board
    }

    /// Snapshot of the current board
    pub fn state(&self) -> BoardState {
        self.board
    }

    /// Empty cells, ascending
    pub fn available_actions(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Place `player` at `index`.
    ///
    /// Returns `false` without touching the board when the index is out of
    /// range, the cell is occupied, or the game is already over.
    pub fn make_move(&mut self, index: usize, player: Player) -> bool {
        if self.is_terminal() {
            return false;
        }
        let Some(next) = self.board.with_mark(index, player) else {
            return false;
        };

        self.board = next;
        self.moves.push(Move {
            position: index,
            player,
        });
        if self.check_winner(player) {
            self.winner = Some(player);
        }
        true
    }

    /// True iff `player` holds a complete line on the current board
    pub fn check_winner(&self, player: Player) -> bool {
        self.board.has_won(player)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Moves applied since the last reset, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner {
            GameStatus::Won(player)
        } else if self.is_full() {
            GameStatus::Draw
        } else if self.board.cells.iter().all(|&c| c == Cell::Empty) {
            GameStatus::Empty
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
