//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Check whether placing `player` at `pos` would complete a line.
    ///
    /// The placement happens on a scratch copy; `cells` is never touched.
    /// Occupied or out-of-range positions never complete a line.
    pub fn completes_line(cells: &[Cell; 9], pos: usize, player: Player) -> bool {
        if pos >= 9 || cells[pos] != Cell::Empty {
            return false;
        }
        let mut scratch = *cells;
        scratch[pos] = player.to_cell();
        Self::has_won(&scratch, player)
    }

    /// All positions that would immediately win for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        (0..9)
            .filter(|&pos| Self::completes_line(cells, pos, player))
            .collect()
    }

    /// Lowest position among `candidates` that immediately wins for the player
    pub fn first_winning_move(
        cells: &[Cell; 9],
        candidates: &[usize],
        player: Player,
    ) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&pos| Self::completes_line(cells, pos, player))
            .min()
    }
}
