//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "first" | "p1" => Ok(Player::X),
            "o" | "second" | "p2" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Snapshot of the nine cells, used as the value-table key
///
/// Copying is cheap (9 bytes), so lookahead works on copies and the live
/// board stays with [`super::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters once whitespace is removed.
    /// `.`, `_` and `-` are empty cells, `X`/`O` are marks (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns error if the string has the wrong number of cells or contains an
    /// unknown character.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(BoardState { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Return a copy with `player` placed at `pos`, or `None` if the cell is
    /// taken or out of range
    #[must_use = "with_mark returns a new board state; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, player: Player) -> Option<BoardState> {
        if pos >= 9 || !self.is_empty(pos) {
            return None;
        }
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        Some(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Compact single-line encoding, e.g. `XX.O.....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        assert_eq!(board.occupied_count(), 3);

        // Whitespace separates rows
        let rows = BoardState::from_string("XX. O.. ...").unwrap();
        assert_eq!(rows.encode(), "XX.O.....");

        // Invalid string length
        assert!(BoardState::from_string("XO").is_err());
        assert!(BoardState::from_string("XO........").is_err());

        // Invalid character
        let err = BoardState::from_string("XOZ......").unwrap_err();
        assert!(err.to_string().contains("'Z'"));

        // Digits are cell indices, never marks
        assert_eq!(Cell::from_char('0'), None);
        assert!(BoardState::from_string("X0.......").is_err());
    }

    #[test]
    fn test_empty_positions_ascending_complement() {
        let board = BoardState::from_string("X.O.X.O..").unwrap();
        assert_eq!(board.empty_positions(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_with_mark() {
        let board = BoardState::new();
        let next = board.with_mark(4, Player::O).unwrap();
        assert_eq!(next.get(4), Cell::O);
        assert!(board.is_empty(4));

        assert!(next.with_mark(4, Player::X).is_none());
        assert!(next.with_mark(9, Player::X).is_none());
    }

    #[test]
    fn test_winner_and_full() {
        let won = BoardState::from_string("XXXOO....").unwrap();
        assert_eq!(won.winner(), Some(Player::X));
        assert!(!won.is_full());

        let draw = BoardState::from_string("XOXXOOOXX").unwrap();
        assert_eq!(draw.winner(), None);
        assert!(draw.is_full());
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_display() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }
}
