//! Ordered move-selection chain layered over the learned values

use std::fmt;

/// Cell preferred on the opening move
pub const CENTER: usize = 4;

/// One link of the move-selection chain
///
/// The agent consults [`Strategy::CHAIN`] front to back and plays the first
/// move any link produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Complete one of the agent's own lines
    WinNow,
    /// Occupy the cell that would complete an opponent line
    Block,
    /// Take the center
    Opening,
    /// Random legal move with probability ε, only while exploring
    Explore,
    /// Highest learned value, random among ties
    Learned,
}

impl Strategy {
    pub const CHAIN: [Strategy; 5] = [
        Strategy::WinNow,
        Strategy::Block,
        Strategy::Opening,
        Strategy::Explore,
        Strategy::Learned,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::WinNow => "win-now",
            Strategy::Block => "block",
            Strategy::Opening => "opening",
            Strategy::Explore => "explore",
            Strategy::Learned => "learned",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chosen action and the link of the chain that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: usize,
    pub strategy: Strategy,
}
