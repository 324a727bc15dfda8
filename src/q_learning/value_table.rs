//! Value table for temporal difference learning

use std::collections::{HashMap, hash_map};

use crate::tictactoe::BoardState;

/// Per-action values for one board state, indexed by cell position
pub type ActionValues = [f64; 9];

/// Value table mapping board states to per-cell action values
///
/// Entries are created lazily: the first mutable access to an unseen state
/// inserts nine zeros.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    values: HashMap<BoardState, ActionValues>,
}

impl ValueTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored values for a state, without inserting
    pub fn get(&self, state: &BoardState) -> Option<&ActionValues> {
        self.values.get(state)
    }

    /// Value of one action, zero for unseen states
    pub fn value(&self, state: &BoardState, action: usize) -> f64 {
        self.values
            .get(state)
            .and_then(|values| values.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Get-or-insert accessor: unseen states start at all zeros
    pub fn values_mut(&mut self, state: &BoardState) -> &mut ActionValues {
        self.values.entry(*state).or_insert([0.0; 9])
    }

    /// Overwrite the values of a state
    pub fn insert(&mut self, state: BoardState, values: ActionValues) {
        self.values.insert(state, values);
    }

    /// Maximum over all nine stored values of a state (inserting if unseen)
    pub fn max_value(&mut self, state: &BoardState) -> f64 {
        self.values_mut(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Actions among `legal_actions` sharing the highest value, in the order given
    ///
    /// Inserts the state if unseen. Returns an empty vector when no actions
    /// are legal.
    pub fn best_actions(&mut self, state: &BoardState, legal_actions: &[usize]) -> Vec<usize> {
        let values = *self.values_mut(state);
        let legal: Vec<usize> = legal_actions.iter().copied().filter(|&a| a < 9).collect();
        let best = legal
            .iter()
            .map(|&action| values[action])
            .fold(f64::NEG_INFINITY, f64::max);
        legal
            .into_iter()
            .filter(|&action| values[action] == best)
            .collect()
    }

    /// Remove every learned value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of states stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, BoardState, ActionValues> {
        self.values.iter()
    }
}

impl FromIterator<(BoardState, ActionValues)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (BoardState, ActionValues)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueTable {
    type Item = (&'a BoardState, &'a ActionValues);
    type IntoIter = hash_map::Iter<'a, BoardState, ActionValues>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
