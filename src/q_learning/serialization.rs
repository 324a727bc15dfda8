//! On-disk form of the value table.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    q_learning::value_table::{ActionValues, ValueTable},
    tictactoe::BoardState,
};

/// One persisted state with its nine action values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub state: BoardState,
    pub values: ActionValues,
}

/// Versioned envelope written by the repositories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedValueTable {
    pub version: u32,
    pub entries: Vec<TableEntry>,
}

impl SavedValueTable {
    pub const VERSION: u32 = 1;

    /// Snapshot a table; entries are ordered by board encoding so identical
    /// tables produce identical bytes.
    pub fn from_table(table: &ValueTable) -> Self {
        let mut entries: Vec<TableEntry> = table
            .iter()
            .map(|(state, values)| TableEntry {
                state: *state,
                values: *values,
            })
            .collect();
        entries.sort_by_key(|entry| entry.state.encode());

        Self {
            version: Self::VERSION,
            entries,
        }
    }

    /// Rebuild the table, rejecting unknown format versions
    pub fn into_table(self) -> Result<ValueTable> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }

        Ok(self
            .entries
            .into_iter()
            .map(|entry| (entry.state, entry.values))
            .collect())
    }
}
