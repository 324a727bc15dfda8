//! Repository port for value table persistence.
//!
//! This module defines the trait boundary between the agent and the storage
//! that keeps its learned values across sessions.

use std::path::Path;

use crate::{Result, q_learning::ValueTable};

/// Port for persisting and loading a value table.
///
/// Both operations work on the whole table: a save replaces whatever was
/// stored at `path`, a load returns everything stored there.
///
/// # Examples
///
/// ```no_run
/// use noughts::ports::ValueTableRepository;
/// use noughts::q_learning::ValueTable;
/// use std::path::Path;
///
/// fn load_or_empty<R: ValueTableRepository>(repo: &R, path: &Path) -> noughts::Result<ValueTable> {
///     Ok(repo.load(path)?.unwrap_or_default())
/// }
/// ```
pub trait ValueTableRepository {
    /// Save the whole table, overwriting any previous save at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()>;

    /// Load the table stored at `path`.
    ///
    /// Returns `Ok(None)` when nothing has been saved there yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stored data cannot be read
    /// - The data is corrupted or uses an unsupported format version
    fn load(&self, path: &Path) -> Result<Option<ValueTable>>;
}
