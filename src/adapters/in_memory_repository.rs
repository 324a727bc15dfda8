//! In-memory value table repository for testing.
//!
//! This adapter provides a pure in-memory implementation of
//! ValueTableRepository, enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{
    Result, error::Error, ports::ValueTableRepository, q_learning::SavedValueTable,
    q_learning::ValueTable,
};

/// In-memory repository for testing.
///
/// Tables are encoded exactly as on disk and kept in a shared map, so the
/// serialization path is still exercised.
///
/// # Examples
///
/// ```
/// use noughts::adapters::InMemoryRepository;
/// use noughts::ports::ValueTableRepository;
/// use noughts::q_learning::ValueTable;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&ValueTable::new(), Path::new("table"))?;
/// assert!(repo.load(Path::new("table"))?.is_some());
/// assert!(repo.load(Path::new("other"))?.is_none());
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Check if a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }

    /// Store raw bytes at `path`, bypassing serialization.
    ///
    /// Lets tests plant corrupt data.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().insert(key, bytes);
    }
}

impl ValueTableRepository for InMemoryRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec(&SavedValueTable::from_table(table)).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize value table for in-memory storage".to_string(),
                message: e.to_string(),
            }
        })?;

        self.insert_raw(path, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<ValueTable>> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let Some(bytes) = storage.get(&key) else {
            return Ok(None);
        };

        let saved: SavedValueTable =
            rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize value table from in-memory storage".to_string(),
                message: e.to_string(),
            })?;
        saved.into_table().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardState;

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let mut table = ValueTable::new();
        table.values_mut(&BoardState::new())[4] = 0.25;

        let path = Path::new("test_table");
        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&table, path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        assert_eq!(repo.load(path).unwrap(), Some(table));
    }

    #[test]
    fn test_load_nonexistent_is_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_bytes_are_an_error() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(Path::new("bad"), vec![0xc1, 0x00, 0xff]);
        assert!(repo.load(Path::new("bad")).is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1
            .save(&ValueTable::new(), Path::new("shared"))
            .unwrap();

        assert!(repo2.load(Path::new("shared")).unwrap().is_some());
        assert_eq!(repo2.count(), 1);
    }
}
