//! MessagePack implementation of the value table repository.
//!
//! This adapter implements the ValueTableRepository port using rmp_serde for
//! compact binary serialization.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind},
    path::{Path, PathBuf},
};

use crate::{
    Result, error::Error, ports::ValueTableRepository, q_learning::SavedValueTable,
    q_learning::ValueTable,
};

/// MessagePack-based value table repository.
///
/// Saves go to a sibling `*.tmp` file that is then renamed over the target,
/// so an interrupted save leaves the previous table intact.
///
/// # Examples
///
/// ```no_run
/// use noughts::adapters::MsgPackRepository;
/// use noughts::ports::ValueTableRepository;
/// use noughts::q_learning::ValueTable;
/// use std::path::Path;
///
/// let repo = MsgPackRepository::new();
/// repo.save(&ValueTable::new(), Path::new("q_table.msgpack"))?;
/// let loaded = repo.load(Path::new("q_table.msgpack"))?;
/// assert!(loaded.is_some());
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }

    fn staging_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_staging(table: &ValueTable, staging: &Path) -> Result<()> {
        let file = File::create(staging).map_err(|source| Error::Io {
            operation: format!("create file {staging:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, &SavedValueTable::from_table(table)).map_err(
            |e| Error::SerializationContext {
                operation: "serialize value table to MessagePack".to_string(),
                message: e.to_string(),
            },
        )?;

        let file = writer.into_inner().map_err(|e| Error::Io {
            operation: format!("flush file {staging:?}"),
            source: e.into_error(),
        })?;
        file.sync_all().map_err(|source| Error::Io {
            operation: format!("sync file {staging:?}"),
            source,
        })
    }
}

impl ValueTableRepository for MsgPackRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let staging = Self::staging_path(path);
        let replaced = Self::write_staging(table, &staging).and_then(|()| {
            fs::rename(&staging, path).map_err(|source| Error::Io {
                operation: format!("replace file {path:?}"),
                source,
            })
        });
        if let Err(e) = replaced {
            // Fails harmlessly when the staging file was never created
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        log::info!("{:<32}{}", "saved value table", path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<ValueTable>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                log::info!("{:<32}{}", "no saved value table", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("open file {path:?}"),
                    source,
                });
            }
        };

        let saved: SavedValueTable = rmp_serde::decode::from_read(BufReader::new(file))
            .map_err(|e| Error::SerializationContext {
                operation: "deserialize value table from MessagePack".to_string(),
                message: e.to_string(),
            })?;
        let table = saved.into_table()?;

        log::info!(
            "{:<32}{} ({} states)",
            "loaded value table",
            path.display(),
            table.len()
        );
        Ok(Some(table))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::BoardState;

    fn sample_table() -> ValueTable {
        let mut table = ValueTable::new();
        table.insert(
            BoardState::from_string("XX.O.....").unwrap(),
            [0.0, 0.0, 0.19, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        );
        table.insert(BoardState::new(), [0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0]);
        table
    }

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("q_table.msgpack");

        let repo = MsgPackRepository::new();
        let table = sample_table();

        repo.save(&table, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, Some(table));
        assert!(!MsgPackRepository::staging_path(&file_path).exists());
    }

    #[test]
    fn test_save_overwrites_previous_table() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("q_table.msgpack");
        let repo = MsgPackRepository::new();

        repo.save(&sample_table(), &file_path).unwrap();
        repo.save(&ValueTable::new(), &file_path).unwrap();

        assert_eq!(repo.load(&file_path).unwrap(), Some(ValueTable::new()));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new();
        let result = repo.load(&temp_dir.path().join("absent.msgpack"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("corrupt.msgpack");
        std::fs::write(&file_path, b"definitely not msgpack").unwrap();

        let repo = MsgPackRepository::new();
        assert!(repo.load(&file_path).is_err());
    }

    #[test]
    fn test_failed_replace_removes_staging_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A non-empty directory cannot be replaced by a file
        let file_path = temp_dir.path().join("q_table.msgpack");
        std::fs::create_dir(&file_path).unwrap();
        std::fs::write(file_path.join("keep"), b"x").unwrap();

        let repo = MsgPackRepository::new();
        assert!(repo.save(&sample_table(), &file_path).is_err());
        assert!(!MsgPackRepository::staging_path(&file_path).exists());
        assert!(file_path.join("keep").exists());
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.save(
            &sample_table(),
            Path::new("/invalid_dir_12345/q_table.msgpack"),
        );
        assert!(result.is_err());
    }
}
