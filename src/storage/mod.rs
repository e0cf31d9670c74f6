pub mod memory;
pub mod port;
pub mod sqlite;

use crate::prelude::{AppError, Contact, ContactFields};
use std::fs;
use std::path::{Path, PathBuf};

pub use memory::MemStorage;
pub use sqlite::SqliteStorage;

pub const DEFAULT_DB_PATH: &str = "./.instance/contacts.db";

/// Durable home of every contact. Each call is atomic on its own.
pub trait ContactStore {
    fn create(&mut self, fields: &ContactFields) -> Result<i64, AppError>;

    fn read(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// All contacts in ascending id order.
    fn read_all(&self) -> Result<Vec<Contact>, AppError>;

    /// Returns `false` when no contact has this id.
    fn update(&mut self, id: i64, fields: &ContactFields) -> Result<bool, AppError>;

    /// Returns `false` when no contact has this id.
    fn delete(&mut self, id: i64) -> Result<bool, AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Sqlite,
    Mem,
}

impl StorageMediums {
    pub fn is_sqlite(&self) -> bool {
        matches!(self, StorageMediums::Sqlite)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_sqlite() { "sqlite" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StorageMediums::Sqlite),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{}'",
                str
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub medium: StorageMediums,
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn new(medium: &str, path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self {
            medium: StorageMediums::from(medium)?,
            path: path.into(),
        })
    }
}

pub fn open_storage(config: &StorageConfig) -> Result<Box<dyn ContactStore>, AppError> {
    match config.medium {
        StorageMediums::Sqlite => Ok(Box::new(SqliteStorage::open(&config.path)?)),
        StorageMediums::Mem => Ok(Box::new(MemStorage::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_storage_mediums() -> Result<(), AppError> {
        assert!(StorageMediums::from("sqlite")?.is_sqlite());
        assert!(StorageMediums::from("SQLite")?.is_sqlite());
        assert!(StorageMediums::from("mem")?.is_mem());
        assert_eq!(StorageMediums::from("mem")?.is_which(), "mem");

        for unknown in ["json", "txt", "db"] {
            let err = StorageMediums::from(unknown).unwrap_err();
            assert!(err.is_validation());
        }
        Ok(())
    }

    #[test]
    fn opens_configured_medium() -> Result<(), AppError> {
        let dir = tempdir()?;
        let config = StorageConfig::new("sqlite", dir.path().join("nested/contacts.db"))?;

        let store = open_storage(&config)?;
        assert_eq!(store.get_medium(), "sqlite");
        assert!(dir.path().join("nested").is_dir());

        let store = open_storage(&StorageConfig::new("mem", "unused.db")?)?;
        assert_eq!(store.get_medium(), "mem");
        Ok(())
    }
}
