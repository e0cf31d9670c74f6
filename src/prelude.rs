pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactFields},
    manager::{ContactManager, ImportSummary},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore, MemStorage, SqliteStorage, StorageConfig, StorageMediums,
    create_file_parent, open_storage, port,
};
