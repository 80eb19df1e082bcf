#![warn(clippy::uninlined_format_args)]

pub mod backup;
pub mod store;

pub use backup::{
    APP_VERSION, BACKUP_SOURCE, BackupError, BackupExpense, BackupPreview, GroupBackup,
    export_file_name,
};
pub use store::{JsonFileStore, SavedState};
