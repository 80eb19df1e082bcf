use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tabsplit_application::{ExpenseRecord, Group, GroupError};
use tabsplit_domain::Money;
use thiserror::Error;

pub const APP_VERSION: &str = "1.0";
pub const BACKUP_SOURCE: &str = "tabsplit";
const FILE_NAME_PREFIX: &str = "expense-splitter";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("backup does not contain a valid group name")]
    MissingGroupName,
    #[error("group is empty; add participants or expenses before exporting")]
    EmptyGroup,
    #[error("backup is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backup contains invalid data: {0}")]
    InvalidGroup(#[from] GroupError),
    #[error("failed to access backup file: {0}")]
    Io(#[from] io::Error),
}

/// Expense as it appears in a backup file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupExpense {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payer: String,
}

impl From<&ExpenseRecord> for BackupExpense {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            description: record.description.clone(),
            amount: record.amount.as_decimal(),
            payer: record.payer.clone(),
        }
    }
}

impl From<BackupExpense> for ExpenseRecord {
    fn from(expense: BackupExpense) -> Self {
        Self {
            description: expense.description,
            amount: Money::from_decimal(expense.amount),
            payer: expense.payer,
        }
    }
}

/// Portable export of a single group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBackup {
    #[serde(default)]
    pub group_name: Option<String>,
    pub participants: Vec<String>,
    pub expenses: Vec<BackupExpense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// What an import is about to replace the current group with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupPreview<'a> {
    pub group_name: &'a str,
    pub participant_count: usize,
    pub expense_count: usize,
    pub exported_at: Option<DateTime<Utc>>,
}

impl GroupBackup {
    pub fn from_group(group: &Group, exported_at: DateTime<Utc>) -> Result<Self, BackupError> {
        if group.is_empty() {
            return Err(BackupError::EmptyGroup);
        }

        Ok(Self {
            group_name: Some(group.name().to_owned()),
            participants: group.participants().to_vec(),
            expenses: group.expenses().iter().map(BackupExpense::from).collect(),
            exported_at: Some(exported_at),
            app_version: Some(APP_VERSION.to_owned()),
            source: Some(BACKUP_SOURCE.to_owned()),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, BackupError> {
        let backup: Self = serde_json::from_str(json)?;
        backup.checked_group_name()?;
        Ok(backup)
    }

    pub fn read_from(path: &Path) -> Result<Self, BackupError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the backup into `dir` under its canonical file name.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, BackupError> {
        let group_name = self.checked_group_name()?;
        let date = self.exported_at.unwrap_or_else(Utc::now).date_naive();
        let path = dir.join(export_file_name(group_name, date));

        fs::write(&path, self.to_json_pretty()?)?;
        tracing::info!(path = %path.display(), "exported group backup");
        Ok(path)
    }

    pub fn preview(&self) -> Result<BackupPreview<'_>, BackupError> {
        Ok(BackupPreview {
            group_name: self.checked_group_name()?,
            participant_count: self.participants.len(),
            expense_count: self.expenses.len(),
            exported_at: self.exported_at,
        })
    }

    pub fn into_group(self) -> Result<Group, BackupError> {
        let name = self.checked_group_name()?.to_owned();
        let expenses = self.expenses.into_iter().map(ExpenseRecord::from);
        Ok(Group::restore(&name, self.participants, expenses)?)
    }

    fn checked_group_name(&self) -> Result<&str, BackupError> {
        match self.group_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(BackupError::MissingGroupName),
        }
    }
}

/// `expense-splitter-<group>-<YYYY-MM-DD>.json`, whitespace runs in the group
/// name collapsed to `-` and lowercased.
pub fn export_file_name(group_name: &str, date: NaiveDate) -> String {
    let slug = group_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{FILE_NAME_PREFIX}-{slug}-{}.json", date.format("%Y-%m-%d"))
}
