use crate::backup::{APP_VERSION, BackupExpense};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tabsplit_application::{ExpenseRecord, Group, GroupStore, StoreError};

/// On-disk shape of the current group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    #[serde(default)]
    pub current_group: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<BackupExpense>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_version: Option<String>,
}

impl SavedState {
    pub fn empty(last_modified: DateTime<Utc>) -> Self {
        Self {
            current_group: None,
            participants: Vec::new(),
            expenses: Vec::new(),
            last_modified: Some(last_modified),
            app_version: Some(APP_VERSION.to_owned()),
        }
    }

    pub fn from_group(group: &Group, last_modified: DateTime<Utc>) -> Self {
        Self {
            current_group: Some(group.name().to_owned()),
            participants: group.participants().to_vec(),
            expenses: group.expenses().iter().map(BackupExpense::from).collect(),
            last_modified: Some(last_modified),
            app_version: Some(APP_VERSION.to_owned()),
        }
    }

    pub fn into_group(self) -> Result<Option<Group>, StoreError> {
        let Some(name) = self.current_group else {
            return Ok(None);
        };
        let expenses = self.expenses.into_iter().map(ExpenseRecord::from);
        Ok(Some(Group::restore(&name, self.participants, expenses)?))
    }
}

/// Keeps the current group in a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_state(&self, state: &SavedState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl GroupStore for JsonFileStore {
    fn load(&self) -> Result<Option<Group>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<SavedState>(&json) {
            Ok(state) => state.into_group(),
            Err(err) => {
                // Unreadable state is discarded rather than blocking every later run.
                tracing::error!(
                    path = %self.path.display(),
                    error = %err,
                    "saved state is corrupt; resetting"
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&self, group: &Group) -> Result<(), StoreError> {
        self.write_state(&SavedState::from_group(group, Utc::now()))?;
        tracing::debug!(path = %self.path.display(), group = group.name(), "saved group");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.write_state(&SavedState::empty(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tabsplit_domain::Money;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        store: JsonFileStore,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("state.json"));
        Fixture { _dir: dir, store }
    }

    fn trip() -> Group {
        let mut group = Group::new("Trip").expect("valid group name");
        group.add_participant("Alice").expect("unique participant");
        group.add_participant("Bob").expect("unique participant");
        group
            .add_expense("fuel", Money::new(6075, 2), "Bob")
            .expect("valid expense");
        group
    }

    #[rstest]
    fn missing_file_means_no_group(fixture: Fixture) {
        assert!(fixture.store.load().expect("load succeeds").is_none());
    }

    #[rstest]
    fn saved_group_loads_back(fixture: Fixture) {
        let group = trip();
        fixture.store.save(&group).expect("save succeeds");

        let loaded = fixture.store.load().expect("load succeeds");
        assert_eq!(loaded, Some(group));
    }

    #[rstest]
    #[case::one_cent(Money::new(1, 2))]
    #[case::limit(tabsplit_application::MAX_EXPENSE_AMOUNT)]
    #[case::just_below_limit(Money::new(999_999_999, 2))]
    fn cent_amounts_survive_reload(fixture: Fixture, #[case] amount: Money) {
        let mut group = trip();
        group
            .add_expense("extra", amount, "Alice")
            .expect("valid expense");
        fixture.store.save(&group).expect("save succeeds");

        let loaded = fixture
            .store
            .load()
            .expect("load succeeds")
            .expect("group present");
        assert_eq!(loaded.expenses()[1].amount, amount);
    }

    #[rstest]
    fn clear_forgets_group(fixture: Fixture) {
        fixture.store.save(&trip()).expect("save succeeds");
        fixture.store.clear().expect("clear succeeds");

        assert!(fixture.store.load().expect("load succeeds").is_none());
    }

    #[rstest]
    fn corrupt_state_is_reset(fixture: Fixture) {
        fs::write(fixture.store.path(), "{not json").expect("write succeeds");

        assert!(fixture.store.load().expect("load succeeds").is_none());

        let json = fs::read_to_string(fixture.store.path()).expect("state rewritten");
        let state: SavedState = serde_json::from_str(&json).expect("valid state");
        assert_eq!(state.current_group, None);
    }

    #[rstest]
    fn browser_state_without_lists_loads(fixture: Fixture) {
        fs::write(fixture.store.path(), r#"{"currentGroup": "Piso"}"#).expect("write succeeds");

        let group = fixture
            .store
            .load()
            .expect("load succeeds")
            .expect("group present");
        assert_eq!(group.name(), "Piso");
        assert!(group.is_empty());
    }
}
