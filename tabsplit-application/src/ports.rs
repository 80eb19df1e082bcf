use crate::{error::StoreError, model::Group};

/// Persists the current group between runs.
pub trait GroupStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Group>, StoreError>;

    fn save(&self, group: &Group) -> Result<(), StoreError>;

    /// Forgets the current group and everything recorded in it.
    fn clear(&self) -> Result<(), StoreError>;
}
