use crate::{
    error::{GroupError, StoreError},
    model::{Group, SettlementOutcome},
    ports::GroupStore,
};
use tabsplit_domain::SettlementCalculator;

/// Use cases over the current group, backed by a [`GroupStore`].
#[derive(Clone, Copy)]
pub struct GroupProcessor<'a> {
    store: &'a dyn GroupStore,
    calculator: SettlementCalculator,
}

impl<'a> GroupProcessor<'a> {
    pub fn new(store: &'a dyn GroupStore) -> Self {
        Self::with_calculator(store, SettlementCalculator::default())
    }

    pub fn with_calculator(store: &'a dyn GroupStore, calculator: SettlementCalculator) -> Self {
        Self { store, calculator }
    }

    pub fn current_group(&self) -> Result<Option<Group>, StoreError> {
        self.store.load()
    }

    /// Creates a fresh group and makes it the current one.
    pub fn create_group(&self, name: &str) -> Result<Group, StoreError> {
        let group = Group::new(name)?;
        self.store.save(&group)?;
        tracing::info!(group = group.name(), "created group");
        Ok(group)
    }

    /// Applies `edit` to the current group and saves the result.
    pub fn edit_group<T, F>(&self, edit: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Group) -> Result<T, GroupError>,
    {
        let Some(mut group) = self.store.load()? else {
            return Err(StoreError::NoCurrentGroup);
        };
        let output = edit(&mut group)?;
        self.store.save(&group)?;
        Ok(output)
    }

    /// Replaces whatever group was current with `group`.
    pub fn replace_group(&self, group: &Group) -> Result<(), StoreError> {
        self.store.save(group)?;
        tracing::info!(
            group = group.name(),
            participants = group.participants().len(),
            expenses = group.expenses().len(),
            "replaced current group"
        );
        Ok(())
    }

    pub fn delete_group(&self) -> Result<(), StoreError> {
        self.store.clear()
    }

    pub fn settle<'g>(&self, group: &'g Group) -> SettlementOutcome<'g> {
        if group.participants().is_empty() {
            return SettlementOutcome::NoParticipants;
        }
        if group.expenses().is_empty() {
            return SettlementOutcome::NoExpenses;
        }

        let participants = group.participant_ids();
        let expenses = group.domain_expenses();
        let transactions = self.calculator.calculate(&participants, &expenses);

        if transactions.is_empty() {
            SettlementOutcome::AllSettled
        } else {
            SettlementOutcome::Transactions(transactions)
        }
    }
}
