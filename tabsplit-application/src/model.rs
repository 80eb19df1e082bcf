use crate::error::GroupError;
use tabsplit_domain::{BalanceCalculator, Expense, Money, Transaction};

/// Upper bound for a single expense, 10,000,000.00.
pub const MAX_EXPENSE_AMOUNT: Money = Money::from_cents(1_000_000_000);

/// Owned form of an expense, as the group stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub description: String,
    pub amount: Money,
    pub payer: String,
}

impl ExpenseRecord {
    pub fn as_expense(&self) -> Expense<'_> {
        Expense::new(&self.description, self.amount, &self.payer)
    }
}

/// The group being tracked: its name, participants and recorded expenses.
///
/// Every mutation validates its input, so a `Group` always satisfies the
/// preconditions of the settlement calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    participants: Vec<String>,
    expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSpending<'a> {
    pub name: &'a str,
    pub paid: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary<'a> {
    pub group_name: &'a str,
    pub total: Money,
    pub participant_count: usize,
    pub expense_count: usize,
    pub spending: Vec<MemberSpending<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementOutcome<'a> {
    NoParticipants,
    NoExpenses,
    /// Every balance is within tolerance of zero.
    AllSettled,
    Transactions(Vec<Transaction<'a>>),
}

impl Group {
    pub fn new(name: &str) -> Result<Self, GroupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupError::EmptyGroupName);
        }

        Ok(Self {
            name: name.to_owned(),
            participants: Vec::new(),
            expenses: Vec::new(),
        })
    }

    /// Rebuilds a group from previously exported data, applying the same
    /// rules as interactive edits.
    pub fn restore<P, E>(name: &str, participants: P, expenses: E) -> Result<Self, GroupError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        E: IntoIterator<Item = ExpenseRecord>,
    {
        let mut group = Self::new(name)?;
        for participant in participants {
            group.add_participant(participant.as_ref())?;
        }
        for record in expenses {
            group.add_expense(&record.description, record.amount, &record.payer)?;
        }
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn participant_ids(&self) -> Vec<&str> {
        self.participants.iter().map(String::as_str).collect()
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn domain_expenses(&self) -> Vec<Expense<'_>> {
        self.expenses.iter().map(ExpenseRecord::as_expense).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.expenses.is_empty()
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|participant| participant == name)
    }

    /// Names are trimmed; uniqueness ignores case.
    pub fn add_participant(&mut self, name: &str) -> Result<(), GroupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupError::EmptyParticipantName);
        }

        let lowered = name.to_lowercase();
        if self
            .participants
            .iter()
            .any(|participant| participant.to_lowercase() == lowered)
        {
            return Err(GroupError::DuplicateParticipant(name.to_owned()));
        }

        self.participants.push(name.to_owned());
        Ok(())
    }

    /// Removes the participant together with every expense they paid.
    pub fn remove_participant(&mut self, name: &str) -> Result<Vec<ExpenseRecord>, GroupError> {
        let Some(index) = self
            .participants
            .iter()
            .position(|participant| participant == name)
        else {
            return Err(GroupError::UnknownParticipant(name.to_owned()));
        };

        let removed_name = self.participants.remove(index);
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.expenses)
            .into_iter()
            .partition(|expense| expense.payer == removed_name);
        self.expenses = kept;

        if !removed.is_empty() {
            tracing::info!(
                participant = %removed_name,
                expenses = removed.len(),
                "removed participant together with their expenses"
            );
        }
        Ok(removed)
    }

    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Money,
        payer: &str,
    ) -> Result<(), GroupError> {
        let record = self.validate_expense(description, amount, payer)?;
        self.expenses.push(record);
        Ok(())
    }

    pub fn update_expense(
        &mut self,
        index: usize,
        description: &str,
        amount: Money,
        payer: &str,
    ) -> Result<(), GroupError> {
        let len = self.expenses.len();
        if index >= len {
            return Err(GroupError::ExpenseIndexOutOfRange { index, len });
        }

        let record = self.validate_expense(description, amount, payer)?;
        self.expenses[index] = record;
        Ok(())
    }

    pub fn summary(&self) -> GroupSummary<'_> {
        let participants = self.participant_ids();
        let expenses = self.domain_expenses();
        let sheet = BalanceCalculator.calculate(&participants, &expenses);

        GroupSummary {
            group_name: &self.name,
            total: expenses.iter().map(|expense| expense.amount).sum(),
            participant_count: self.participants.len(),
            expense_count: self.expenses.len(),
            spending: sheet
                .balances
                .iter()
                .map(|entry| MemberSpending {
                    name: entry.id,
                    paid: entry.paid,
                })
                .collect(),
        }
    }

    fn validate_expense(
        &self,
        description: &str,
        amount: Money,
        payer: &str,
    ) -> Result<ExpenseRecord, GroupError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GroupError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(GroupError::NonPositiveAmount(amount));
        }
        if amount > MAX_EXPENSE_AMOUNT {
            return Err(GroupError::AmountTooLarge(amount));
        }
        if amount.round_to_cents() != amount {
            return Err(GroupError::SubCentAmount(amount));
        }
        if self.participants.is_empty() {
            return Err(GroupError::NoParticipants);
        }
        if !self.has_participant(payer) {
            return Err(GroupError::UnknownPayer(payer.to_owned()));
        }

        Ok(ExpenseRecord {
            description: description.to_owned(),
            amount,
            payer: payer.to_owned(),
        })
    }
}
