use tabsplit_domain::Money;
use thiserror::Error;

/// Validation failures raised before anything reaches the settlement core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("group name must not be empty")]
    EmptyGroupName,
    #[error("participant name must not be empty")]
    EmptyParticipantName,
    #[error("participant '{0}' already exists")]
    DuplicateParticipant(String),
    #[error("participant '{0}' does not exist")]
    UnknownParticipant(String),
    #[error("expense description must not be empty")]
    EmptyDescription,
    #[error("expense amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),
    #[error("expense amount {0} exceeds the maximum of {max}", max = crate::model::MAX_EXPENSE_AMOUNT)]
    AmountTooLarge(Money),
    #[error("expense amount {0} has fractions of a cent")]
    SubCentAmount(Money),
    #[error("payer '{0}' is not a participant")]
    UnknownPayer(String),
    #[error("add participants before recording expenses")]
    NoParticipants,
    #[error("expense #{index} does not exist ({len} recorded)")]
    ExpenseIndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access group store: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored group data is malformed: {0}")]
    Malformed(String),
    #[error("no group selected; create or import one first")]
    NoCurrentGroup,
    #[error(transparent)]
    InvalidGroup(#[from] GroupError),
}
