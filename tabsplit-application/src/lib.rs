#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod group_processor;
pub mod model;
pub mod ports;

pub use error::{GroupError, StoreError};
pub use group_processor::GroupProcessor;
pub use model::{
    ExpenseRecord, Group, GroupSummary, MAX_EXPENSE_AMOUNT, MemberSpending, SettlementOutcome,
};
pub use ports::GroupStore;
