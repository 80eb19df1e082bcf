#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    BalanceSheet, Expense, Money, ParticipantBalance, ParticipantId, Transaction,
};
pub use services::{BalanceCalculator, DEFAULT_TOLERANCE, SettlementCalculator};
