#![warn(clippy::uninlined_format_args)]

pub mod backup_presenter;
pub mod error_presenter;
pub mod settlement_presenter;
pub mod summary_presenter;

pub use backup_presenter::BackupPresenter;
pub use error_presenter::{format_backup_error, format_group_error, format_store_error};
pub use settlement_presenter::SettlementPresenter;
pub use summary_presenter::SummaryPresenter;

use tabsplit_domain::Money;

pub const DEFAULT_CURRENCY: &str = "€";

/// `€12.50`
pub fn format_money(amount: Money, currency: &str) -> String {
    format!("{currency}{amount}")
}
