use crate::format_money;
use std::fmt::Write as _;
use tabsplit_application::SettlementOutcome;
use tabsplit_domain::Transaction;
use tabsplit_i18n as i18n;

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(outcome: &SettlementOutcome<'_>, currency: &str) -> String {
        match outcome {
            SettlementOutcome::NoParticipants => format!("{}\n", i18n::NO_PARTICIPANTS_IN_GROUP),
            SettlementOutcome::NoExpenses => format!("{}\n", i18n::NO_EXPENSES),
            SettlementOutcome::AllSettled => format!("{}\n", i18n::ALL_SETTLED),
            SettlementOutcome::Transactions(transactions) => {
                Self::render_transactions(transactions, currency)
            }
        }
    }

    pub fn render_transactions(transactions: &[Transaction<'_>], currency: &str) -> String {
        let mut reply = String::with_capacity(64 * transactions.len());
        for transaction in transactions {
            let _ = writeln!(
                &mut reply,
                "{} {}",
                i18n::owes(transaction.from, transaction.to),
                format_money(transaction.amount, currency)
            );
        }
        reply
    }
}
