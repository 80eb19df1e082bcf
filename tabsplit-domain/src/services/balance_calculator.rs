use crate::model::{BalanceSheet, Expense, Money, ParticipantBalance, ParticipantId};
use indexmap::IndexMap;

/// Computes each participant's net position against an even share of the total.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Balances come back in participant-list order.
    ///
    /// An expense whose payer is not listed still counts toward the total,
    /// but nobody is credited for it.
    pub fn calculate<'a>(
        &self,
        participants: &[ParticipantId<'a>],
        expenses: &[Expense<'_>],
    ) -> BalanceSheet<'a> {
        if participants.is_empty() {
            return BalanceSheet::empty();
        }

        let mut paid: IndexMap<&'a str, Money> = participants
            .iter()
            .map(|&participant| (participant, Money::ZERO))
            .collect();

        for expense in expenses {
            match paid.get_mut(expense.payer) {
                Some(amount) => *amount += expense.amount,
                None => tracing::debug!(
                    payer = expense.payer,
                    amount = %expense.amount,
                    "expense payer is not a participant"
                ),
            }
        }

        let total: Money = expenses.iter().map(|expense| expense.amount).sum();
        let share = total / participants.len();

        let balances = participants
            .iter()
            .map(|&id| {
                let paid = paid.get(id).copied().unwrap_or_default();
                ParticipantBalance {
                    id,
                    paid,
                    balance: paid - share,
                }
            })
            .collect();

        BalanceSheet {
            total,
            share,
            balances,
        }
    }
}
