use crate::{
    model::{Expense, Money, ParticipantId, Transaction},
    services::BalanceCalculator,
};

/// Balances within this distance of zero count as settled.
pub const DEFAULT_TOLERANCE: Money = Money::from_cents(1);

struct Position<'a> {
    id: ParticipantId<'a>,
    remaining: Money,
}

/// Settlement calculation service
///
/// Matches the largest creditor against the largest debtor until one side
/// runs out. Stateless: every call recomputes balances from its inputs.
#[derive(Clone, Copy, Debug)]
pub struct SettlementCalculator {
    tolerance: Money,
}

impl Default for SettlementCalculator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SettlementCalculator {
    pub fn with_tolerance(tolerance: Money) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Calculate who pays whom so that everyone ends up at an even share.
    ///
    /// Assumes every payer is listed in `participants` and every amount is
    /// positive; the caller validates both.
    ///
    /// # Returns
    /// Transactions in emission order, each rounded to cents. Transactions
    /// that round to zero are dropped.
    pub fn calculate<'a>(
        &self,
        participants: &[ParticipantId<'a>],
        expenses: &[Expense<'_>],
    ) -> Vec<Transaction<'a>> {
        if participants.is_empty() || expenses.is_empty() {
            return Vec::new();
        }

        let sheet = BalanceCalculator.calculate(participants, expenses);
        tracing::debug!(
            total = %sheet.total,
            share = %sheet.share,
            participants = participants.len(),
            "computed balances"
        );

        let mut creditors: Vec<Position<'a>> = Vec::new();
        let mut debtors: Vec<Position<'a>> = Vec::new();
        for entry in &sheet.balances {
            if entry.balance > self.tolerance {
                creditors.push(Position {
                    id: entry.id,
                    remaining: entry.balance,
                });
            } else if entry.balance < -self.tolerance {
                debtors.push(Position {
                    id: entry.id,
                    remaining: -entry.balance,
                });
            }
        }

        // `sort_by` is stable: equal amounts keep participant-list order.
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

        let mut transactions = Vec::with_capacity(creditors.len() + debtors.len());
        let (mut i, mut j) = (0, 0);

        while i < creditors.len() && j < debtors.len() {
            let creditor = &mut creditors[i];
            let debtor = &mut debtors[j];
            let matched = creditor.remaining.min(debtor.remaining);

            let amount = matched.round_to_cents();
            if amount.is_zero() {
                tracing::debug!(
                    from = debtor.id,
                    to = creditor.id,
                    %matched,
                    "dropping transaction that rounds to zero"
                );
            } else {
                transactions.push(Transaction {
                    from: debtor.id,
                    to: creditor.id,
                    amount,
                });
            }

            creditor.remaining -= matched;
            debtor.remaining -= matched;

            if self.is_settled(creditor.remaining) {
                i += 1;
            }
            if self.is_settled(debtor.remaining) {
                j += 1;
            }
        }

        tracing::debug!(count = transactions.len(), "settlement computed");
        transactions
    }

    // A zero tolerance still has to retire exhausted positions.
    fn is_settled(&self, remaining: Money) -> bool {
        remaining < self.tolerance || remaining.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> SettlementCalculator {
        SettlementCalculator::default()
    }

    fn expenses<'a>(records: &[(i64, &'a str)]) -> Vec<Expense<'a>> {
        records
            .iter()
            .map(|&(amount, payer)| Expense::new("", Money::from_i64(amount), payer))
            .collect()
    }

    #[rstest]
    #[case::single_payer_two_people(
        &["Alice", "Bob"],
        &[(100, "Alice")],
        vec![("Bob", "Alice", Money::from_i64(50))]
    )]
    #[case::single_payer_three_people(
        &["A", "B", "C"],
        &[(90, "A")],
        vec![("B", "A", Money::from_i64(30)), ("C", "A", Money::from_i64(30))]
    )]
    #[case::already_even(
        &["A", "B"],
        &[(50, "A"), (50, "B")],
        vec![]
    )]
    #[case::settled_participant_is_skipped(
        &["A", "B", "C"],
        &[(100, "A"), (50, "B")],
        vec![("C", "A", Money::from_i64(50))]
    )]
    #[case::largest_debtor_pays_first(
        &["A", "B", "C", "D"],
        &[(100, "A"), (60, "B"), (40, "C")],
        vec![
            ("D", "A", Money::from_i64(50)),
            ("C", "B", Money::from_i64(10)),
        ]
    )]
    #[case::debtor_split_across_creditors(
        &["A", "B", "C", "D"],
        &[(80, "A"), (40, "B")],
        vec![
            ("C", "A", Money::from_i64(30)),
            ("D", "A", Money::from_i64(20)),
            ("D", "B", Money::from_i64(10)),
        ]
    )]
    #[case::creditor_paid_by_several(
        &["A", "B", "C", "D"],
        &[(120, "A"), (20, "B")],
        vec![
            ("C", "A", Money::from_i64(35)),
            ("D", "A", Money::from_i64(35)),
            ("B", "A", Money::from_i64(15)),
        ]
    )]
    #[case::ties_keep_participant_order(
        &["Zoe", "Yann", "Xavi"],
        &[(30, "Xavi"), (30, "Zoe")],
        vec![("Yann", "Zoe", Money::from_i64(10)), ("Yann", "Xavi", Money::from_i64(10))]
    )]
    fn settlement_calculator_cases(
        calculator: SettlementCalculator,
        #[case] participants: &[&str],
        #[case] records: &[(i64, &str)],
        #[case] expected: Vec<(&str, &str, Money)>,
    ) {
        let expenses = expenses(records);
        let result = calculator.calculate(participants, &expenses);

        let expected: Vec<Transaction> = expected
            .into_iter()
            .map(|(from, to, amount)| Transaction { from, to, amount })
            .collect();
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::no_participants(&[], &[(100, "A")])]
    #[case::no_expenses(&["A", "B"], &[])]
    #[case::nothing_at_all(&[], &[])]
    fn empty_inputs_produce_no_transactions(
        calculator: SettlementCalculator,
        #[case] participants: &[&str],
        #[case] records: &[(i64, &str)],
    ) {
        let expenses = expenses(records);
        assert!(calculator.calculate(participants, &expenses).is_empty());
    }

    #[rstest]
    fn uneven_thirds_round_to_cents(calculator: SettlementCalculator) {
        let expenses = expenses(&[(100, "A")]);
        let result = calculator.calculate(&["A", "B", "C"], &expenses);

        assert_eq!(
            result,
            vec![
                Transaction {
                    from: "B",
                    to: "A",
                    amount: Money::new(3333, 2),
                },
                Transaction {
                    from: "C",
                    to: "A",
                    amount: Money::new(3333, 2),
                },
            ]
        );
    }

    #[rstest]
    fn balances_within_tolerance_are_settled(calculator: SettlementCalculator) {
        let expenses = vec![
            Expense::new("a", Money::new(1000, 2), "A"),
            Expense::new("b", Money::new(1001, 2), "B"),
        ];
        assert!(calculator.calculate(&["A", "B"], &expenses).is_empty());
    }

    #[test]
    fn wider_tolerance_ignores_small_balances() {
        let calculator = SettlementCalculator::with_tolerance(Money::from_i64(5));
        let expenses = expenses(&[(104, "A"), (100, "B")]);
        assert!(calculator.calculate(&["A", "B"], &expenses).is_empty());
    }

    #[test]
    fn zero_tolerance_drops_sub_cent_transactions() {
        let calculator = SettlementCalculator::with_tolerance(Money::ZERO);
        let expenses = vec![
            Expense::new("a", Money::new(1002, 3), "A"),
            Expense::new("b", Money::from_i64(1), "B"),
        ];
        let result = calculator.calculate(&["A", "B"], &expenses);
        assert!(result.iter().all(|transaction| transaction.amount.is_positive()));
        assert!(result.is_empty());
    }

    #[rstest]
    fn repeated_calls_are_identical(calculator: SettlementCalculator) {
        let expenses = expenses(&[(73, "A"), (12, "B"), (5, "C")]);
        let participants = ["A", "B", "C", "D", "E"];
        let first = calculator.calculate(&participants, &expenses);
        let second = calculator.calculate(&participants, &expenses);
        assert_eq!(first, second);
    }
}
