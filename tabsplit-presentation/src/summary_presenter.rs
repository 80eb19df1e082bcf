use crate::format_money;
use std::fmt::Write as _;
use tabsplit_application::{ExpenseRecord, GroupSummary};
use tabsplit_i18n as i18n;

pub struct SummaryPresenter;

impl SummaryPresenter {
    pub fn render(summary: &GroupSummary<'_>, currency: &str) -> String {
        let mut reply = String::with_capacity(256);

        let _ = writeln!(&mut reply, "{}: {}", i18n::GROUP, summary.group_name);
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            i18n::TOTAL_SPENT,
            format_money(summary.total, currency)
        );
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            i18n::PARTICIPANTS,
            summary.participant_count
        );
        let _ = writeln!(&mut reply, "{}: {}", i18n::EXPENSES, summary.expense_count);
        let _ = writeln!(&mut reply, "{}:", i18n::SPENDING_PER_MEMBER);

        if summary.spending.is_empty() {
            let _ = writeln!(&mut reply, "  {}", i18n::NO_PARTICIPANTS);
            return reply;
        }

        let width = summary
            .spending
            .iter()
            .map(|member| member.name.chars().count())
            .max()
            .unwrap_or(0);
        for member in &summary.spending {
            let _ = writeln!(
                &mut reply,
                "  {:<width$}  {}",
                member.name,
                format_money(member.paid, currency)
            );
        }

        reply
    }

    /// Numbered from 1, the way commands refer to them.
    pub fn render_expenses(expenses: &[ExpenseRecord], currency: &str) -> String {
        if expenses.is_empty() {
            return format!("{}\n", i18n::NO_EXPENSES);
        }

        let mut reply = String::with_capacity(64 * expenses.len());
        for (index, expense) in expenses.iter().enumerate() {
            let _ = writeln!(
                &mut reply,
                "#{} {}: {}",
                index + 1,
                expense.description,
                i18n::paid(&expense.payer, format_money(expense.amount, currency))
            );
        }
        reply
    }
}
