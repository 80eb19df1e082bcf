use proptest::prelude::*;
use tabsplit_application::{Group, GroupProcessor, GroupStore, SettlementOutcome, StoreError};
use tabsplit_domain::Money;

const NAMES: [&str; 5] = ["Ana", "Bea", "Carlos", "Dani", "Eva"];

fn build_group(member_count: usize, records: &[(usize, i64)]) -> Group {
    let mut group = Group::new("Viaje").expect("valid group name");
    for name in &NAMES[..member_count] {
        group.add_participant(name).expect("unique participant");
    }
    for (idx, &(payer_idx, cents)) in records.iter().enumerate() {
        group
            .add_expense(
                &format!("gasto {idx}"),
                Money::new(cents, 2),
                NAMES[payer_idx % member_count],
            )
            .expect("valid expense");
    }
    group
}

proptest! {
    #[test]
    fn summary_total_matches_member_spending(
        member_count in 1usize..=5,
        records in prop::collection::vec((0usize..5, 1i64..=50_000), 0..=20),
    ) {
        let group = build_group(member_count, &records);
        let summary = group.summary();

        let spent: Money = summary.spending.iter().map(|member| member.paid).sum();
        prop_assert_eq!(summary.total, spent);
        prop_assert_eq!(summary.participant_count, member_count);
        prop_assert_eq!(summary.expense_count, records.len());
    }

    #[test]
    fn removal_leaves_only_known_payers(
        member_count in 1usize..=5,
        records in prop::collection::vec((0usize..5, 1i64..=50_000), 0..=20),
        removed_idx in 0usize..5,
    ) {
        let mut group = build_group(member_count, &records);
        let removed_name = NAMES[removed_idx % member_count];
        let before = group.expenses().len();

        let removed = group.remove_participant(removed_name).expect("known participant");

        prop_assert!(removed.iter().all(|expense| expense.payer == removed_name));
        prop_assert_eq!(removed.len() + group.expenses().len(), before);
        prop_assert!(group.expenses().iter().all(|expense| group.has_participant(&expense.payer)));
    }

    #[test]
    fn restored_group_settles_identically(
        member_count in 1usize..=5,
        records in prop::collection::vec((0usize..5, 1i64..=50_000), 0..=20),
    ) {
        let group = build_group(member_count, &records);
        let restored = Group::restore(
            group.name(),
            group.participants(),
            group.expenses().iter().cloned(),
        )
        .expect("restore accepts valid data");

        prop_assert_eq!(&restored, &group);

        let processor = GroupProcessor::new(&NullStore);
        let outcome = processor.settle(&restored);
        if records.is_empty() {
            prop_assert_eq!(outcome, SettlementOutcome::NoExpenses);
        } else {
            prop_assert_eq!(outcome, processor.settle(&group));
        }
    }
}

struct NullStore;

impl GroupStore for NullStore {
    fn load(&self) -> Result<Option<Group>, StoreError> {
        Ok(None)
    }

    fn save(&self, _group: &Group) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
