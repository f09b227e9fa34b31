use chrono::NaiveDate;
use ledger_core::domain::{Frequency, Recurrence, Transaction, TransactionKind};
use ledger_core::errors::LedgerError;
use ledger_core::ledger::{expand_recurrence, expand_recurrence_capped};
use rust_decimal_macros::dec;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed_on(start: NaiveDate, rule: Recurrence) -> Transaction {
    Transaction::new("Rent", TransactionKind::Payment, dec!(950), Uuid::new_v4(), start)
        .with_recurrence(rule)
}

#[test]
fn monthly_three_occurrences_emits_two_rows() {
    // The seed is occurrence #1, so occurrences = 3 yields Feb and Mar only.
    let seed = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Monthly).with_occurrences(3),
    );
    let rows = expand_recurrence(&seed).unwrap();
    let dates: Vec<_> = rows.iter().map(|txn| txn.date).collect();
    assert_eq!(dates, vec![date(2023, 2, 1), date(2023, 3, 1)]);
}

#[test]
fn single_occurrence_emits_nothing() {
    let seed = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Monthly).with_occurrences(1),
    );
    assert!(expand_recurrence(&seed).unwrap().is_empty());
}

#[test]
fn occurrence_count_includes_the_seed() {
    for n in 2..=6u32 {
        let seed = seed_on(
            date(2023, 1, 1),
            Recurrence::new(Frequency::Daily).with_occurrences(n),
        );
        let rows = expand_recurrence(&seed).unwrap();
        assert_eq!(rows.len() as u32, n - 1, "occurrences = {n}");
    }
}

#[test]
fn daily_steps_one_day_apart() {
    let seed = seed_on(
        date(2023, 12, 30),
        Recurrence::new(Frequency::Daily).with_occurrences(4),
    );
    let dates: Vec<_> = expand_recurrence(&seed)
        .unwrap()
        .iter()
        .map(|txn| txn.date)
        .collect();
    assert_eq!(dates, vec![date(2023, 12, 31), date(2024, 1, 1), date(2024, 1, 2)]);
}

#[test]
fn weekly_end_date_is_an_inclusive_cap() {
    let seed = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Weekly).with_end_date(date(2023, 1, 29)),
    );
    let rows = expand_recurrence(&seed).unwrap();
    let dates: Vec<_> = rows.iter().map(|txn| txn.date).collect();
    assert_eq!(
        dates,
        vec![date(2023, 1, 8), date(2023, 1, 15), date(2023, 1, 22), date(2023, 1, 29)]
    );
    assert!(dates.iter().all(|d| *d <= date(2023, 1, 29)));
}

#[test]
fn end_date_before_first_step_emits_nothing() {
    let seed = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Monthly).with_end_date(date(2023, 1, 15)),
    );
    assert!(expand_recurrence(&seed).unwrap().is_empty());
}

#[test]
fn occurrences_and_end_date_whichever_terminates_first() {
    let tight_end = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Monthly)
            .with_occurrences(12)
            .with_end_date(date(2023, 3, 15)),
    );
    let dates: Vec<_> = expand_recurrence(&tight_end)
        .unwrap()
        .iter()
        .map(|txn| txn.date)
        .collect();
    assert_eq!(dates, vec![date(2023, 2, 1), date(2023, 3, 1)]);

    let tight_count = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Monthly)
            .with_occurrences(2)
            .with_end_date(date(2024, 1, 1)),
    );
    assert_eq!(expand_recurrence(&tight_count).unwrap().len(), 1);
}

#[test]
fn monthly_clamps_to_month_end_and_stays_clamped() {
    let seed = seed_on(
        date(2023, 1, 31),
        Recurrence::new(Frequency::Monthly).with_occurrences(4),
    );
    let dates: Vec<_> = expand_recurrence(&seed)
        .unwrap()
        .iter()
        .map(|txn| txn.date)
        .collect();
    assert_eq!(dates, vec![date(2023, 2, 28), date(2023, 3, 28), date(2023, 4, 28)]);
}

#[test]
fn monthly_uses_leap_day_when_available() {
    let seed = seed_on(
        date(2024, 1, 31),
        Recurrence::new(Frequency::Monthly).with_occurrences(3),
    );
    let dates: Vec<_> = expand_recurrence(&seed)
        .unwrap()
        .iter()
        .map(|txn| txn.date)
        .collect();
    assert_eq!(dates, vec![date(2024, 2, 29), date(2024, 3, 29)]);
}

#[test]
fn yearly_steps_one_calendar_year() {
    let seed = seed_on(
        date(2023, 6, 15),
        Recurrence::new(Frequency::Yearly).with_occurrences(3),
    );
    let dates: Vec<_> = expand_recurrence(&seed)
        .unwrap()
        .iter()
        .map(|txn| txn.date)
        .collect();
    assert_eq!(dates, vec![date(2024, 6, 15), date(2025, 6, 15)]);
}

#[test]
fn generated_rows_copy_the_seed_and_drop_the_rule() {
    let account_id = Uuid::new_v4();
    let target_id = Uuid::new_v4();
    let category_id = Uuid::new_v4();
    let seed = Transaction::new(
        "Gym",
        TransactionKind::Expense,
        dec!(35),
        account_id,
        date(2023, 1, 10),
    )
    .with_target(target_id)
    .with_category(category_id)
    .with_recurrence(Recurrence::new(Frequency::Monthly).with_occurrences(3));

    let rows = expand_recurrence(&seed).unwrap();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_ne!(row.id, seed.id);
        assert_eq!(row.name, seed.name);
        assert_eq!(row.kind, seed.kind);
        assert_eq!(row.amount, seed.amount);
        assert_eq!(row.account_id, account_id);
        assert_eq!(row.target_account_id, Some(target_id));
        assert_eq!(row.category_id, Some(category_id));
        assert!(row.recurrence.is_none(), "occurrences must not recurse");
    }
}

#[test]
fn emitted_sequence_is_strictly_ordered() {
    let seed = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Weekly).with_occurrences(10),
    );
    let dates: Vec<_> = expand_recurrence(&seed)
        .unwrap()
        .iter()
        .map(|txn| txn.date)
        .collect();
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn unbounded_rule_requires_a_cap() {
    let seed = seed_on(date(2023, 1, 1), Recurrence::new(Frequency::Daily));
    assert!(matches!(
        expand_recurrence(&seed).unwrap_err(),
        LedgerError::UnboundedRecurrence
    ));

    let rows = expand_recurrence_capped(&seed, 30).unwrap();
    assert_eq!(rows.len(), 30);
    assert_eq!(rows.last().unwrap().date, date(2023, 1, 31));
}

#[test]
fn cap_also_bounds_rules_with_distant_end_dates() {
    let seed = seed_on(
        date(2023, 1, 1),
        Recurrence::new(Frequency::Daily).with_end_date(date(2099, 1, 1)),
    );
    let rows = expand_recurrence_capped(&seed, 5).unwrap();
    assert_eq!(rows.len(), 5);
}
