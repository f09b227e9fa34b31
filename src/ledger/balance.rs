//! Account balance computation against a dated anchor.
//!
//! The engine takes an already account-scoped transaction collection; callers
//! filter by account identity before invoking it. Date scoping happens here,
//! so handing over a superset of the relevant interval is fine.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::Transaction;

/// The `(initial_balance, balance_date)` pair treated as ground truth for an
/// account. Same-day activity is considered baked into the anchor balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceAnchor {
    pub balance: Decimal,
    pub date: NaiveDate,
}

impl BalanceAnchor {
    pub fn new(balance: Decimal, date: NaiveDate) -> Self {
        Self { balance, date }
    }
}

/// Computes the account balance at `target_date`, walking forward or backward
/// from the anchor.
///
/// Forward (`target_date >= anchor.date`): transactions in
/// `(anchor.date, target_date]` contribute their signed effect. Backward:
/// transactions in `(target_date, anchor.date]` are reversed out, since the
/// anchor balance already reflects them. A transaction dated exactly on the
/// anchor is excluded in both directions. All arithmetic is exact decimal.
pub fn balance_at(
    anchor: BalanceAnchor,
    target_date: NaiveDate,
    transactions: &[&Transaction],
) -> Decimal {
    if target_date >= anchor.date {
        transactions
            .iter()
            .filter(|txn| txn.date > anchor.date && txn.date <= target_date)
            .fold(anchor.balance, |balance, txn| balance + txn.signed_effect())
    } else {
        transactions
            .iter()
            .filter(|txn| txn.date > target_date && txn.date <= anchor.date)
            .fold(anchor.balance, |balance, txn| balance - txn.signed_effect())
    }
}

/// Net sum of signed effects over an arbitrary caller-supplied set. The
/// filtered report totals are specializations of this.
pub fn net_total(transactions: &[&Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |total, txn| total + txn.signed_effect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionKind, amount: Decimal, on: NaiveDate) -> Transaction {
        Transaction::new("txn", kind, amount, Uuid::new_v4(), on)
    }

    #[test]
    fn anchor_date_transaction_is_never_counted() {
        let anchor = BalanceAnchor::new(dec!(100), date(2023, 1, 1));
        let rows = vec![txn(TransactionKind::Deposit, dec!(50), date(2023, 1, 1))];
        let refs: Vec<&Transaction> = rows.iter().collect();
        assert_eq!(balance_at(anchor, date(2023, 1, 5), &refs), dec!(100));
        assert_eq!(balance_at(anchor, date(2022, 12, 1), &refs), dec!(100));
    }

    #[test]
    fn net_total_sums_signed_effects() {
        let rows = vec![
            txn(TransactionKind::Deposit, dec!(50), date(2023, 1, 2)),
            txn(TransactionKind::Payment, dec!(30), date(2023, 1, 3)),
        ];
        let refs: Vec<&Transaction> = rows.iter().collect();
        assert_eq!(net_total(&refs), dec!(20));
    }
}
