use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::errors::LedgerError;

/// Closed set of transaction kinds. Each kind has a fixed direction; adding a
/// kind means extending this enum and the single match in [`direction`].
///
/// [`direction`]: TransactionKind::direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Interest,
    Income,
    Payment,
    Withdrawal,
    Transfer,
    Expense,
}

/// Whether a transaction kind increases or decreases its account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inflow,
    Outflow,
}

impl TransactionKind {
    /// The fixed classification table. Not configurable.
    pub fn direction(self) -> Direction {
        match self {
            TransactionKind::Deposit | TransactionKind::Interest | TransactionKind::Income => {
                Direction::Inflow
            }
            TransactionKind::Payment
            | TransactionKind::Withdrawal
            | TransactionKind::Transfer
            | TransactionKind::Expense => Direction::Outflow,
        }
    }

    /// Forces the stored sign to agree with the kind's direction: outflow
    /// kinds non-positive, inflow kinds non-negative. Applied exactly once,
    /// when a transaction is created; never re-applied on read.
    pub fn normalize_amount(self, amount: Decimal) -> Decimal {
        match self.direction() {
            Direction::Inflow if amount < Decimal::ZERO => -amount,
            Direction::Outflow if amount > Decimal::ZERO => -amount,
            _ => amount,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Interest => "interest",
            TransactionKind::Income => "income",
            TransactionKind::Payment => "payment",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Fails closed: an unrecognized kind is a data error, never a guessed sign.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "deposit" => Ok(TransactionKind::Deposit),
            "interest" => Ok(TransactionKind::Interest),
            "income" => Ok(TransactionKind::Income),
            "payment" => Ok(TransactionKind::Payment),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            "transfer" => Ok(TransactionKind::Transfer),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::UnknownTransactionKind(other.into())),
        }
    }
}

/// Fixed stepping frequencies for recurring transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Advances a date by one step of this frequency. Month and year steps
    /// preserve the day-of-month where the target month allows it and clamp
    /// to the month's last day otherwise.
    pub fn next_date(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => from + Duration::days(1),
            Frequency::Weekly => from + Duration::weeks(1),
            Frequency::Monthly => shift_month(from),
            Frequency::Yearly => shift_year(from),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(LedgerError::UnknownFrequency(other.into())),
        }
    }
}

fn shift_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn shift_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_next - Duration::days(1)).day()
}

/// Recurrence rule carried by a seed transaction.
///
/// `occurrences` counts the total number of occurrences including the seed
/// itself; `end_date` is an inclusive cap on occurrence dates. A rule with
/// neither bound is unbounded and rejected by strict expansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Recurrence {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            occurrences: None,
            end_date: None,
        }
    }

    pub fn with_occurrences(mut self, occurrences: u32) -> Self {
        self.occurrences = Some(occurrences);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// A rule is bounded when at least one termination condition is set.
    pub fn is_bounded(&self) -> bool {
        self.occurrences.is_some() || self.end_date.is_some()
    }
}

/// A dated ledger entry belonging to one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Transaction {
    /// Creates a transaction with its amount sign-normalized to the kind's
    /// direction. This constructor is the single normalization point.
    pub fn new(
        name: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        account_id: Uuid,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount: kind.normalize_amount(amount),
            account_id,
            target_account_id: None,
            category_id: None,
            date,
            recurrence: None,
        }
    }

    pub fn with_target(mut self, target_account_id: Uuid) -> Self {
        self.target_account_id = Some(target_account_id);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    /// A transaction carrying a recurrence rule is a seed; expanded
    /// occurrences never carry one, which keeps expansion from re-triggering.
    pub fn is_seed(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Signed contribution of this transaction to its account's balance: the
    /// kind's direction applied to the stored magnitude. For rows normalized
    /// at creation this is exactly the stored amount.
    pub fn signed_effect(&self) -> Decimal {
        match self.kind.direction() {
            Direction::Inflow => self.amount.abs(),
            Direction::Outflow => -self.amount.abs(),
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Transaction {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} [{}] {} on {}", self.name, self.kind, self.amount, self.date)
    }
}
