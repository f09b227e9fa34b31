use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{find_by_id, find_by_id_mut, NamedEntity};
use crate::domain::{Account, Category, Transaction};
use crate::errors::LedgerError;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Inclusive date range with optional bounds, used to scope report queries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSpan {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidInput(
                "span end must not precede start".into(),
            ));
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Unbounded span matching every date.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn since(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// In-memory snapshot of one ledger: accounts, categories, and transactions.
///
/// The container never recomputes balances into stored state; it only holds
/// rows and answers scoped queries for the computation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
            categories: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    /// Inserts a batch of transactions as one unit. Callers that expand a
    /// seed into occurrences use this so the rows land together.
    pub fn add_transactions(&mut self, transactions: Vec<Transaction>) -> Vec<Uuid> {
        let ids = transactions.iter().map(|txn| txn.id).collect();
        self.transactions.extend(transactions);
        self.touch();
        ids
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        find_by_id(&self.accounts, id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        find_by_id_mut(&mut self.accounts, id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        find_by_id_mut(&mut self.transactions, id)
    }

    pub fn remove_account(&mut self, id: Uuid) -> Option<Account> {
        let index = self.accounts.iter().position(|account| account.id == id)?;
        let removed = self.accounts.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn remove_category(&mut self, id: Uuid) -> Option<Category> {
        let index = self.categories.iter().position(|category| category.id == id)?;
        let removed = self.categories.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        let removed = self.transactions.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// All transactions belonging to an account, in insertion order.
    pub fn transactions_for_account(&self, account_id: Uuid) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.account_id == account_id)
            .collect()
    }

    /// Account-scoped transactions whose date falls inside `span`.
    pub fn transactions_in_span(&self, account_id: Uuid, span: DateSpan) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.account_id == account_id && span.contains(txn.date))
            .collect()
    }

    /// Case-insensitive lookup among shared destination accounts.
    pub fn destination_account(&self, name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.is_destination() && account.name().eq_ignore_ascii_case(name))
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
