use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::ledger::balance::BalanceAnchor;

/// Represents a financial account tracked within the ledger.
///
/// `initial_balance` is exact as of `balance_date` and never recomputed;
/// every derived balance is computed on demand from this anchor. An account
/// without an owning `user_id` is a shared destination account (a
/// counterparty such as a landlord or a shop).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    pub initial_balance: Decimal,
    pub balance_date: NaiveDate,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl Account {
    /// Creates an account anchored at `balance_date` with the given balance.
    pub fn new(
        name: impl Into<String>,
        initial_balance: Decimal,
        balance_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            account_number: None,
            bank_name: None,
            initial_balance,
            balance_date,
            currency: CurrencyCode::default(),
            user_id: None,
            category_id: None,
        }
    }

    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Links the account to a category identifier. Transactions targeting
    /// this account inherit it when they carry none of their own.
    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    /// True for ownerless, shared destination accounts.
    pub fn is_destination(&self) -> bool {
        self.user_id.is_none()
    }

    /// The `(initial_balance, balance_date)` pair the balance engine walks from.
    pub fn anchor(&self) -> BalanceAnchor {
        BalanceAnchor {
            balance: self.initial_balance,
            date: self.balance_date,
        }
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!(
            "{} ({})",
            self.name,
            crate::currency::format_amount(self.initial_balance, &self.currency)
        )
    }
}
