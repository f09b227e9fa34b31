//! Business logic helpers for managing accounts and their balances.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::common::Displayable;
use crate::domain::Account;
use crate::ledger::{balance, Ledger};

/// Provides validated CRUD helpers and balance queries for ledger accounts.
pub struct AccountService;

impl AccountService {
    /// Adds a new account and returns its identifier.
    pub fn add(ledger: &mut Ledger, account: Account) -> ServiceResult<Uuid> {
        if account.name.trim().is_empty() {
            return Err(ServiceError::Invalid("account name must not be empty".into()));
        }
        tracing::debug!(account = %account.display_label(), "adding account");
        Ok(ledger.add_account(account))
    }

    /// Updates the account identified by `id` via the provided mutator.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Account),
    {
        let account = ledger
            .account_mut(id)
            .ok_or(ServiceError::AccountNotFound(id))?;
        mutator(account);
        ledger.touch();
        Ok(())
    }

    /// Removes an account, refusing while transactions still reference it.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Account> {
        if ledger.account(id).is_none() {
            return Err(ServiceError::AccountNotFound(id));
        }
        let referenced = ledger.transactions.iter().any(|txn| {
            txn.account_id == id || txn.target_account_id == Some(id)
        });
        if referenced {
            return Err(ServiceError::Invalid(
                "account is referenced by existing transactions".into(),
            ));
        }
        ledger
            .remove_account(id)
            .ok_or(ServiceError::AccountNotFound(id))
    }

    /// Returns a snapshot of the ledger's accounts.
    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.accounts.iter().collect()
    }

    /// Computes the account's balance at `target_date` from its stored anchor
    /// and its own transactions.
    pub fn balance_at(
        ledger: &Ledger,
        account_id: Uuid,
        target_date: NaiveDate,
    ) -> ServiceResult<Decimal> {
        let account = ledger
            .account(account_id)
            .ok_or(ServiceError::AccountNotFound(account_id))?;
        let transactions = ledger.transactions_for_account(account_id);
        Ok(balance::balance_at(
            account.anchor(),
            target_date,
            &transactions,
        ))
    }

    /// Finds a shared destination account by name (case-insensitive), creating
    /// a zero-balance one anchored at `anchor_date` when none exists.
    pub fn find_or_create_destination(
        ledger: &mut Ledger,
        name: &str,
        anchor_date: NaiveDate,
    ) -> ServiceResult<Uuid> {
        if let Some(existing) = ledger.destination_account(name) {
            return Ok(existing.id);
        }
        if name.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "destination account name must not be empty".into(),
            ));
        }
        let account = Account::new(name, Decimal::ZERO, anchor_date);
        tracing::debug!(name, "creating destination account");
        Ok(ledger.add_account(account))
    }
}
