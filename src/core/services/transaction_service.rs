//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::Transaction;
use crate::ledger::{recurring, Ledger};

/// Provides validated CRUD helpers for ledger transactions, including seed
/// expansion on insert.
pub struct TransactionService;

impl TransactionService {
    /// Inserts a new transaction and returns its identifier.
    ///
    /// When the transaction carries no category, its target account's default
    /// category is inherited. A seed's recurrence rule is expanded before
    /// anything is inserted; the seed and every generated occurrence then land
    /// in the ledger as one batch, so an expansion failure leaves the ledger
    /// untouched.
    pub fn create(ledger: &mut Ledger, mut transaction: Transaction) -> ServiceResult<Uuid> {
        if ledger.account(transaction.account_id).is_none() {
            return Err(ServiceError::AccountNotFound(transaction.account_id));
        }
        if let Some(target_id) = transaction.target_account_id {
            let target = ledger
                .account(target_id)
                .ok_or(ServiceError::AccountNotFound(target_id))?;
            if transaction.category_id.is_none() {
                transaction.category_id = target.category_id;
            }
        }
        if let Some(category_id) = transaction.category_id {
            if ledger.category(category_id).is_none() {
                return Err(ServiceError::CategoryNotFound(category_id));
            }
        }

        let occurrences = recurring::expand_recurrence(&transaction)?;
        let id = transaction.id;
        tracing::debug!(
            transaction = %id,
            occurrences = occurrences.len(),
            "inserting transaction"
        );
        let mut batch = Vec::with_capacity(1 + occurrences.len());
        batch.push(transaction);
        batch.extend(occurrences);
        ledger.add_transactions(batch);
        Ok(id)
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let txn = ledger
            .transaction_mut(id)
            .ok_or(ServiceError::TransactionNotFound(id))?;
        mutator(txn);
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or(ServiceError::TransactionNotFound(id))
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}
