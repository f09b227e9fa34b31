//! Read-only aggregations over account transactions.
//!
//! Every total reuses the balance engine's signed-effect rule, so a report
//! can never disagree with a balance about a transaction's direction.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Transaction, TransactionKind};
use crate::ledger::{balance, DateSpan, Ledger};

/// Filtered listings and net totals for one account (or, for category
/// reports, across the whole ledger).
pub struct ReportService;

impl ReportService {
    /// Net sum of all of an account's transactions inside `span`.
    pub fn net_total(
        ledger: &Ledger,
        account_id: Uuid,
        span: DateSpan,
    ) -> ServiceResult<Decimal> {
        let transactions = Self::account_rows(ledger, account_id, span)?;
        Ok(balance::net_total(&transactions))
    }

    /// All transactions of `kind` for an account inside `span`.
    pub fn transactions_by_kind(
        ledger: &Ledger,
        account_id: Uuid,
        kind: TransactionKind,
        span: DateSpan,
    ) -> ServiceResult<Vec<&Transaction>> {
        let mut rows = Self::account_rows(ledger, account_id, span)?;
        rows.retain(|txn| txn.kind == kind);
        Ok(rows)
    }

    pub fn total_by_kind(
        ledger: &Ledger,
        account_id: Uuid,
        kind: TransactionKind,
        span: DateSpan,
    ) -> ServiceResult<Decimal> {
        let rows = Self::transactions_by_kind(ledger, account_id, kind, span)?;
        Ok(balance::net_total(&rows))
    }

    /// All transactions of an account directed at `target_account_id`.
    pub fn transactions_by_target(
        ledger: &Ledger,
        account_id: Uuid,
        target_account_id: Uuid,
        span: DateSpan,
    ) -> ServiceResult<Vec<&Transaction>> {
        let mut rows = Self::account_rows(ledger, account_id, span)?;
        rows.retain(|txn| txn.target_account_id == Some(target_account_id));
        Ok(rows)
    }

    pub fn total_by_target(
        ledger: &Ledger,
        account_id: Uuid,
        target_account_id: Uuid,
        span: DateSpan,
    ) -> ServiceResult<Decimal> {
        let rows = Self::transactions_by_target(ledger, account_id, target_account_id, span)?;
        Ok(balance::net_total(&rows))
    }

    /// Transactions carrying one of `category_ids`, optionally restricted to
    /// one account, inside `span`.
    pub fn transactions_by_category<'a>(
        ledger: &'a Ledger,
        category_ids: &[Uuid],
        account_id: Option<Uuid>,
        span: DateSpan,
    ) -> ServiceResult<Vec<&'a Transaction>> {
        for category_id in category_ids {
            if ledger.category(*category_id).is_none() {
                return Err(ServiceError::CategoryNotFound(*category_id));
            }
        }
        if let Some(id) = account_id {
            if ledger.account(id).is_none() {
                return Err(ServiceError::AccountNotFound(id));
            }
        }
        Ok(ledger
            .transactions
            .iter()
            .filter(|txn| {
                txn.category_id
                    .map(|id| category_ids.contains(&id))
                    .unwrap_or(false)
                    && account_id.map(|id| txn.account_id == id).unwrap_or(true)
                    && span.contains(txn.date)
            })
            .collect())
    }

    pub fn total_by_category(
        ledger: &Ledger,
        category_ids: &[Uuid],
        account_id: Option<Uuid>,
        span: DateSpan,
    ) -> ServiceResult<Decimal> {
        let rows = Self::transactions_by_category(ledger, category_ids, account_id, span)?;
        Ok(balance::net_total(&rows))
    }

    fn account_rows(
        ledger: &Ledger,
        account_id: Uuid,
        span: DateSpan,
    ) -> ServiceResult<Vec<&Transaction>> {
        if ledger.account(account_id).is_none() {
            return Err(ServiceError::AccountNotFound(account_id));
        }
        Ok(ledger.transactions_in_span(account_id, span))
    }
}
