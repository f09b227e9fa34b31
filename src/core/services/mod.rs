pub mod account_service;
pub mod report_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use report_service::ReportService;
pub use transaction_service::TransactionService;

use uuid::Uuid;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),
    #[error("{0}")]
    Invalid(String),
}
