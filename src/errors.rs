use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown transaction kind: {0}")]
    UnknownTransactionKind(String),
    #[error("Unknown recurrence frequency: {0}")]
    UnknownFrequency(String),
    #[error("Recurrence rule has neither an occurrence count nor an end date")]
    UnboundedRecurrence,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
