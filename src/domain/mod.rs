//! Domain models shared across the ledger, services, and storage layers.

pub mod account;
pub mod category;
pub mod common;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use transaction::{Direction, Frequency, Recurrence, Transaction, TransactionKind};
