//! Ledger container, balance computation, and recurrence expansion.

pub mod balance;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod recurring;

pub use balance::{balance_at, net_total, BalanceAnchor};
pub use ledger::{DateSpan, Ledger};
pub use recurring::{expand_recurrence, expand_recurrence_capped, DEFAULT_EXPANSION_CAP};
