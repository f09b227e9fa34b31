//! Business logic built on top of the ledger container. No terminal I/O, no
//! direct storage interactions.

pub mod services;
