//! In-memory banking ledger: accounts with a minimum balance, deposits and
//! withdrawals, and printable statements.

pub mod clock;
pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod repository;
pub mod use_cases;

pub use domain::{Account, Customer, Error, Transaction, TransactionKind};
