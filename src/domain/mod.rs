pub mod account;
pub mod command;
pub mod customer;
pub mod error;
pub mod money;
pub mod traits;
pub mod transaction;

pub use account::{Account, AccountId};
pub use command::Command;
pub use customer::{Customer, CustomerId};
pub use error::Error;
pub use money::Money;
pub use traits::{AccountRepository, Clock, CommandStream, DeadLetterQueue};
pub use transaction::{Transaction, TransactionKind};
