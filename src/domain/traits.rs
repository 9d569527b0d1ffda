use chrono::{DateTime, Local};
use futures::Stream;

use crate::domain::{Account, AccountId, Command, CustomerId, Error};

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Storage for accounts, keyed by `AccountId`.
pub trait AccountRepository {
    /// Inserts or replaces the account stored under its id.
    fn save_account(&mut self, account: Account);

    fn find_account_by_id(&self, account_id: AccountId) -> Option<&Account>;

    fn find_account_by_id_mut(&mut self, account_id: AccountId) -> Option<&mut Account>;

    fn find_accounts_by_customer_id(&self, customer_id: CustomerId) -> Vec<&Account>;

    fn find_account_by_account_number(&self, account_number: &str) -> Option<&Account>;

    fn account_count(&self) -> usize;
}
