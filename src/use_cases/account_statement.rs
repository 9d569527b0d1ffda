use std::fmt::Write;

use crate::domain::{AccountId, AccountRepository, Error};

/// Renders an account's history and balance as text.
#[derive(Default, Debug)]
pub struct GenerateAccountStatementUseCase;

impl GenerateAccountStatementUseCase {
    pub fn new() -> Self {
        Self
    }

    /// ```text
    /// Account Statement for ACC-1-1717243200-4321:
    /// 01-06-2024 12:00:00 - Deposit of PHP 500.00
    /// Current Balance: PHP 500.00
    /// ```
    pub fn execute<R: AccountRepository>(
        &self,
        repository: &R,
        account_id: AccountId,
    ) -> Result<String, Error> {
        let account = repository
            .find_account_by_id(account_id)
            .ok_or(Error::AccountNotFound(account_id))?;

        let mut statement = format!("Account Statement for {}:\n", account.account_number());
        for transaction in account.transactions() {
            // Writing into a String cannot fail.
            let _ = writeln!(statement, "{}", transaction);
        }
        let _ = write!(statement, "Current Balance: {}", account.formatted_balance());

        Ok(statement)
    }
}
