use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{AccountId, AccountRepository, Clock, Error, TransactionKind};

/// Applies deposits and withdrawals to stored accounts.
#[derive(Debug)]
pub struct MakeTransactionUseCase<C>
where
    C: Clock,
{
    clock: C,
}

impl<C> MakeTransactionUseCase<C>
where
    C: Clock,
{
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Looks the account up first, then interprets `kind`; an unknown kind on
    /// a missing account reports `AccountNotFound`.
    ///
    /// Returns the new balance formatted for display, e.g. `PHP 300.00`.
    pub fn execute<R: AccountRepository>(
        &self,
        repository: &mut R,
        account_id: AccountId,
        amount: Decimal,
        kind: &str,
    ) -> Result<String, Error> {
        if repository.find_account_by_id(account_id).is_none() {
            return Err(Error::AccountNotFound(account_id));
        }
        let kind: TransactionKind = kind.parse()?;

        self.apply(repository, account_id, amount, kind)
    }

    pub fn apply<R: AccountRepository>(
        &self,
        repository: &mut R,
        account_id: AccountId,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<String, Error> {
        let account = repository
            .find_account_by_id_mut(account_id)
            .ok_or(Error::AccountNotFound(account_id))?;

        let at = self.clock.now();
        match kind {
            TransactionKind::Deposit => account.deposit(amount, at)?,
            TransactionKind::Withdraw => account.withdraw(amount, at)?,
        }

        info!(
            account_id,
            %kind,
            %amount,
            balance = %account.balance(),
            "transaction applied"
        );
        Ok(account.formatted_balance())
    }
}
