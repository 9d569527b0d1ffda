use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::domain::{CustomerId, Error, Money, Transaction, TransactionKind};

pub type AccountId = u32;

#[derive(Debug, Clone)]
pub struct Account {
    account_id: AccountId,
    customer_id: CustomerId,
    account_number: String,
    balance: Decimal,
    min_balance: Decimal, // floor enforced on withdrawals
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        account_id: AccountId,
        customer_id: CustomerId,
        account_number: impl Into<String>,
        min_balance: Decimal,
    ) -> Self {
        Self {
            account_id,
            customer_id,
            account_number: account_number.into(),
            balance: Decimal::ZERO,
            min_balance,
            transactions: Vec::new(),
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn min_balance(&self) -> Decimal {
        self.min_balance
    }

    /// History in the order the operations were applied.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Balance as printed on the console, e.g. `PHP 300.00`.
    pub fn formatted_balance(&self) -> String {
        Money(self.balance).to_string()
    }

    pub fn deposit(&mut self, amount: Decimal, at: DateTime<Local>) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountOverflow)?;
        self.record(TransactionKind::Deposit, amount, at);
        Ok(())
    }

    /// The minimum-balance check runs before the insufficient-funds check, so
    /// with a positive floor `InsufficientFunds` is never returned.
    pub fn withdraw(&mut self, amount: Decimal, at: DateTime<Local>) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or(Error::AmountOverflow)?;
        if remaining < self.min_balance {
            return Err(Error::MinimumBalanceViolation {
                min_balance: Money(self.min_balance),
            });
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds);
        }

        self.balance = remaining;
        self.record(TransactionKind::Withdraw, amount, at);
        Ok(())
    }

    fn record(&mut self, kind: TransactionKind, amount: Decimal, timestamp: DateTime<Local>) {
        self.transactions.push(Transaction {
            kind,
            amount,
            timestamp,
        });
    }
}
