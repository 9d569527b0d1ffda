use rust_decimal::Decimal;

use crate::domain::{AccountId, Customer, CustomerId, Money};

/// One line of a ledger session script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateAccount(Customer),
    ListAccounts {
        customer_id: CustomerId,
    },
    Statement {
        account_id: AccountId,
    },
    Balance {
        account_id: AccountId,
    },
    /// `kind` is kept as written; unknown kinds are rejected by the
    /// transaction use case after the account lookup.
    Transaction {
        account_id: AccountId,
        amount: Decimal,
        kind: String,
    },
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::CreateAccount(customer) => {
                write!(f, "create,customer={}", customer.customer_id)
            }
            Command::ListAccounts { customer_id } => write!(f, "accounts,customer={}", customer_id),
            Command::Statement { account_id } => write!(f, "statement,account={}", account_id),
            Command::Balance { account_id } => write!(f, "balance,account={}", account_id),
            Command::Transaction {
                account_id,
                amount,
                kind,
            } => write!(f, "{},account={},amount={}", kind, account_id, Money(*amount)),
        }
    }
}
