use crate::domain::{AccountId, CustomerId, Money};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Account Not Found.")]
    AccountNotFound(AccountId),

    #[error("Amount must be positive.")]
    InvalidAmount,

    #[error("Cannot withdraw. Your account must maintain a minimum balance of {min_balance}.")]
    MinimumBalanceViolation { min_balance: Money },

    #[error("Amount exceeds the supported balance range.")]
    AmountOverflow,

    #[error("Insufficient Funds.")]
    InsufficientFunds,

    #[error("Invalid Transaction Type.")]
    InvalidTransactionType(String),

    #[error(
        "Could not allocate a unique account number for customer {customer_id} \
         after {attempts} attempts."
    )]
    AccountNumberExhausted {
        customer_id: CustomerId,
        attempts: u32,
    },
}
