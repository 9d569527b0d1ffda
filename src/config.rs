use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// Settings applied to every account opened during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Floor each new account must keep after a withdrawal.
    pub min_balance: Decimal,
    pub account_number_prefix: String,
    /// Upper bound on candidates tried before giving up on a unique number.
    pub max_account_number_attempts: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_balance: Decimal::from(100),
            account_number_prefix: "ACC".to_string(),
            max_account_number_attempts: 100,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bank_ledger", version, about = "In-memory banking ledger")]
pub struct Cli {
    /// CSV command script; runs the built-in demo when omitted
    pub script: Option<PathBuf>,

    /// Minimum balance for newly created accounts
    #[arg(long = "min-balance", default_value = "100", allow_hyphen_values = true)]
    pub min_balance: Decimal,

    /// Prefix for generated account numbers
    #[arg(long = "prefix", default_value = "ACC")]
    pub prefix: String,

    /// Attempts allowed when generating a unique account number
    #[arg(long = "max-attempts", default_value_t = 100)]
    pub max_attempts: u32,
}

impl Cli {
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            min_balance: self.min_balance,
            account_number_prefix: self.prefix.clone(),
            max_account_number_attempts: self.max_attempts,
        }
    }
}
