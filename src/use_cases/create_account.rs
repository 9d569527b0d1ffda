use rand::Rng;
use tracing::{debug, info};

use crate::config::LedgerConfig;
use crate::domain::{Account, AccountId, AccountRepository, Clock, Customer, CustomerId, Error};

/// Lowest and highest random suffix appended to an account number.
pub const SUFFIX_RANGE: std::ops::RangeInclusive<u32> = 1000..=9999;

pub fn format_account_number(
    prefix: &str,
    customer_id: CustomerId,
    unix_seconds: i64,
    suffix: u32,
) -> String {
    format!("{}-{}-{}-{}", prefix, customer_id, unix_seconds, suffix)
}

/// Opens accounts with a freshly generated, unique account number.
#[derive(Debug)]
pub struct CreateAccountUseCase<C, G>
where
    C: Clock,
    G: Rng,
{
    clock: C,
    rng: G,
    config: LedgerConfig,
}

impl<C, G> CreateAccountUseCase<C, G>
where
    C: Clock,
    G: Rng,
{
    pub fn new(clock: C, rng: G, config: LedgerConfig) -> Self {
        Self { clock, rng, config }
    }

    /// Stores a new zero-balance account for `customer` under id
    /// `account_count + 1` and returns a copy of it.
    pub fn execute<R: AccountRepository>(
        &mut self,
        repository: &mut R,
        customer: &Customer,
    ) -> Result<Account, Error> {
        let account_number = self.unique_account_number(repository, customer.customer_id)?;
        let account_id = repository.account_count() as AccountId + 1;

        let account = Account::new(
            account_id,
            customer.customer_id,
            account_number,
            self.config.min_balance,
        );
        repository.save_account(account.clone());

        info!(
            account_id,
            customer_id = customer.customer_id,
            account_number = account.account_number(),
            "account created"
        );
        Ok(account)
    }

    fn unique_account_number<R: AccountRepository>(
        &mut self,
        repository: &R,
        customer_id: CustomerId,
    ) -> Result<String, Error> {
        let attempts = self.config.max_account_number_attempts;

        for attempt in 1..=attempts {
            let candidate = format_account_number(
                &self.config.account_number_prefix,
                customer_id,
                self.clock.now().timestamp(),
                self.rng.random_range(SUFFIX_RANGE),
            );
            if repository
                .find_account_by_account_number(&candidate)
                .is_none()
            {
                return Ok(candidate);
            }
            debug!(attempt, %candidate, "account number already taken");
        }

        Err(Error::AccountNumberExhausted {
            customer_id,
            attempts,
        })
    }
}
