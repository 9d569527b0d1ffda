use std::io::Write;

use futures::StreamExt;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LedgerConfig;
use crate::domain::{
    AccountId, Command, Customer, CustomerId, Error, Money, TransactionKind,
    traits::{AccountRepository, Clock, CommandStream, DeadLetterQueue},
};
use crate::use_cases::{
    CreateAccountUseCase, GenerateAccountStatementUseCase, MakeTransactionUseCase,
};

/// Runs a command stream against one repository, writing the ledger's
/// console lines to `out` and handing failed commands to the DLQ.
pub struct Engine<I, R, D, C, G, W>
where
    I: CommandStream,
    R: AccountRepository,
    D: DeadLetterQueue,
    C: Clock + Clone,
    G: Rng,
    W: Write,
{
    ingestion: I,
    repository: R,
    dlq: D,
    create_account: CreateAccountUseCase<C, G>,
    make_transaction: MakeTransactionUseCase<C>,
    statements: GenerateAccountStatementUseCase,
    out: W,
}

impl<I, R, D, C, G, W> Engine<I, R, D, C, G, W>
where
    I: CommandStream,
    R: AccountRepository,
    D: DeadLetterQueue,
    C: Clock + Clone,
    G: Rng,
    W: Write,
{
    pub fn new(
        ingestion: I,
        repository: R,
        dlq: D,
        clock: C,
        rng: G,
        config: LedgerConfig,
        out: W,
    ) -> Self {
        Self {
            ingestion,
            repository,
            dlq,
            create_account: CreateAccountUseCase::new(clock.clone(), rng, config),
            make_transaction: MakeTransactionUseCase::new(clock),
            statements: GenerateAccountStatementUseCase::new(),
            out,
        }
    }

    /// Only output failures abort the run; command errors go to the DLQ.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut commands = self.ingestion.stream();

        while let Some(cmd) = commands.next().await {
            match cmd {
                Ok(cmd) => match self.apply_command(cmd) {
                    Ok(()) => {}
                    Err(Error::IO(e)) => return Err(Error::IO(e)),
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn apply_command(&mut self, cmd: Command) -> Result<(), Error> {
        debug!(command = %cmd, "applying command");

        match cmd {
            Command::CreateAccount(customer) => self.create(&customer),
            Command::ListAccounts { customer_id } => self.list_accounts(customer_id),
            Command::Statement { account_id } => self.statement(account_id),
            Command::Balance { account_id } => self.balance(account_id),
            Command::Transaction {
                account_id,
                amount,
                kind,
            } => self.transact(account_id, amount, &kind),
        }
    }

    fn create(&mut self, customer: &Customer) -> Result<(), Error> {
        let account = self
            .create_account
            .execute(&mut self.repository, customer)?;

        writeln!(
            self.out,
            "The account successfully created, the account number {} for {}.",
            account.account_number(),
            customer.name
        )?;
        writeln!(
            self.out,
            "Account Created: {}, Balance: {}",
            account.account_number(),
            account.formatted_balance()
        )?;
        writeln!(
            self.out,
            "Account ID: {}, Customer ID: {}, Account Number: {}, Name: {}, Email: {}, Phone: {}, \
             Balance: {}",
            account.account_id(),
            account.customer_id(),
            account.account_number(),
            customer.name,
            customer.email,
            customer.phone_number,
            account.formatted_balance()
        )?;
        Ok(())
    }

    fn transact(
        &mut self,
        account_id: AccountId,
        amount: Decimal,
        kind: &str,
    ) -> Result<(), Error> {
        let balance = self
            .make_transaction
            .execute(&mut self.repository, account_id, amount, kind)?;

        // A successful call appended exactly one entry.
        let applied = self
            .repository
            .find_account_by_id(account_id)
            .and_then(|account| account.transactions().last())
            .ok_or(Error::AccountNotFound(account_id))?;
        let verb = match applied.kind {
            TransactionKind::Deposit => "deposited",
            TransactionKind::Withdraw => "withdrew",
        };
        let label = applied.kind;

        writeln!(
            self.out,
            "Successfully {} {}. New Balance: {}",
            verb,
            Money(amount),
            balance
        )?;
        writeln!(
            self.out,
            "{} of {} completed successfully. New Balance: {}",
            label,
            Money(amount),
            balance
        )?;
        Ok(())
    }

    fn balance(&mut self, account_id: AccountId) -> Result<(), Error> {
        let account = self
            .repository
            .find_account_by_id(account_id)
            .ok_or(Error::AccountNotFound(account_id))?;
        writeln!(self.out, "Updated Balance: {}", account.formatted_balance())?;
        Ok(())
    }

    fn statement(&mut self, account_id: AccountId) -> Result<(), Error> {
        let statement = self.statements.execute(&self.repository, account_id)?;
        writeln!(self.out, "\n{}\n", statement)?;
        Ok(())
    }

    fn list_accounts(&mut self, customer_id: CustomerId) -> Result<(), Error> {
        let accounts = self.repository.find_accounts_by_customer_id(customer_id);
        if accounts.is_empty() {
            writeln!(self.out, "No accounts for customer {}", customer_id)?;
        }
        for account in accounts {
            writeln!(
                self.out,
                "Account ID: {}, Customer ID: {}, Account Number: {}, Balance: {}",
                account.account_id(),
                account.customer_id(),
                account.account_number(),
                account.formatted_balance()
            )?;
        }
        Ok(())
    }
}
