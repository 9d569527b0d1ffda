use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::CommandStream;
use crate::domain::{AccountId, Command, Customer, CustomerId, Error, Money};

/// Header line expected at the top of every command script.
pub const SCRIPT_HEADER: &str = "command, customer, account, amount, name, email, phone";

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    command: String,
    customer: Option<CustomerId>,
    account: Option<AccountId>,
    amount: Option<Money>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

fn required<T>(value: Option<T>, field: &str, command: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::Ingestion(format!("Missing {} for '{}' command", field, command)))
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let command = row.command.trim().to_ascii_lowercase();

        let cmd = match command.as_str() {
            "create" => Command::CreateAccount(Customer::new(
                required(row.customer, "customer", &command)?,
                required(row.name, "name", &command)?,
                row.email.unwrap_or_default(),
                row.phone.unwrap_or_default(),
            )),
            "accounts" => Command::ListAccounts {
                customer_id: required(row.customer, "customer", &command)?,
            },
            "statement" => Command::Statement {
                account_id: required(row.account, "account", &command)?,
            },
            "balance" => Command::Balance {
                account_id: required(row.account, "account", &command)?,
            },
            "" => return Err(Error::Ingestion("Empty command".to_string())),
            _ => Command::Transaction {
                account_id: required(row.account, "account", &command)?,
                amount: required(row.amount, "amount", &command)?.amount(),
                kind: command,
            },
        };

        Ok(cmd)
    }
}

/// A row that fails to deserialize is turned into an error instead of ending
/// the script, so later lines still run.
fn to_command(row: Result<CsvRow, csv::Error>) -> Result<Command, Error> {
    row.map_err(|e| Error::Ingestion(format!("CSV deserialization error: {}", e)))
        .and_then(Command::try_from)
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    /// Lazily yields one command per script line. The underlying reader is
    /// consumed on the first call; later calls yield nothing.
    fn stream(&mut self) -> Self::CmdStream {
        let Some(reader) = self.reader.take() else {
            return Box::pin(stream::empty::<Result<Command, Error>>());
        };

        let commands = reader.into_deserialize::<CsvRow>().map(to_command);
        Box::pin(stream::iter(commands))
    }
}
