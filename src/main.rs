use std::{
    fs::File,
    io::{self, Read},
};

use bank_ledger::{
    clock::SystemClock, config::Cli, dlq::StdErrDLQ, engine::Engine, ingestion::CsvReader,
    repository::InMemoryAccountRepository,
};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

/// Session replayed when no script is given.
const DEMO_SCRIPT: &str = "\
command, customer, account, amount, name, email, phone
create, 1, , , Chelsea Purificacion, chelsea@gmail.com, 0923232321
deposit, , 1, 500
withdraw, , 1, 200
balance, , 1
statement, , 1
deposit, , 99, 100
withdraw, , 1, 1000
transfer, , 1, 100
accounts, 1
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.ledger_config();

    let input: Box<dyn Read + Send> = match &cli.script {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::Cursor::new(DEMO_SCRIPT.as_bytes())),
    };

    let mut engine = Engine::new(
        CsvReader::new(input),
        InMemoryAccountRepository::new(),
        StdErrDLQ::default(),
        SystemClock,
        StdRng::from_os_rng(),
        config,
        io::stdout(),
    );

    engine.process().await?;

    Ok(())
}
