use tracing::warn;

use crate::domain::{DeadLetterQueue, Error};

/// Prints rejected commands to stderr the way the ledger reports them on the
/// console: `Error: <message>`.
#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        warn!(?error, "command rejected");
        eprintln!("Error: {}", error);
    }
}
