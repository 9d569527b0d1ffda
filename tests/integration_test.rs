use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use tempfile::NamedTempFile;

fn script(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "command, customer, account, amount, name, email, phone\n{}",
        body
    )
    .unwrap();
    file
}

#[test]
fn end_to_end_script_outputs_balances_and_errors() {
    let file = script(
        "create, 1, , , Chelsea Purificacion, chelsea@gmail.com, 0923232321\n\
         create, 2, , , Juan Dela Cruz, juan@example.com, 0917000000\n\
         deposit, , 1, 500\n\
         withdraw, , 1, 200\n\
         deposit, , 2, 150.255\n\
         deposit, , 99, 100\n\
         withdraw, , 1, 1000\n\
         transfer, , 1, 100\n\
         deposit, , 1, -5\n\
         bogus row\n\
         statement, , 1\n\
         accounts, 2",
    );

    let exe = env!("CARGO_BIN_EXE_bank_ledger");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path()).env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(pred::str::contains("The account successfully created, the account number ACC-1-"))
        .stdout(pred::str::contains("for Chelsea Purificacion."))
        .stdout(pred::str::contains(
            "Deposit of PHP 500.00 completed successfully. New Balance: PHP 500.00",
        ))
        .stdout(pred::str::contains(
            "Withdraw of PHP 200.00 completed successfully. New Balance: PHP 300.00",
        ))
        .stdout(pred::str::contains("Account Statement for ACC-1-"))
        .stdout(pred::str::contains("Current Balance: PHP 300.00"))
        .stdout(
            pred::str::is_match(concat!(
                r"Account ID: 2, Customer ID: 2, Account Number: ACC-2-\d+-\d{4}, ",
                r"Balance: PHP 150\.26",
            ))
            .unwrap(),
        )
        .stderr(pred::str::contains("Error: Account Not Found."))
        .stderr(pred::str::contains(
            "Error: Cannot withdraw. Your account must maintain a minimum balance of PHP 100.00.",
        ))
        .stderr(pred::str::contains("Error: Invalid Transaction Type."))
        .stderr(pred::str::contains("Error: Amount must be positive."))
        .stderr(pred::str::contains("Error: Ingestion failed with:"));
}

#[test]
fn statement_lines_use_day_first_timestamps() {
    let file = script(
        "create, 3, , , Ana Reyes, ana@example.com, 0918000000\n\
         deposit, , 1, 250\n\
         statement, , 1",
    );

    Command::new(env!("CARGO_BIN_EXE_bank_ledger"))
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            pred::str::is_match(concat!(
                r"\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2} - Deposit of PHP 250\.00\n",
                r"Current Balance: PHP 250\.00",
            ))
            .unwrap(),
        );
}

#[test]
fn zero_floor_allows_emptying_the_account() {
    let file = script(
        "create, 4, , , Ben Cruz, ben@example.com, 0919000000\n\
         deposit, , 1, 80\n\
         withdraw, , 1, 80",
    );

    Command::new(env!("CARGO_BIN_EXE_bank_ledger"))
        .arg(file.path())
        .args(["--min-balance", "0", "--prefix", "SAV"])
        .assert()
        .success()
        .stdout(pred::str::contains("Account Created: SAV-4-"))
        .stdout(pred::str::contains(
            "Withdraw of PHP 80.00 completed successfully. New Balance: PHP 0.00",
        ));
}

#[test]
fn oversized_deposit_is_rejected_and_later_commands_run() {
    let file = script(
        "create, 5, , , Chelsea Purificacion, chelsea@gmail.com, 0923232321\n\
         deposit, , 1, 79228162514264337593543950335\n\
         deposit, , 1, 1\n\
         statement, , 1",
    );

    Command::new(env!("CARGO_BIN_EXE_bank_ledger"))
        .arg(file.path())
        .assert()
        .success()
        .stdout(pred::str::contains("Current Balance: PHP 79228162514264337593543950335.00"))
        .stderr(pred::str::contains("Error: Amount exceeds the supported balance range."));
}

#[test]
fn demo_runs_without_a_script() {
    Command::new(env!("CARGO_BIN_EXE_bank_ledger"))
        .assert()
        .success()
        .stdout(pred::str::contains("for Chelsea Purificacion."))
        .stdout(pred::str::contains(
            "Name: Chelsea Purificacion, Email: chelsea@gmail.com, Phone: 0923232321",
        ))
        .stdout(pred::str::contains("Successfully deposited PHP 500.00. New Balance: PHP 500.00"))
        .stdout(pred::str::contains("Successfully withdrew PHP 200.00. New Balance: PHP 300.00"))
        .stdout(pred::str::contains("Updated Balance: PHP 300.00"))
        .stdout(pred::str::contains("Current Balance: PHP 300.00"))
        .stderr(pred::str::contains("Error: Account Not Found."))
        .stderr(pred::str::contains("Error: Invalid Transaction Type."));
}

#[test]
fn missing_script_fails() {
    Command::new(env!("CARGO_BIN_EXE_bank_ledger"))
        .arg("/nonexistent/ledger-script.csv")
        .assert()
        .failure();
}
