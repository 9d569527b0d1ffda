pub mod account_statement;
pub mod create_account;
pub mod make_transaction;

pub use account_statement::GenerateAccountStatementUseCase;
pub use create_account::CreateAccountUseCase;
pub use make_transaction::MakeTransactionUseCase;
