// Domain entities: wallets and the expenses they record

pub mod expense;
pub mod wallet;

pub use expense::Expense;
pub use wallet::Wallet;
