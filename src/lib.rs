// Expense Manager - Core Library
// Multi-currency wallets with consolidated reporting and flat-file storage.
// Exposes all modules for use in the CLI and tests.

pub mod currency;
pub mod entities;
pub mod error;
pub mod manager;
pub mod sample_data;
pub mod storage;

// Re-export commonly used types
pub use currency::{
    convert, get_rate, list_supported_currencies, validate_currency,
    ConversionRate, BASE_CURRENCY, SUPPORTED_CURRENCIES,
};
pub use entities::{Expense, Wallet};
pub use error::ExpenseError;
pub use manager::{
    Dashboard, ExpenseDetail, ExpenseManager, Snapshot, WalletReport, WalletSummary,
};
pub use sample_data::demo_snapshot;
pub use storage::{load_data, resolve_data_file, save_data, DEFAULT_DATA_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
