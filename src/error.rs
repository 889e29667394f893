// Domain errors - all local, recoverable validation failures
//
// Every error surfaces to the immediate caller unmodified; the presentation
// layer turns it into a user-visible message. Nothing here represents
// corrupted internal state.

use thiserror::Error;

use crate::currency::SUPPORTED_LIST;

#[derive(Debug, Error, PartialEq)]
pub enum ExpenseError {
    /// Unknown currency code, anywhere validation is invoked.
    #[error("Currency '{0}' is not supported. Supported currencies: {list}.", list = SUPPORTED_LIST)]
    CurrencyNotSupported(String),

    /// Duplicate case-insensitive wallet name on creation.
    #[error("A wallet named '{0}' already exists.")]
    WalletExists(String),

    /// Wallet lookup miss.
    #[error("Wallet '{0}' not found.")]
    WalletNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_error_lists_supported_codes() {
        let err = ExpenseError::CurrencyNotSupported("XYZ".to_string());
        let message = err.to_string();
        assert!(message.contains("'XYZ'"));
        assert!(message.contains("AUD, EUR, GBP, JPY, USD"));
    }

    #[test]
    fn test_wallet_error_messages_name_the_wallet() {
        assert_eq!(
            ExpenseError::WalletExists("Personal".to_string()).to_string(),
            "A wallet named 'Personal' already exists."
        );
        assert_eq!(
            ExpenseError::WalletNotFound("Travel".to_string()).to_string(),
            "Wallet 'Travel' not found."
        );
    }
}
