// Wallet Entity - a named account holding a balance and spending records

use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// A named account with a currency, a balance, and an ordered expense list.
///
/// The registry keys wallets by their lower-cased name; the original casing
/// is preserved here for display. The balance invariant is maintained
/// incrementally: it starts at the initial balance and is decremented by
/// each recorded expense, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Display name (original casing).
    pub name: String,

    /// Currency code (USD, EUR, ...), validated at creation time.
    pub currency: String,

    /// Current balance in the wallet's own currency.
    /// Snapshots may omit this field; it then defaults to zero.
    #[serde(default)]
    pub balance: f64,

    /// Spending records in insertion order.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Wallet {
    /// Create a new wallet with no recorded expenses.
    pub fn new(name: String, currency: String, balance: f64) -> Self {
        Wallet {
            name,
            currency,
            balance,
            expenses: Vec::new(),
        }
    }

    /// Record an expense: append it and reduce the balance by its amount.
    ///
    /// The only mutation path for the balance outside of snapshot
    /// construction.
    pub fn add_expense(&mut self, expense: Expense) {
        self.balance -= expense.amount;
        self.expenses.push(expense);
    }

    /// Total of all recorded expense amounts (not the net balance).
    ///
    /// Recomputed on demand; wallets hold human-scale expense counts.
    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|exp| exp.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet_with_expense() -> Wallet {
        let mut wallet = Wallet::new("Personal".to_string(), "USD".to_string(), 1000.0);
        wallet.add_expense(Expense::new(
            "Groceries".to_string(),
            120.0,
            "food".to_string(),
        ));
        wallet
    }

    #[test]
    fn test_add_expense_decrements_balance() {
        let wallet = wallet_with_expense();
        assert_eq!(wallet.balance, 880.0);
        assert_eq!(wallet.expenses.len(), 1);
    }

    #[test]
    fn test_total_spent_sums_amounts() {
        let mut wallet = wallet_with_expense();
        wallet.add_expense(Expense::new(
            "Coffee".to_string(),
            4.5,
            "food".to_string(),
        ));
        assert_eq!(wallet.total_spent(), 124.5);
        // total_spent is the gross outflow, not the net balance
        assert_eq!(wallet.balance, 875.5);
    }

    #[test]
    fn test_negative_amount_acts_as_refund() {
        let mut wallet = Wallet::new("Personal".to_string(), "USD".to_string(), 100.0);
        wallet.add_expense(Expense::new(
            "Returned jacket".to_string(),
            -60.0,
            "clothing".to_string(),
        ));
        assert_eq!(wallet.balance, 160.0);
        assert_eq!(wallet.total_spent(), -60.0);
    }

    #[test]
    fn test_expenses_preserve_insertion_order() {
        let mut wallet = Wallet::new("Personal".to_string(), "USD".to_string(), 0.0);
        for name in ["first", "second", "third"] {
            wallet.add_expense(Expense::new(name.to_string(), 1.0, "general".to_string()));
        }
        let order: Vec<&str> = wallet
            .expenses
            .iter()
            .map(|exp| exp.description.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_wallet_missing_balance_defaults_to_zero() {
        let raw = serde_json::json!({
            "name": "Imported",
            "currency": "GBP",
            "expenses": [],
        });
        let wallet: Wallet = serde_json::from_value(raw).unwrap();
        assert_eq!(wallet.balance, 0.0);
        assert!(wallet.expenses.is_empty());
    }
}
