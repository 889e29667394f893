// Built-in sample dataset for the preview command

use crate::entities::{Expense, Wallet};
use crate::manager::Snapshot;

/// A representative dataset with multiple wallets and expenses.
///
/// The structure mirrors what the application persists on disk, so the
/// preview command can show realistic consolidated totals without requiring
/// the user to create wallets first.
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        wallets: vec![
            Wallet {
                name: "Personal".to_string(),
                currency: "USD".to_string(),
                balance: 1200.0,
                expenses: vec![
                    Expense {
                        description: "Rent".to_string(),
                        amount: 700.0,
                        category: "housing".to_string(),
                    },
                    Expense {
                        description: "Groceries".to_string(),
                        amount: 150.0,
                        category: "food".to_string(),
                    },
                ],
            },
            Wallet {
                name: "Travel".to_string(),
                currency: "EUR".to_string(),
                balance: 500.0,
                expenses: vec![Expense {
                    description: "Flights".to_string(),
                    amount: 200.0,
                    category: "travel".to_string(),
                }],
            },
            Wallet {
                name: "Savings".to_string(),
                currency: "JPY".to_string(),
                balance: 100000.0,
                expenses: vec![],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::ExpenseManager;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_demo_snapshot_shape() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.wallets.len(), 3);
        assert_eq!(snapshot.wallets[0].expenses.len(), 2);
        assert_eq!(snapshot.wallets[1].expenses.len(), 1);
        assert!(snapshot.wallets[2].expenses.is_empty());
    }

    // Golden regression over the demo data: 1200 USD + 500/0.92 EUR +
    // 100000/140 JPY in balances, 850 USD + 200/0.92 EUR in spend.
    #[test]
    fn test_demo_dashboard_golden_totals_in_usd() {
        let manager = ExpenseManager::from_snapshot(demo_snapshot());
        let dashboard = manager.consolidated_dashboard("USD").unwrap();

        assert!((dashboard.total_balance - 2457.7639751552797).abs() < TOLERANCE);
        assert!((dashboard.total_spent - 1067.391304347826).abs() < TOLERANCE);
        assert!(
            (dashboard.net_position - (dashboard.total_balance - dashboard.total_spent)).abs()
                < TOLERANCE
        );
    }
}
