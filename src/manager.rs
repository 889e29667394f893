// Expense Manager - wallet registry and reporting
//
// An in-memory registry of wallets keyed by lower-cased name, with the two
// reporting queries (consolidated dashboard, single-wallet report) that
// depend on the currency table. All operations are synchronous and mutate
// at most one wallet, so each is atomic on its own.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::{convert, list_supported_currencies, validate_currency};
use crate::entities::{Expense, Wallet};
use crate::error::ExpenseError;

// ============================================================================
// SNAPSHOT BOUNDARY
// ============================================================================

/// Serialized form of the full registry, matching the on-disk JSON shape:
/// `{"wallets": [{name, currency, balance, expenses: [...]}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

// ============================================================================
// REPORT TYPES
// ============================================================================

/// Per-wallet line of the consolidated dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct WalletSummary {
    pub name: String,
    pub currency: String,
    pub balance: f64,
    pub balance_in_target: f64,
    pub total_spent: f64,
    pub total_spent_in_target: f64,
}

/// Aggregate report over all wallets, converted into one target currency.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub target_currency: String,
    pub total_balance: f64,
    pub total_spent: f64,
    pub net_position: f64,
    pub wallets: Vec<WalletSummary>,
    pub supported_currencies: BTreeMap<String, f64>,
}

/// One expense line of a wallet report, carrying its converted amount.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseDetail {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub amount_in_target: f64,
}

/// Detail report for a single wallet.
#[derive(Debug, Clone, Serialize)]
pub struct WalletReport {
    pub wallet: String,
    pub wallet_currency: String,
    pub balance: f64,
    pub balance_in_target: f64,
    pub expenses: Vec<ExpenseDetail>,
    pub target_currency: String,
}

// ============================================================================
// MANAGER
// ============================================================================

/// Registry of wallets keyed by lower-cased name.
///
/// Insertion order is preserved (the map is an [`IndexMap`]) so report
/// accumulation runs in a deterministic order; float summation is not
/// associative-safe across reorderings.
#[derive(Debug, Default)]
pub struct ExpenseManager {
    wallets: IndexMap<String, Wallet>,
}

impl ExpenseManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        ExpenseManager {
            wallets: IndexMap::new(),
        }
    }

    /// Rebuild a manager from a deserialized snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut manager = ExpenseManager::new();
        for wallet in snapshot.wallets {
            let key = wallet.name.to_lowercase();
            manager.wallets.insert(key, wallet);
        }
        manager
    }

    /// Serialize the full registry back into the snapshot shape.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            wallets: self.wallets.values().cloned().collect(),
        }
    }

    // ------------------------------------------------------------------
    // Wallet operations
    // ------------------------------------------------------------------

    /// Register a new wallet. Names are compared case-insensitively.
    pub fn create_wallet(
        &mut self,
        name: &str,
        currency: &str,
        balance: f64,
    ) -> Result<&Wallet, ExpenseError> {
        let key = name.to_lowercase();
        if self.wallets.contains_key(&key) {
            return Err(ExpenseError::WalletExists(name.to_string()));
        }
        validate_currency(currency)?;
        debug!(wallet = name, currency, balance, "creating wallet");
        let wallet = Wallet::new(name.to_string(), currency.to_string(), balance);
        Ok(self.wallets.entry(key).or_insert(wallet))
    }

    /// Look up a wallet by name, case-insensitively.
    pub fn get_wallet(&self, name: &str) -> Result<&Wallet, ExpenseError> {
        self.wallets
            .get(&name.to_lowercase())
            .ok_or_else(|| ExpenseError::WalletNotFound(name.to_string()))
    }

    fn get_wallet_mut(&mut self, name: &str) -> Result<&mut Wallet, ExpenseError> {
        self.wallets
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| ExpenseError::WalletNotFound(name.to_string()))
    }

    /// All wallets in registry (insertion) order.
    pub fn list_wallets(&self) -> impl Iterator<Item = &Wallet> {
        self.wallets.values()
    }

    // ------------------------------------------------------------------
    // Expense operations
    // ------------------------------------------------------------------

    /// Record an expense against a wallet and return the created record.
    ///
    /// The amount is taken as denominated in the wallet's own currency; no
    /// currency validation happens here.
    pub fn add_expense(
        &mut self,
        wallet_name: &str,
        description: &str,
        amount: f64,
        category: &str,
    ) -> Result<Expense, ExpenseError> {
        let wallet = self.get_wallet_mut(wallet_name)?;
        debug!(wallet = wallet_name, amount, category, "adding expense");
        let expense = Expense::new(description.to_string(), amount, category.to_string());
        wallet.add_expense(expense.clone());
        Ok(expense)
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    /// Aggregate every wallet's balance and spend into the target currency.
    ///
    /// Accumulation follows [`Self::list_wallets`] order.
    pub fn consolidated_dashboard(&self, target_currency: &str) -> Result<Dashboard, ExpenseError> {
        validate_currency(target_currency)?;

        let mut total_balance = 0.0;
        let mut total_spent = 0.0;
        let mut wallets_summary = Vec::with_capacity(self.wallets.len());

        for wallet in self.list_wallets() {
            let balance_converted = convert(wallet.balance, &wallet.currency, target_currency)?;
            let spent = wallet.total_spent();
            let spent_converted = convert(spent, &wallet.currency, target_currency)?;
            total_balance += balance_converted;
            total_spent += spent_converted;
            wallets_summary.push(WalletSummary {
                name: wallet.name.clone(),
                currency: wallet.currency.clone(),
                balance: wallet.balance,
                balance_in_target: balance_converted,
                total_spent: spent,
                total_spent_in_target: spent_converted,
            });
        }

        Ok(Dashboard {
            target_currency: target_currency.to_string(),
            total_balance,
            total_spent,
            net_position: total_balance - total_spent,
            wallets: wallets_summary,
            supported_currencies: list_supported_currencies(),
        })
    }

    /// Detail report for one wallet, every expense converted individually.
    ///
    /// When no target currency is given, the wallet's own currency is used,
    /// which leaves every converted figure equal to its native one.
    pub fn wallet_report(
        &self,
        wallet_name: &str,
        target_currency: Option<&str>,
    ) -> Result<WalletReport, ExpenseError> {
        let wallet = self.get_wallet(wallet_name)?;
        let target = target_currency.unwrap_or(&wallet.currency);
        validate_currency(target)?;

        let mut expenses = Vec::with_capacity(wallet.expenses.len());
        for expense in &wallet.expenses {
            expenses.push(ExpenseDetail {
                description: expense.description.clone(),
                amount: expense.amount,
                category: expense.category.clone(),
                amount_in_target: convert(expense.amount, &wallet.currency, target)?,
            });
        }

        Ok(WalletReport {
            wallet: wallet.name.clone(),
            wallet_currency: wallet.currency.clone(),
            balance: wallet.balance,
            balance_in_target: convert(wallet.balance, &wallet.currency, target)?,
            expenses,
            target_currency: target.to_string(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
