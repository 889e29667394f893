// Command line interface for the expense manager.
//
// Every command prints a JSON payload to stdout; diagnostics go to stderr
// via tracing. Mutating commands persist the registry after applying the
// mutation, read-only commands never write.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use expense_manager::currency::list_supported_currencies;
use expense_manager::manager::ExpenseManager;
use expense_manager::sample_data::demo_snapshot;
use expense_manager::storage::{load_data, resolve_data_file, save_data};

/// Expense management app supporting multiple wallets and a consolidated dashboard.
#[derive(Parser)]
#[command(name = "expense-manager")]
#[command(version)]
#[command(about = "Track expenses across multi-currency wallets", long_about = None)]
struct Cli {
    /// Path to the data file (defaults to ./expense_data.json)
    #[arg(long, global = true)]
    data_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new wallet
    CreateWallet {
        /// Name of the wallet
        name: String,
        /// Currency code, e.g. USD
        currency: String,
        /// Initial balance for the wallet
        #[arg(long, default_value_t = 0.0)]
        balance: f64,
    },

    /// Add an expense to a wallet
    AddExpense {
        /// Name of the wallet
        wallet: String,
        /// Amount of the expense
        amount: f64,
        /// Description of the expense
        description: String,
        /// Category for the expense
        #[arg(long, default_value = "general")]
        category: String,
    },

    /// List wallets and balances
    ListWallets,

    /// Show consolidated dashboard in a target currency
    Dashboard {
        /// Target currency for the dashboard
        currency: String,
    },

    /// Quickly preview the consolidated dashboard
    Preview {
        /// Target currency for the preview (defaults to USD)
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Use built-in sample data without reading or writing any files
        #[arg(long)]
        demo: bool,
    },

    /// Show details for a wallet
    WalletReport {
        /// Name of the wallet
        wallet: String,
        /// Optional target currency for conversion
        #[arg(long)]
        currency: Option<String>,
    },

    /// List supported currency codes
    SupportedCurrencies,
}

fn print_json<T: serde::Serialize>(payload: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_file = resolve_data_file(cli.data_file.as_deref());

    match cli.command {
        Commands::CreateWallet {
            name,
            currency,
            balance,
        } => {
            let mut manager = ExpenseManager::from_snapshot(load_data(&data_file)?);
            let wallet_name = manager.create_wallet(&name, &currency, balance)?.name.clone();
            save_data(&manager.to_snapshot(), &data_file)?;
            print_json(&json!({
                "message": format!("Wallet '{}' created.", wallet_name),
            }))?;
        }

        Commands::AddExpense {
            wallet,
            amount,
            description,
            category,
        } => {
            let mut manager = ExpenseManager::from_snapshot(load_data(&data_file)?);
            let expense = manager.add_expense(&wallet, &description, amount, &category)?;
            save_data(&manager.to_snapshot(), &data_file)?;
            print_json(&json!({
                "message": format!(
                    "Added expense '{}' to wallet '{}'.",
                    expense.description, wallet
                ),
                "expense": expense,
            }))?;
        }

        Commands::ListWallets => {
            let manager = ExpenseManager::from_snapshot(load_data(&data_file)?);
            let wallets: Vec<_> = manager
                .list_wallets()
                .map(|wallet| {
                    json!({
                        "name": wallet.name,
                        "currency": wallet.currency,
                        "balance": wallet.balance,
                        "expenses": wallet.expenses.len(),
                    })
                })
                .collect();
            print_json(&json!({ "wallets": wallets }))?;
        }

        Commands::Dashboard { currency } => {
            let manager = ExpenseManager::from_snapshot(load_data(&data_file)?);
            let dashboard = manager.consolidated_dashboard(&currency)?;
            print_json(&dashboard)?;
        }

        Commands::Preview { currency, demo } => {
            let snapshot = if demo {
                demo_snapshot()
            } else {
                load_data(&data_file)?
            };
            let manager = ExpenseManager::from_snapshot(snapshot);
            let target = currency.to_uppercase();
            let dashboard = manager.consolidated_dashboard(&target)?;
            print_json(&json!({
                "preview": {
                    "target_currency": target,
                    "total_balance": dashboard.total_balance,
                    "total_spent": dashboard.total_spent,
                    "net_position": dashboard.net_position,
                    "using_demo_data": demo,
                }
            }))?;
        }

        Commands::WalletReport { wallet, currency } => {
            let manager = ExpenseManager::from_snapshot(load_data(&data_file)?);
            let report = manager.wallet_report(&wallet, currency.as_deref())?;
            print_json(&report)?;
        }

        Commands::SupportedCurrencies => {
            print_json(&json!({
                "supported_currencies": list_supported_currencies(),
            }))?;
        }
    }

    Ok(())
}
