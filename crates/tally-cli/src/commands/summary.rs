//! Summary command - per-person paid/consumed/net balances.

use clap::Args;
use console::style;
use rust_decimal::Decimal;

use tally_core::{summarize, Store};

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Text,
    /// JSON balance records
    Json,
}

pub fn run(args: SummaryArgs, store: &Store) -> anyhow::Result<()> {
    let state = store.load()?;
    let summary = summarize(&state.people, &state.receipts);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            let width = summary
                .iter()
                .map(|balance| balance.name.len())
                .max()
                .unwrap_or(4)
                .max(4);
            println!(
                "{:width$}  {:>10}  {:>10}  {:>10}",
                style("Name").bold(),
                style("Paid").bold(),
                style("Consumed").bold(),
                style("Net").bold(),
            );
            for balance in &summary {
                let net = if balance.net >= Decimal::ZERO {
                    style(balance.net).green()
                } else {
                    style(balance.net).red()
                };
                println!(
                    "{:width$}  {:>10}  {:>10}  {:>10}",
                    balance.name, balance.paid, balance.consumed, net,
                );
            }
        }
    }
    Ok(())
}
