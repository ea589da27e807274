//! Receipts command - list, inspect, or remove stored receipts.

use clap::{Args, Subcommand};
use console::style;

use tally_core::{Store, TallyError};

/// Arguments for the receipts command.
#[derive(Args)]
pub struct ReceiptsArgs {
    #[command(subcommand)]
    command: Option<ReceiptsCommand>,
}

#[derive(Subcommand)]
enum ReceiptsCommand {
    /// List stored receipts (default)
    List,
    /// Show one receipt with its items and participants
    Show {
        /// Receipt id
        id: String,
    },
    /// Remove a receipt
    Rm {
        /// Receipt id
        id: String,
    },
}

pub fn run(args: ReceiptsArgs, store: &Store) -> anyhow::Result<()> {
    match args.command.unwrap_or(ReceiptsCommand::List) {
        ReceiptsCommand::List => {
            let state = store.load()?;
            for receipt in &state.receipts {
                println!(
                    "{}  {}  {} {}  paid by {}",
                    receipt.id,
                    style(&receipt.title).bold(),
                    receipt.total_amount,
                    receipt.currency,
                    receipt.paid_by.as_deref().unwrap_or("?")
                );
            }
        }
        ReceiptsCommand::Show { id } => {
            let state = store.load()?;
            let receipt = state
                .receipts
                .iter()
                .find(|r| r.id == id)
                .ok_or(TallyError::ReceiptNotFound(id))?;
            println!("{} ({})", style(&receipt.title).bold(), receipt.id);
            if let Some(supplier) = &receipt.supplier {
                println!("Supplier: {supplier}");
            }
            println!(
                "Total: {} {}  paid by {}",
                receipt.total_amount,
                receipt.currency,
                receipt.paid_by.as_deref().unwrap_or("?")
            );
            for item in &receipt.items {
                let total = item
                    .total
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let participants = if item.participants.is_empty() {
                    style("unassigned").dim().to_string()
                } else {
                    item.participants.join(", ")
                };
                println!("  [{}] {} - {}  ({})", item.id, item.description, total, participants);
            }
        }
        ReceiptsCommand::Rm { id } => {
            let mut state = store.load()?;
            state.delete_receipt(&id)?;
            store.save(&state)?;
            println!("{} {}", style("Removed").green().bold(), id);
        }
    }
    Ok(())
}
