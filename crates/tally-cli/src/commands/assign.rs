//! Assign command - attach participants to receipt items.

use clap::Args;
use console::style;

use tally_core::{BulkAssign, Store};

/// Arguments for the assign command.
#[derive(Args)]
pub struct AssignArgs {
    /// Receipt id
    receipt: String,

    /// Item id to assign participants to
    #[arg(short, long, conflicts_with_all = ["all", "none"])]
    item: Option<String>,

    /// Participant names (unknown names are dropped)
    #[arg(short, long, num_args = 0.., requires = "item")]
    participants: Vec<String>,

    /// Attach the full roster to every item on the receipt
    #[arg(long, conflicts_with = "none")]
    all: bool,

    /// Clear participants from every item on the receipt
    #[arg(long)]
    none: bool,
}

pub fn run(args: AssignArgs, store: &Store) -> anyhow::Result<()> {
    let mut state = store.load()?;

    if args.all || args.none {
        let mode = if args.all { BulkAssign::All } else { BulkAssign::None };
        state.bulk_participants(&args.receipt, mode)?;
    } else if let Some(item) = &args.item {
        state.set_participants(&args.receipt, item, &args.participants)?;
    } else {
        anyhow::bail!("pass --item <id>, --all, or --none");
    }

    store.save(&state)?;
    println!("{}", style("Updated participants").green().bold());
    Ok(())
}
