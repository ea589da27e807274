//! Add command - import an invoice document as a new receipt.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use tracing::{debug, info};

use tally_core::{assemble, Receipt, Store};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Invoice markup file (reads stdin when neither this nor --url is given)
    input: Option<PathBuf>,

    /// Fetch the invoice markup from a URL instead of a file
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Roster name of the person who paid (default: first roster name)
    #[arg(short, long)]
    paid_by: Option<String>,

    /// Receipt title (default: the invoice number)
    #[arg(short, long)]
    title: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON receipt record
    Json,
}

pub async fn run(args: AddArgs, store: &Store) -> anyhow::Result<()> {
    let html = if let Some(url) = &args.url {
        fetch_html(url).await?
    } else if let Some(path) = &args.input {
        fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let receipt = store_receipt(
        store,
        &html,
        args.paid_by.as_deref(),
        args.title.as_deref(),
        args.notes.as_deref(),
    )?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&receipt)?),
        OutputFormat::Text => print_receipt(&receipt),
    }
    Ok(())
}

/// Fetch invoice markup from a URL.
pub(crate) async fn fetch_html(url: &str) -> anyhow::Result<String> {
    info!(url, "fetching invoice markup");
    let client = reqwest::Client::builder()
        .user_agent("tally/1.0")
        .timeout(Duration::from_secs(10))
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Assemble markup into an invoice and append it to the stored state.
pub(crate) fn store_receipt(
    store: &Store,
    html: &str,
    paid_by: Option<&str>,
    title: Option<&str>,
    notes: Option<&str>,
) -> anyhow::Result<Receipt> {
    let mut state = store.load()?;
    let invoice = assemble(html);
    debug!(dialect = ?invoice.dialect, items = invoice.items.len(), "assembled invoice");
    let receipt = state.add_receipt(invoice, paid_by, title, notes).clone();
    store.save(&state)?;
    Ok(receipt)
}

fn print_receipt(receipt: &Receipt) {
    println!(
        "{} {} ({})",
        style("Added receipt").green().bold(),
        style(&receipt.title).bold(),
        receipt.id
    );
    if let Some(supplier) = &receipt.supplier {
        println!("  Supplier: {supplier}");
    }
    if let Some(paid_by) = &receipt.paid_by {
        println!("  Paid by:  {paid_by}");
    }
    println!("  Total:    {} {}", receipt.total_amount, receipt.currency);
    println!("  Items:    {}", receipt.items.len());
    for item in &receipt.items {
        let total = item
            .total
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!("    [{}] {} - {}", item.id, item.description, total);
    }
}
