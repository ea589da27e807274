//! CLI application for shared receipt settlement.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{add, assign, people, qr, receipts, summary};

/// Shared receipts - import e-invoices, split items, settle up
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the state file
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an invoice document as a new receipt
    Add(add::AddArgs),

    /// Decode a receipt QR image and import the invoice behind it
    Qr(qr::QrArgs),

    /// Manage the roster of people
    People(people::PeopleArgs),

    /// Assign item participants on a receipt
    Assign(assign::AssignArgs),

    /// List, inspect, or remove stored receipts
    Receipts(receipts::ReceiptsArgs),

    /// Show per-person paid/consumed/net balances
    Summary(summary::SummaryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let store = commands::open_store(cli.state.as_deref());

    // Execute command
    match cli.command {
        Commands::Add(args) => add::run(args, &store).await,
        Commands::Qr(args) => qr::run(args, &store).await,
        Commands::People(args) => people::run(args, &store),
        Commands::Assign(args) => assign::run(args, &store),
        Commands::Receipts(args) => receipts::run(args, &store),
        Commands::Summary(args) => summary::run(args, &store),
    }
}
