//! People command - manage the roster.

use clap::{Args, Subcommand};
use console::style;

use tally_core::Store;

/// Arguments for the people command.
#[derive(Args)]
pub struct PeopleArgs {
    #[command(subcommand)]
    command: Option<PeopleCommand>,
}

#[derive(Subcommand)]
enum PeopleCommand {
    /// List roster names (default)
    List,
    /// Add a name to the roster
    Add {
        /// Person name
        name: String,
    },
}

pub fn run(args: PeopleArgs, store: &Store) -> anyhow::Result<()> {
    match args.command.unwrap_or(PeopleCommand::List) {
        PeopleCommand::List => {
            let state = store.load()?;
            for name in &state.people {
                println!("{name}");
            }
        }
        PeopleCommand::Add { name } => {
            let mut state = store.load()?;
            if state.add_person(&name) {
                store.save(&state)?;
                println!("{} {}", style("Added").green().bold(), name);
            } else {
                println!("{} already on the roster or empty", style(&name).bold());
            }
        }
    }
    Ok(())
}
