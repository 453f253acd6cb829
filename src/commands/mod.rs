pub mod channels;
pub mod completions;
pub mod functions;
pub mod subscriptions;

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "function", alias = "functions", alias = "fn")]
    Function(functions::Options),
    #[clap(name = "channel", alias = "channels")]
    Channel(channels::Options),
    #[clap(name = "subscription", alias = "subscriptions", alias = "sub")]
    Subscription(subscriptions::Options),
    Completions(completions::Options),
}

pub async fn handle_command(command: Commands, state: State, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Function(options) => functions::handle(options, state, out).await,
        Commands::Channel(options) => channels::handle(options, state, out).await,
        Commands::Subscription(options) => subscriptions::handle(options, state, out).await,
        Commands::Completions(options) => {
            completions::handle(options, out);

            Ok(())
        }
    }
}
