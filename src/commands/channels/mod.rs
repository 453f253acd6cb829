mod create;
mod delete;
mod list;
mod utils;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser)]
pub enum Commands {
    #[clap(name = "create", alias = "new")]
    Create(create::Options),
    #[clap(name = "list", alias = "ls")]
    List(list::Options),
    #[clap(name = "delete", alias = "rm")]
    Delete(delete::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Interact with Channels")]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State, out: &mut impl Write) -> Result<()> {
    match options.commands {
        Commands::Create(options) => create::handle(options, state, out).await,
        Commands::List(options) => list::handle(options, state, out).await,
        Commands::Delete(options) => delete::handle(options, state).await,
    }
}
