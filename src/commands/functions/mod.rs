mod create;
pub mod flow;
pub mod invokers;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser)]
pub enum Commands {
    #[clap(name = "create", alias = "new")]
    Create(create::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Interact with function resources")]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State, out: &mut impl Write) -> Result<()> {
    match options.commands {
        Commands::Create(options) => create::handle(options, state, out).await,
    }
}
