pub mod client;
pub mod commands;
pub mod config;
pub mod errors;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "riff",
    about = "Create functions, channels and subscriptions on riff",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        long = "master",
        help = "The address of the Kubernetes API server, defaults to `http://localhost:8001`",
        global = true
    )]
    pub master: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}
