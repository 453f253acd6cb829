#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use riff_cli::commands::handle_command;
use riff_cli::state::{State, StateOptions};
use riff_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = match State::new(StateOptions {
        override_api_url: cli.master.or_else(|| std::env::var("RIFF_API_URL").ok()),
        override_token: std::env::var("RIFF_TOKEN").ok(),
    })
    .await
    {
        Ok(state) => state,
        Err(error) => {
            log::error!("{error}");
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout();

    if let Err(error) = handle_command(cli.commands, state, &mut stdout).await {
        log::error!("{error}");
        std::process::exit(1);
    }

    Ok(())
}
