use anyhow::Result;
use clap::Parser;

use crate::client::DeleteChannelOptions;
use crate::state::State;
use crate::utils::highlight;
use crate::utils::validate::exact_args;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Delete a Channel")]
pub struct Options {
    #[clap(name = "args", value_name = "NAME", help = "Name of the channel")]
    pub args: Vec<String>,

    #[clap(short = 'n', long = "namespace", help = "The namespace of the channel")]
    pub namespace: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    exact_args(&options.args, 1)?;

    let name = options.args[0].clone();

    log::debug!("Deleting Channel `{name}`");

    state
        .client
        .delete_channel(DeleteChannelOptions {
            name: name.clone(),
            namespace: options.namespace.unwrap_or_default(),
        })
        .await?;

    log::info!("Deleted Channel {}", highlight(&name));

    Ok(())
}
