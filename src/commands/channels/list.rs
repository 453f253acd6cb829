use std::io::Write;

use anyhow::Result;
use clap::Parser;

use super::utils::format_channels;
use crate::client::ListChannelOptions;
use crate::state::State;
use crate::utils::validate::exact_args;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "List all Channels")]
pub struct Options {
    #[clap(name = "args", hide = true)]
    pub args: Vec<String>,

    #[clap(short = 'n', long = "namespace", help = "The namespace of the channels")]
    pub namespace: Option<String>,
}

pub async fn handle(options: Options, state: State, out: &mut impl Write) -> Result<()> {
    exact_args(&options.args, 0)?;

    let channels = state
        .client
        .list_channels(ListChannelOptions {
            namespace: options.namespace.unwrap_or_default(),
        })
        .await?;

    let channels_fmt = format_channels(&channels.items, true)?;

    writeln!(out, "{}", channels_fmt.join("\n"))?;

    Ok(())
}
