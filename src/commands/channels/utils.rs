use std::io::Write;

use anyhow::{anyhow, Result};
use tabwriter::TabWriter;

use crate::client::types::Channel;

pub fn format_channels(channels: &[Channel], title: bool) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(tw, "NAME")?;
    }

    for channel in channels {
        writeln!(tw, "{}", channel.metadata.name)?;
    }

    let table = tw
        .into_inner()
        .map_err(|_| anyhow!("Failed to format the channels table"))?;

    Ok(String::from_utf8(table)?
        .lines()
        .map(std::string::ToString::to_string)
        .collect())
}
