use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::client::CreateChannelOptions;
use crate::errors::ValidationError;
use crate::state::State;
use crate::utils::highlight;
use crate::utils::render::render_manifests;
use crate::utils::validate::{exact_args, exactly_one_of, validate_name};

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Create a new Channel")]
pub struct Options {
    #[clap(name = "args", value_name = "NAME", help = "Name of the channel")]
    pub args: Vec<String>,

    #[clap(long = "bus", help = "The bus the channel is backed by")]
    pub bus: Option<String>,

    #[clap(long = "cluster-bus", help = "The cluster bus the channel is backed by")]
    pub cluster_bus: Option<String>,

    #[clap(short = 'n', long = "namespace", help = "The namespace of the channel")]
    pub namespace: Option<String>,

    #[clap(long = "dry-run", help = "Print the channel instead of creating it")]
    pub dry_run: bool,
}

pub fn validate(options: &Options) -> Result<(), ValidationError> {
    exact_args(&options.args, 1)?;
    validate_name(&options.args[0])?;

    exactly_one_of(&[
        ("bus", options.bus.is_some()),
        ("cluster-bus", options.cluster_bus.is_some()),
    ])
}

pub async fn handle(options: Options, state: State, out: &mut impl Write) -> Result<()> {
    validate(&options)?;

    let name = options.args[0].clone();

    let created = state
        .client
        .create_channel(CreateChannelOptions {
            name: name.clone(),
            namespace: options.namespace.unwrap_or_default(),
            bus: options.bus,
            cluster_bus: options.cluster_bus,
            dry_run: options.dry_run,
        })
        .await?;

    if options.dry_run {
        render_manifests(out, &[created])?;
    } else {
        log::info!("Created Channel {}", highlight(&name));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::testing::{assert_mock_error, mock_error, Call, MockClient};
    use crate::client::types::{Channel, ChannelSpec};
    use crate::store::config::Config;

    async fn run(args: &[&str], client: &Arc<MockClient>) -> (Result<()>, String) {
        let options =
            Options::try_parse_from(std::iter::once("create").chain(args.iter().copied())).unwrap();
        let state = State::with_client(client.clone(), Config::default());
        let mut out = vec![];

        let result = handle(options, state, &mut out).await;

        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_no_args() {
        let client = Arc::new(MockClient::default());

        let (result, _) = run(&[], &client).await;

        assert_eq!(result.unwrap_err().to_string(), "accepts 1 arg(s), received 0");
    }

    #[tokio::test]
    async fn test_invalid_name() {
        let client = Arc::new(MockClient::default());

        let (result, _) = run(&[".invalid", "--bus", "b"], &client).await;

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must start and end with an alphanumeric character"));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_without_bus() {
        let client = Arc::new(MockClient::default());

        let (result, _) = run(&["my-channel"], &client).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "at least one of --bus, --cluster-bus must be set"
        );
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_with_both_buses() {
        let client = Arc::new(MockClient::default());

        let (result, _) = run(&["my-channel", "--bus", "b", "--cluster-bus", "cb"], &client).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "at most one of --bus, --cluster-bus must be set"
        );
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_creates_channel() {
        let client = Arc::new(MockClient::default());

        let (result, out) = run(
            &["my-channel", "--cluster-bus", "cb", "--namespace", "ns"],
            &client,
        )
        .await;

        result.unwrap();
        assert_eq!(
            client.calls(),
            vec![Call::CreateChannel(CreateChannelOptions {
                name: "my-channel".to_string(),
                namespace: "ns".to_string(),
                cluster_bus: Some("cb".to_string()),
                ..Default::default()
            })]
        );
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn test_propagates_client_errors() {
        let client = Arc::new(MockClient::default().on_create_channel(Err(mock_error("some error"))));

        let (result, _) = run(
            &["my-channel", "--cluster-bus", "cb", "--namespace", "ns"],
            &client,
        )
        .await;

        assert_mock_error(&result.unwrap_err(), "some error");
    }

    #[tokio::test]
    async fn test_dry_run() {
        let mut channel = Channel::named("my-channel");
        channel.spec = ChannelSpec {
            cluster_bus: Some("cb".to_string()),
            ..Default::default()
        };

        let client = Arc::new(MockClient::default().on_create_channel(Ok(Some(channel))));

        let (result, out) = run(
            &["my-channel", "--cluster-bus", "cb", "--namespace", "ns", "--dry-run"],
            &client,
        )
        .await;

        result.unwrap();
        assert_eq!(
            client.calls(),
            vec![Call::CreateChannel(CreateChannelOptions {
                name: "my-channel".to_string(),
                namespace: "ns".to_string(),
                cluster_bus: Some("cb".to_string()),
                dry_run: true,
                ..Default::default()
            })]
        );
        assert_eq!(out, CHANNEL_CREATE_DRY_RUN);
    }

    const CHANNEL_CREATE_DRY_RUN: &str = "\
metadata:
  creationTimestamp: null
  name: my-channel
spec:
  clusterBus: cb
status: {}
---
";
}
