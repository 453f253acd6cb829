use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::client::CreateSubscriptionOptions;
use crate::errors::ValidationError;
use crate::state::State;
use crate::utils::highlight;
use crate::utils::render::render_manifests;
use crate::utils::validate::{exact_args, required_flags, validate_name};

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Create a new Subscription, binding a Channel to a subscriber")]
pub struct Options {
    #[clap(name = "args", value_name = "NAME", help = "Name of the subscription")]
    pub args: Vec<String>,

    #[clap(short = 'c', long = "channel", help = "The channel to subscribe to")]
    pub channel: Option<String>,

    #[clap(
        short = 's',
        long = "subscriber",
        help = "The function receiving the messages of the channel"
    )]
    pub subscriber: Option<String>,

    #[clap(short = 'n', long = "namespace", help = "The namespace of the subscription")]
    pub namespace: Option<String>,

    #[clap(long = "dry-run", help = "Print the subscription instead of creating it")]
    pub dry_run: bool,
}

pub fn validate(options: &Options) -> Result<(), ValidationError> {
    exact_args(&options.args, 1)?;
    validate_name(&options.args[0])?;

    required_flags(&[
        ("channel", options.channel.is_some()),
        ("subscriber", options.subscriber.is_some()),
    ])?;

    for reference in [&options.channel, &options.subscriber].into_iter().flatten() {
        validate_name(reference)?;
    }

    Ok(())
}

pub async fn handle(options: Options, state: State, out: &mut impl Write) -> Result<()> {
    validate(&options)?;

    let name = options.args[0].clone();
    let channel = options.channel.unwrap_or_default();
    let subscriber = options.subscriber.unwrap_or_default();

    let created = state
        .client
        .create_subscription(CreateSubscriptionOptions {
            name: name.clone(),
            namespace: options.namespace.unwrap_or_default(),
            channel: channel.clone(),
            subscriber: subscriber.clone(),
            dry_run: options.dry_run,
        })
        .await?;

    if options.dry_run {
        render_manifests(out, &[created])?;
    } else {
        log::info!(
            "Created Subscription {} from {} to {}",
            highlight(&name),
            highlight(&channel),
            highlight(&subscriber)
        );
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::testing::{assert_mock_error, mock_error, Call, MockClient};
    use crate::client::types::{Subscription, SubscriptionSpec};
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
    async fn test_missing_flags() {
        let client = Arc::new(MockClient::default());

        let (result, _) = run(&["square"], &client).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            r#"required flag(s) "channel", "subscriber" not set"#
        );
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_reference() {
        let client = Arc::new(MockClient::default());

        let (result, _) = run(&["square", "--channel", "Numbers", "--subscriber", "square"], &client).await;

        assert!(matches!(
            result.unwrap_err().downcast::<ValidationError>().unwrap(),
            ValidationError::InvalidName { name } if name == "Numbers"
        ));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_creates_subscription() {
        let client = Arc::new(MockClient::default());

        let (result, out) = run(
            &["square", "--channel", "numbers", "--subscriber", "square", "-n", "ns"],
            &client,
        )
        .await;

        result.unwrap();
        assert_eq!(
            client.calls(),
            vec![Call::CreateSubscription(CreateSubscriptionOptions {
                name: "square".to_string(),
                namespace: "ns".to_string(),
                channel: "numbers".to_string(),
                subscriber: "square".to_string(),
                dry_run: false,
            })]
        );
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn test_propagates_client_errors() {
        let client =
            Arc::new(MockClient::default().on_create_subscription(Err(mock_error("some error"))));

        let (result, _) = run(&["square", "--channel", "numbers", "--subscriber", "square"], &client).await;

        assert_mock_error(&result.unwrap_err(), "some error");
    }

    #[tokio::test]
    async fn test_dry_run() {
        let mut subscription = Subscription::named("square");
        subscription.spec = SubscriptionSpec {
            channel: "numbers".to_string(),
            subscriber: "square".to_string(),
        };

        let client =
            Arc::new(MockClient::default().on_create_subscription(Ok(Some(subscription))));

        let (result, out) = run(
            &["square", "--channel", "numbers", "--subscriber", "square", "--dry-run"],
            &client,
        )
        .await;

        result.unwrap();
        assert_eq!(
            out,
            "metadata:\n  creationTimestamp: null\n  name: square\nspec:\n  channel: numbers\n  subscriber: square\nstatus: {}\n---\n"
        );
    }
}
