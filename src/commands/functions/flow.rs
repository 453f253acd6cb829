use anyhow::Result;
use serde::Serialize;

use crate::client::types::{Channel, Function, Subscription};
use crate::client::{
    Client, CreateChannelOptions, CreateFunctionOptions, CreateSubscriptionOptions,
};

/// Binds a function to a channel it should receive its input from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub channel: String,
    pub bus: Option<String>,
    pub cluster_bus: Option<String>,
}

/// A single creation call of the `function create` flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Function(CreateFunctionOptions),
    Channel(CreateChannelOptions),
    Subscription(CreateSubscriptionOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Created {
    Function(Function),
    Channel(Channel),
    Subscription(Subscription),
}

impl Step {
    pub fn describe(&self) -> String {
        match self {
            Step::Function(options) => format!("function `{}`", options.name),
            Step::Channel(options) => format!("channel `{}`", options.name),
            Step::Subscription(options) => format!("subscription `{}`", options.name),
        }
    }

    async fn run(self, client: &dyn Client) -> Result<Option<Created>> {
        Ok(match self {
            Step::Function(options) => client.create_function(options).await?.map(Created::Function),
            Step::Channel(options) => client.create_channel(options).await?.map(Created::Channel),
            Step::Subscription(options) => client
                .create_subscription(options)
                .await?
                .map(Created::Subscription),
        })
    }
}

/// Orders the calls needed to create `function`, wired to `input` if given.
///
/// The subscription is named after the function and references both the
/// channel and the function, so it always comes last.
pub fn plan(function: CreateFunctionOptions, input: Option<Input>) -> Vec<Step> {
    let Some(input) = input else {
        return vec![Step::Function(function)];
    };

    let channel = CreateChannelOptions {
        name: input.channel.clone(),
        namespace: function.namespace.clone(),
        bus: input.bus,
        cluster_bus: input.cluster_bus,
        dry_run: function.dry_run,
    };

    let subscription = CreateSubscriptionOptions {
        name: function.name.clone(),
        namespace: function.namespace.clone(),
        channel: input.channel,
        subscriber: function.name.clone(),
        dry_run: function.dry_run,
    };

    vec![
        Step::Function(function),
        Step::Channel(channel),
        Step::Subscription(subscription),
    ]
}

/// Outcome of running a plan. Steps that completed before a failure are not
/// undone.
#[derive(Debug, Default)]
pub struct Execution {
    /// Descriptions of the steps that succeeded, in order
    pub completed: Vec<String>,
    /// What each completed step returned, in the same order
    pub created: Vec<Option<Created>>,
    pub failure: Option<anyhow::Error>,
}

impl Execution {
    pub fn into_result(self) -> Result<Vec<Option<Created>>> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.created),
        }
    }
}

/// Runs `steps` one after the other, stopping at the first failure.
pub async fn execute(client: &dyn Client, steps: Vec<Step>) -> Execution {
    let mut execution = Execution::default();

    for step in steps {
        let description = step.describe();

        log::debug!("Creating {description}");

        match step.run(client).await {
            Ok(created) => {
                execution.completed.push(description);
                execution.created.push(created);
            }

            Err(err) => {
                log::debug!("Failed to create {description}");

                execution.failure = Some(err);
                break;
            }
        }
    }

    execution
}
