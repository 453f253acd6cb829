use std::io::Write;

use anyhow::Result;
use clap::Parser;

use super::flow::{execute, plan, Input};
use super::invokers::Invokers;
use crate::client::CreateFunctionOptions;
use crate::config::DEFAULT_GIT_REVISION;
use crate::errors::ValidationError;
use crate::state::State;
use crate::utils::highlight;
use crate::utils::render::render_manifests;
use crate::utils::validate::{
    exact_args, one_of_when, required_flags, validate_env, validate_env_from, validate_name,
};

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Create a new function resource, with optional input binding")]
pub struct Options {
    #[clap(
        name = "args",
        value_name = "INVOKER NAME",
        help = "The invoker to run the function with, followed by the name of the function"
    )]
    pub args: Vec<String>,

    #[clap(long = "image", help = "The name of the image to build")]
    pub image: Option<String>,

    #[clap(long = "git-repo", help = "The git repository URL holding the function source")]
    pub git_repo: Option<String>,

    #[clap(
        long = "git-revision",
        help = "The git revision to build, defaults to `master`"
    )]
    pub git_revision: Option<String>,

    #[clap(
        long = "invoker-url",
        help = "The URL of the invoker manifest, overrides the one of INVOKER"
    )]
    pub invoker_url: Option<String>,

    #[clap(
        short = 'e',
        long = "env",
        help = "Environment variable to set, in the form of `KEY=value`"
    )]
    pub env: Vec<String>,

    #[clap(
        long = "env-from",
        help = "Environment variable taken from a secret or config map key, in the form of `secretKeyRef:<name>:<key>` or `configMapKeyRef:<name>:<key>`"
    )]
    pub env_from: Vec<String>,

    #[clap(
        short = 'i',
        long = "input",
        help = "The name of a channel to create and subscribe the function to"
    )]
    pub input: Option<String>,

    #[clap(long = "bus", help = "The bus of the input channel")]
    pub bus: Option<String>,

    #[clap(long = "cluster-bus", help = "The cluster bus of the input channel")]
    pub cluster_bus: Option<String>,

    #[clap(short = 'n', long = "namespace", help = "The namespace of the resources")]
    pub namespace: Option<String>,

    #[clap(long = "dry-run", help = "Print the resources instead of creating them")]
    pub dry_run: bool,
}

/// Checks everything that can be checked without contacting the platform.
pub fn validate(options: &Options, invokers: &Invokers) -> Result<(), ValidationError> {
    exact_args(&options.args, 2)?;

    let (invoker, name) = (&options.args[0], &options.args[1]);

    validate_name(invoker)?;
    validate_name(name)?;

    required_flags(&[
        ("image", options.image.is_some()),
        ("git-repo", options.git_repo.is_some()),
    ])?;

    one_of_when(
        ("input", options.input.is_some()),
        &[
            ("bus", options.bus.is_some()),
            ("cluster-bus", options.cluster_bus.is_some()),
        ],
    )?;

    if let Some(input) = &options.input {
        validate_name(input)?;
    }

    for pair in &options.env {
        validate_env(pair)?;
    }

    for reference in &options.env_from {
        validate_env_from(reference)?;
    }

    if invokers
        .resolve(invoker, options.invoker_url.as_deref())
        .is_none()
    {
        return Err(ValidationError::UnknownInvoker {
            name: invoker.clone(),
            known: invokers.names(),
        });
    }

    Ok(())
}

/// Assembles the function options from validated input.
pub fn function_options(options: &Options, invokers: &Invokers) -> CreateFunctionOptions {
    let (invoker, name) = (&options.args[0], &options.args[1]);

    CreateFunctionOptions {
        name: name.clone(),
        namespace: options.namespace.clone().unwrap_or_default(),
        image: options.image.clone().unwrap_or_default(),
        git_repo: options.git_repo.clone().unwrap_or_default(),
        git_revision: options
            .git_revision
            .clone()
            .unwrap_or_else(|| DEFAULT_GIT_REVISION.to_string()),
        invoker_url: invokers
            .resolve(invoker, options.invoker_url.as_deref())
            .unwrap_or_default(),
        env: options.env.clone(),
        env_from: options.env_from.clone(),
        dry_run: options.dry_run,
    }
}

pub fn input(options: &Options) -> Option<Input> {
    options.input.as_ref().map(|channel| Input {
        channel: channel.clone(),
        bus: options.bus.clone(),
        cluster_bus: options.cluster_bus.clone(),
    })
}

pub async fn handle(options: Options, state: State, out: &mut impl Write) -> Result<()> {
    let invokers = Invokers::new(&state.config.invokers);

    validate(&options, &invokers)?;

    let function = function_options(&options, &invokers);
    let name = function.name.clone();

    log::debug!("Function options: {function:?}");

    let execution = execute(state.client.as_ref(), plan(function, input(&options))).await;

    if execution.failure.is_some() && !execution.completed.is_empty() && !options.dry_run {
        log::warn!(
            "Created {} before failing, they were left in place",
            execution.completed.join(", ")
        );
    }

    let created = execution.into_result()?;

    if options.dry_run {
        render_manifests(out, &created)?;
    } else {
        log::info!("Created function {}", highlight(&name));

        if let Some(channel) = &options.input {
            log::info!(
                "Subscribed function {} to channel {}",
                highlight(&name),
                highlight(channel)
            );
        }
    }

    Ok(())
}
