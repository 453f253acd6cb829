use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{
    Build, BuildArgument, BuildSource, BuildTemplate, Channel, ChannelList, ChannelSpec,
    Configuration, Container, EnvVar, EnvVarSource, Function, FunctionSpec, GitSource,
    KeySelector, ObjectMeta, Resource, RevisionSpec, RevisionTemplate, RunLatest, Subscription,
    SubscriptionSpec,
};
use super::{
    Client, CreateChannelOptions, CreateFunctionOptions, CreateSubscriptionOptions,
    DeleteChannelOptions, ListChannelOptions,
};
use crate::state::http::HttpClient;

pub const SERVING_API_VERSION: &str = "serving.knative.dev/v1alpha1";
pub const CHANNELS_API_VERSION: &str = "channels.knative.dev/v1alpha1";

const BUILD_TEMPLATE: &str = "riff";

/// Talks to the Kubernetes API server hosting the Knative resources.
#[derive(Debug, Clone)]
pub struct KubeClient {
    http: HttpClient,
    default_namespace: String,
}

impl KubeClient {
    pub fn new(http: HttpClient, default_namespace: String) -> Self {
        Self {
            http,
            default_namespace,
        }
    }

    fn namespace<'a>(&'a self, namespace: &'a str) -> &'a str {
        if namespace.is_empty() {
            &self.default_namespace
        } else {
            namespace
        }
    }

    async fn create<S>(
        &self,
        path: String,
        resource: Resource<S>,
        dry_run: bool,
    ) -> Result<Option<Resource<S>>>
    where
        S: Serialize + DeserializeOwned + Default + Send,
    {
        if dry_run {
            log::debug!("Dry run, not creating `{}`", resource.metadata.name);

            return Ok(Some(resource));
        }

        self.http
            .request::<Resource<S>>("POST", &path, Some(serde_json::to_vec(&resource)?))
            .await
    }
}

#[async_trait]
impl Client for KubeClient {
    async fn create_function(&self, options: CreateFunctionOptions) -> Result<Option<Function>> {
        let namespace = self.namespace(&options.namespace).to_string();
        let function = function_manifest(&options, &namespace)?;

        self.create(
            format!("/apis/{SERVING_API_VERSION}/namespaces/{namespace}/services"),
            function,
            options.dry_run,
        )
        .await
    }

    async fn create_channel(&self, options: CreateChannelOptions) -> Result<Option<Channel>> {
        let namespace = self.namespace(&options.namespace).to_string();
        let channel = channel_manifest(&options, &namespace);

        self.create(
            format!("/apis/{CHANNELS_API_VERSION}/namespaces/{namespace}/channels"),
            channel,
            options.dry_run,
        )
        .await
    }

    async fn create_subscription(
        &self,
        options: CreateSubscriptionOptions,
    ) -> Result<Option<Subscription>> {
        let namespace = self.namespace(&options.namespace).to_string();
        let subscription = subscription_manifest(&options, &namespace);

        self.create(
            format!("/apis/{CHANNELS_API_VERSION}/namespaces/{namespace}/subscriptions"),
            subscription,
            options.dry_run,
        )
        .await
    }

    async fn list_channels(&self, options: ListChannelOptions) -> Result<ChannelList> {
        let namespace = self.namespace(&options.namespace);

        self.http
            .request::<ChannelList>(
                "GET",
                &format!("/apis/{CHANNELS_API_VERSION}/namespaces/{namespace}/channels"),
                None,
            )
            .await?
            .ok_or_else(|| anyhow!("Error while parsing response"))
    }

    async fn delete_channel(&self, options: DeleteChannelOptions) -> Result<()> {
        let namespace = self.namespace(&options.namespace);

        self.http
            .request::<serde_json::Value>(
                "DELETE",
                &format!(
                    "/apis/{CHANNELS_API_VERSION}/namespaces/{namespace}/channels/{}",
                    options.name
                ),
                None,
            )
            .await?;

        Ok(())
    }
}

fn metadata(name: &str, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: name.to_string(),
        namespace: Some(namespace.to_string()),
        ..Default::default()
    }
}

pub fn function_manifest(options: &CreateFunctionOptions, namespace: &str) -> Result<Function> {
    let mut env = options
        .env
        .iter()
        .map(|pair| parse_env(pair))
        .collect::<Result<Vec<_>>>()?;

    for reference in &options.env_from {
        env.push(parse_env_from(reference)?);
    }

    Ok(Function {
        api_version: Some(SERVING_API_VERSION.to_string()),
        kind: Some("Service".to_string()),
        metadata: metadata(&options.name, namespace),
        spec: FunctionSpec {
            run_latest: Some(RunLatest {
                configuration: Configuration {
                    build: Build {
                        source: BuildSource {
                            git: GitSource {
                                url: options.git_repo.clone(),
                                revision: options.git_revision.clone(),
                            },
                        },
                        template: BuildTemplate {
                            name: BUILD_TEMPLATE.to_string(),
                            arguments: vec![
                                BuildArgument {
                                    name: "IMAGE".to_string(),
                                    value: options.image.clone(),
                                },
                                BuildArgument {
                                    name: "INVOKER_URL".to_string(),
                                    value: options.invoker_url.clone(),
                                },
                            ],
                        },
                    },
                    revision_template: RevisionTemplate {
                        spec: RevisionSpec {
                            container: Container {
                                image: options.image.clone(),
                                env,
                            },
                        },
                    },
                },
            }),
        },
        ..Default::default()
    })
}

pub fn channel_manifest(options: &CreateChannelOptions, namespace: &str) -> Channel {
    Channel {
        api_version: Some(CHANNELS_API_VERSION.to_string()),
        kind: Some("Channel".to_string()),
        metadata: metadata(&options.name, namespace),
        spec: ChannelSpec {
            bus: options.bus.clone(),
            cluster_bus: options.cluster_bus.clone(),
        },
        ..Default::default()
    }
}

pub fn subscription_manifest(options: &CreateSubscriptionOptions, namespace: &str) -> Subscription {
    Subscription {
        api_version: Some(CHANNELS_API_VERSION.to_string()),
        kind: Some("Subscription".to_string()),
        metadata: metadata(&options.name, namespace),
        spec: SubscriptionSpec {
            channel: options.channel.clone(),
            subscriber: options.subscriber.clone(),
        },
        ..Default::default()
    }
}

fn parse_env(pair: &str) -> Result<EnvVar> {
    let Some((name, value)) = pair.split_once('=') else {
        bail!("invalid KEY=value: no `=` found in `{pair}`");
    };

    Ok(EnvVar {
        name: name.to_string(),
        value: Some(value.to_string()),
        value_from: None,
    })
}

// `<kind>:<name>:<key>`, exposed as an env var named after the key
fn parse_env_from(reference: &str) -> Result<EnvVar> {
    let parts = reference.split(':').collect::<Vec<_>>();

    let [kind, name, key] = parts.as_slice() else {
        bail!("invalid env-from reference `{reference}`");
    };

    let selector = KeySelector {
        name: (*name).to_string(),
        key: (*key).to_string(),
    };

    let source = match *kind {
        "secretKeyRef" => EnvVarSource::SecretKeyRef(selector),
        "configMapKeyRef" => EnvVarSource::ConfigMapKeyRef(selector),
        kind => bail!("unsupported env-from source `{kind}`"),
    };

    Ok(EnvVar {
        name: (*key).to_string(),
        value: None,
        value_from: Some(source),
    })
}
