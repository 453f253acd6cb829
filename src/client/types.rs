use serde::{Deserialize, Serialize};

/// Subset of the Kubernetes object metadata riff reads and writes.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    // always emitted, even when empty, like the API server does
    #[serde(default)]
    pub creation_timestamp: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Status {}

/// A namespaced platform resource in manifest form.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: S,
    #[serde(default, skip_deserializing)]
    pub status: Status,
}

impl<S: Default> Resource<S> {
    pub fn named(name: &str) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub type Function = Resource<FunctionSpec>;
pub type Channel = Resource<ChannelSpec>;
pub type Subscription = Resource<SubscriptionSpec>;

/// A Knative serving `Service` running the latest revision built from git.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_latest: Option<RunLatest>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RunLatest {
    pub configuration: Configuration,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub build: Build,
    pub revision_template: RevisionTemplate,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Build {
    pub source: BuildSource,
    pub template: BuildTemplate,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BuildSource {
    pub git: GitSource,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GitSource {
    pub url: String,
    pub revision: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BuildTemplate {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<BuildArgument>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BuildArgument {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RevisionTemplate {
    pub spec: RevisionSpec,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RevisionSpec {
    pub container: Container,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Container {
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_from: Option<EnvVarSource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EnvVarSource {
    SecretKeyRef(KeySelector),
    ConfigMapKeyRef(KeySelector),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct KeySelector {
    pub name: String,
    pub key: String,
}

/// A Knative eventing channel, backed by either a namespaced or a cluster bus.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_bus: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionSpec {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub subscriber: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ChannelList {
    #[serde(default)]
    pub items: Vec<Channel>,
}
