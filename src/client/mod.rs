pub mod kube;
#[cfg(test)]
pub mod testing;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;

use self::types::{Channel, ChannelList, Function, Subscription};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFunctionOptions {
    pub name: String,
    pub namespace: String,
    pub image: String,
    pub git_repo: String,
    pub git_revision: String,
    pub invoker_url: String,
    /// `KEY=VALUE` pairs, in the order they were given
    pub env: Vec<String>,
    /// `secretKeyRef:<name>:<key>` or `configMapKeyRef:<name>:<key>` references
    pub env_from: Vec<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateChannelOptions {
    pub name: String,
    pub namespace: String,
    pub bus: Option<String>,
    pub cluster_bus: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateSubscriptionOptions {
    pub name: String,
    pub namespace: String,
    pub channel: String,
    pub subscriber: String,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListChannelOptions {
    pub namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteChannelOptions {
    pub name: String,
    pub namespace: String,
}

/// Operations riff performs against the platform.
///
/// An empty `namespace` in any of the options means the client's default
/// namespace. With `dry_run` set, creation calls return the resource that
/// would be created without persisting it; otherwise they may return `None`
/// when the platform doesn't echo the created resource back.
#[async_trait]
pub trait Client: Send + Sync {
    async fn create_function(&self, options: CreateFunctionOptions) -> Result<Option<Function>>;

    async fn create_channel(&self, options: CreateChannelOptions) -> Result<Option<Channel>>;

    async fn create_subscription(
        &self,
        options: CreateSubscriptionOptions,
    ) -> Result<Option<Subscription>>;

    async fn list_channels(&self, options: ListChannelOptions) -> Result<ChannelList>;

    async fn delete_channel(&self, options: DeleteChannelOptions) -> Result<()>;
}
