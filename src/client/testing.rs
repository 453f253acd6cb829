//! A scripted [`Client`] that records every call it receives.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use super::types::{Channel, ChannelList, Function, Subscription};
use super::{
    Client, CreateChannelOptions, CreateFunctionOptions, CreateSubscriptionOptions,
    DeleteChannelOptions, ListChannelOptions,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateFunction(CreateFunctionOptions),
    CreateChannel(CreateChannelOptions),
    CreateSubscription(CreateSubscriptionOptions),
    ListChannels(ListChannelOptions),
    DeleteChannel(DeleteChannelOptions),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MockError(pub String);

pub fn mock_error(message: &str) -> anyhow::Error {
    anyhow::Error::new(MockError(message.to_string()))
}

/// Unscripted calls succeed: creations return `None`, listings are empty.
#[derive(Debug, Default)]
pub struct MockClient {
    calls: Mutex<Vec<Call>>,
    function: Mutex<Option<Result<Option<Function>>>>,
    channel: Mutex<Option<Result<Option<Channel>>>>,
    subscription: Mutex<Option<Result<Option<Subscription>>>>,
    list: Mutex<Option<Result<ChannelList>>>,
    delete: Mutex<Option<Result<()>>>,
}

impl MockClient {
    pub fn on_create_function(self, result: Result<Option<Function>>) -> Self {
        *self.function.lock().unwrap() = Some(result);
        self
    }

    pub fn on_create_channel(self, result: Result<Option<Channel>>) -> Self {
        *self.channel.lock().unwrap() = Some(result);
        self
    }

    pub fn on_create_subscription(self, result: Result<Option<Subscription>>) -> Self {
        *self.subscription.lock().unwrap() = Some(result);
        self
    }

    pub fn on_list_channels(self, result: Result<ChannelList>) -> Self {
        *self.list.lock().unwrap() = Some(result);
        self
    }

    pub fn on_delete_channel(self, result: Result<()>) -> Self {
        *self.delete.lock().unwrap() = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Client for MockClient {
    async fn create_function(&self, options: CreateFunctionOptions) -> Result<Option<Function>> {
        self.record(Call::CreateFunction(options));
        self.function.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn create_channel(&self, options: CreateChannelOptions) -> Result<Option<Channel>> {
        self.record(Call::CreateChannel(options));
        self.channel.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn create_subscription(
        &self,
        options: CreateSubscriptionOptions,
    ) -> Result<Option<Subscription>> {
        self.record(Call::CreateSubscription(options));
        self.subscription.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn list_channels(&self, options: ListChannelOptions) -> Result<ChannelList> {
        self.record(Call::ListChannels(options));
        self.list
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(ChannelList::default()))
    }

    async fn delete_channel(&self, options: DeleteChannelOptions) -> Result<()> {
        self.record(Call::DeleteChannel(options));
        self.delete.lock().unwrap().take().unwrap_or(Ok(()))
    }
}

/// Asserts `err` is the untouched error produced by [`mock_error`].
pub fn assert_mock_error(err: &anyhow::Error, message: &str) {
    assert_eq!(err.to_string(), message);
    assert_eq!(
        err.downcast_ref::<MockError>(),
        Some(&MockError(message.to_string()))
    );
}
