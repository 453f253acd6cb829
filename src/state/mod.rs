pub mod http;

use std::sync::Arc;

use anyhow::Result;

use self::http::HttpClient;
use crate::client::kube::KubeClient;
use crate::client::Client;
use crate::config::{DEFAULT_API_URL, DEFAULT_NAMESPACE};
use crate::store::config::Config;
use crate::store::Store;

pub struct State {
    pub config: Config,
    pub client: Arc<dyn Client>,
}

pub struct StateOptions {
    pub override_api_url: Option<String>,
    pub override_token: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let config = match Config::new().await {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Could not load the config store, using defaults: {err:#}");

                Config::default()
            }
        };

        // flag > env > config > default
        let api_url = options
            .override_api_url
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = options.override_token.or_else(|| config.token.clone());

        log::debug!("Using API server {api_url}");

        let http = HttpClient::new(token, api_url)?;

        let namespace = config
            .default_namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        Ok(Self::with_client(
            Arc::new(KubeClient::new(http, namespace)),
            config,
        ))
    }

    pub fn with_client(client: Arc<dyn Client>, config: Config) -> Self {
        Self { config, client }
    }
}
