use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Storable;
use crate::config::CONFIG_STORE_PATH;
use crate::impl_store;

/// Persistent user configuration, stored as JSON in the home directory.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Namespace used when a command doesn't pass `--namespace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
    /// Base URL of the Kubernetes API server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Bearer token sent to the API server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Extra invokers, merged over the builtin ones
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub invokers: BTreeMap<String, String>,
}

impl Storable for Config {
    fn path() -> Result<PathBuf> {
        let path = dirs::home_dir()
            .context("Could not find `home` directory")?
            .join(CONFIG_STORE_PATH);

        log::debug!("Config path: {path:?}");

        Ok(path)
    }
}

impl_store!(Config);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{ "default_namespace": "faas", "invokers": { "go": "https://example.com/go.yaml" } }"#)
                .unwrap();

        assert_eq!(config.default_namespace.as_deref(), Some("faas"));
        assert_eq!(config.api_url, None);
        assert_eq!(
            config.invokers.get("go").map(String::as_str),
            Some("https://example.com/go.yaml")
        );
    }

    #[test]
    fn test_default_config_is_empty_object() {
        assert_eq!(serde_json::to_string(&Config::default()).unwrap(), "{}");
    }
}
