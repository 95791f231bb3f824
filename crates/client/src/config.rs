//! Client configuration, resolved once at startup.

use motivate_core::config::datastore_config_from_env_values;
use motivate_core::{
    DatastoreConfig, HistoryStore, MemoryHistoryStore, MotivateError, MotivateResult,
    RestHistoryStore, GENERATE_ROUTE,
};
use std::sync::Arc;

/// Proxy endpoint used when none is configured.
pub fn default_proxy_url() -> String {
    format!("http://localhost:3000{GENERATE_ROUTE}")
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    proxy_url: String,
    datastore: Option<DatastoreConfig>,
}

impl ClientConfig {
    pub fn new(
        proxy_url: impl AsRef<str>,
        datastore: Option<DatastoreConfig>,
    ) -> MotivateResult<Self> {
        let proxy_url = proxy_url.as_ref().trim();
        if !(proxy_url.starts_with("http://") || proxy_url.starts_with("https://")) {
            return Err(MotivateError::InvalidInput(format!(
                "proxy URL must be http(s), got: '{}'",
                proxy_url
            )));
        }
        Ok(Self {
            proxy_url: proxy_url.to_string(),
            datastore,
        })
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    pub fn datastore(&self) -> Option<&DatastoreConfig> {
        self.datastore.as_ref()
    }

    /// Token sent to the proxy as a bearer credential: the datastore's public key, if any.
    pub fn proxy_bearer(&self) -> Option<String> {
        self.datastore.as_ref().map(|d| d.public_key().to_string())
    }

    /// The managed datastore when configured, otherwise an in-memory store.
    pub fn history_store(&self) -> MotivateResult<Arc<dyn HistoryStore>> {
        match &self.datastore {
            Some(cfg) => Ok(Arc::new(RestHistoryStore::new(cfg.clone())?)),
            None => {
                tracing::warn!("no datastore configured; history is kept in memory only");
                Ok(Arc::new(MemoryHistoryStore::new()))
            }
        }
    }
}

/// Build a `ClientConfig` from optional raw values.
pub fn client_config_from_env_values(
    proxy_url: Option<String>,
    datastore_url: Option<String>,
    datastore_key: Option<String>,
) -> MotivateResult<ClientConfig> {
    let proxy_url = proxy_url
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(default_proxy_url);
    let datastore = datastore_config_from_env_values(datastore_url, datastore_key)?;
    ClientConfig::new(proxy_url, datastore)
}
