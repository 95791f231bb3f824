//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Nothing here reads the environment during request handling; binaries read the
//! variables and hand the raw values to the `*_from_env_values` helpers.

use crate::constants::{DEFAULT_GENERATION_BASE_URL, DEFAULT_GENERATION_MODEL};
use crate::{MotivateError, MotivateResult};

/// Where the proxy sends generation requests.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    base_url: String,
    model: String,
}

impl GenerationConfig {
    /// Create a new `GenerationConfig`.
    ///
    /// The base URL is stored without a trailing slash.
    pub fn new(base_url: impl AsRef<str>, model: impl AsRef<str>) -> MotivateResult<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/');
        let model = model.as_ref().trim();

        if base_url.is_empty() {
            return Err(MotivateError::InvalidInput(
                "generation base URL cannot be empty".into(),
            ));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(MotivateError::InvalidInput(format!(
                "generation base URL must be http(s), got: '{}'",
                base_url
            )));
        }
        if model.is_empty() {
            return Err(MotivateError::InvalidInput(
                "generation model cannot be empty".into(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` endpoint for the configured model, without the key.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GENERATION_BASE_URL.to_string(),
            model: DEFAULT_GENERATION_MODEL.to_string(),
        }
    }
}

/// Connection details for the managed history table.
#[derive(Clone)]
pub struct DatastoreConfig {
    url: String,
    public_key: String,
}

impl DatastoreConfig {
    pub fn new(url: impl AsRef<str>, public_key: impl AsRef<str>) -> MotivateResult<Self> {
        let url = url.as_ref().trim().trim_end_matches('/');
        let public_key = public_key.as_ref().trim();

        if url.is_empty() {
            return Err(MotivateError::InvalidInput(
                "datastore URL cannot be empty".into(),
            ));
        }
        if public_key.is_empty() {
            return Err(MotivateError::InvalidInput(
                "datastore public key cannot be empty".into(),
            ));
        }

        Ok(Self {
            url: url.to_string(),
            public_key: public_key.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

impl std::fmt::Debug for DatastoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatastoreConfig")
            .field("url", &self.url)
            .field("public_key", &"***")
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build a `GenerationConfig` from optional raw values.
///
/// Missing or blank values fall back to the defaults.
pub fn generation_config_from_env_values(
    base_url: Option<String>,
    model: Option<String>,
) -> MotivateResult<GenerationConfig> {
    let base_url = non_blank(base_url).unwrap_or_else(|| DEFAULT_GENERATION_BASE_URL.into());
    let model = non_blank(model).unwrap_or_else(|| DEFAULT_GENERATION_MODEL.into());
    GenerationConfig::new(base_url, model)
}

/// Build an optional `DatastoreConfig` from raw values.
///
/// Returns `Ok(None)` when no URL is configured. A URL without a key is an error.
pub fn datastore_config_from_env_values(
    url: Option<String>,
    public_key: Option<String>,
) -> MotivateResult<Option<DatastoreConfig>> {
    match (non_blank(url), non_blank(public_key)) {
        (None, _) => Ok(None),
        (Some(url), Some(key)) => DatastoreConfig::new(url, key).map(Some),
        (Some(_), None) => Err(MotivateError::InvalidInput(
            "datastore URL is set but the public key is missing".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_defaults_when_unset() {
        let cfg = generation_config_from_env_values(None, Some("  ".into()))
            .expect("defaults should be valid");
        assert_eq!(cfg.base_url(), DEFAULT_GENERATION_BASE_URL);
        assert_eq!(cfg.model(), DEFAULT_GENERATION_MODEL);
        assert_eq!(
            cfg.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_generation_config_strips_trailing_slash() {
        let cfg = GenerationConfig::new("http://127.0.0.1:9999/v1beta/", "test-model")
            .expect("config should be valid");
        assert_eq!(
            cfg.endpoint(),
            "http://127.0.0.1:9999/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_generation_config_rejects_non_http_url() {
        let result = GenerationConfig::new("ftp://example.com", "gemini-pro");
        assert!(matches!(result, Err(MotivateError::InvalidInput(_))));
    }

    #[test]
    fn test_datastore_config_optional() {
        let none = datastore_config_from_env_values(None, Some("key".into()))
            .expect("missing URL should not be an error");
        assert!(none.is_none());

        let some = datastore_config_from_env_values(
            Some("https://db.example.com/".into()),
            Some("anon".into()),
        )
        .expect("complete config should be valid")
        .expect("config should be present");
        assert_eq!(some.url(), "https://db.example.com");
        assert!(!format!("{:?}", some).contains("anon"));
    }

    #[test]
    fn test_datastore_config_requires_key_with_url() {
        let result = datastore_config_from_env_values(Some("https://db.example.com".into()), None);
        assert!(matches!(result, Err(MotivateError::InvalidInput(_))));
    }
}
