//! Client for the third-party generation API.
//!
//! One call per proxy request: the prompt goes out as a single user turn and the first
//! candidate's first text part comes back. Non-success statuses are returned to the caller
//! untouched so the proxy can forward them.

use crate::config::GenerationConfig;
use crate::constants::{GENERATION_KEY_PARAM, NO_PHRASES_PLACEHOLDER};
use crate::prompt::build_prompt;
use crate::{MotivateError, MotivateResult};
use motivate_types::{ApiKey, NonEmptyText};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}

/// Generated phrases for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// Phrase block exactly as returned upstream, or the placeholder.
    pub phrases: String,
    /// `true` when the upstream response had no text and the placeholder was used.
    pub placeholder: bool,
}

/// HTTP client for the `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GenerationClient {
    http: reqwest::Client,
    config: GenerationConfig,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig) -> MotivateResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(MotivateError::HttpClient)?;
        Ok(Self { http, config })
    }

    /// Builds a client around an existing `reqwest::Client` (shares its connection pool).
    pub fn with_http(http: reqwest::Client, config: GenerationConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates motivational phrases for `word` using the caller's `api_key`.
    ///
    /// # Errors
    ///
    /// - [`MotivateError::GenerationStatus`] when the API answers with a non-success status;
    ///   the status and raw body are preserved.
    /// - [`MotivateError::GenerationRequest`] on transport failures.
    /// - [`MotivateError::GenerationDecode`] when a success body is not valid JSON of the
    ///   expected shape.
    pub async fn generate(
        &self,
        word: &NonEmptyText,
        api_key: &ApiKey,
    ) -> MotivateResult<Generated> {
        let prompt = build_prompt(word);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        tracing::debug!(
            model = self.config.model(),
            word = word.as_str(),
            "calling generation API"
        );

        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[(GENERATION_KEY_PARAM, api_key.expose())])
            .json(&body)
            .send()
            .await
            .map_err(|e| MotivateError::GenerationRequest(e.without_url()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| MotivateError::GenerationRequest(e.without_url()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generation API returned an error");
            return Err(MotivateError::GenerationStatus {
                status: status.as_u16(),
                body: raw,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(MotivateError::GenerationDecode)?;

        match parsed.first_text() {
            Some(phrases) => Ok(Generated {
                phrases,
                placeholder: false,
            }),
            None => {
                tracing::warn!(
                    word = word.as_str(),
                    "generation API response had no candidate text; using placeholder"
                );
                Ok(Generated {
                    phrases: NO_PHRASES_PLACEHOLDER.to_string(),
                    placeholder: true,
                })
            }
        }
    }
}
