//! JSON bodies exchanged between the client form and the proxy.
//!
//! Field names follow the wire format (`apiKey`, not `api_key`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /generate-motivation`.
///
/// Both fields are optional on the wire so that a missing field produces the proxy's own
/// 400 response instead of a deserialisation failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateReq {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
}

impl GenerateReq {
    pub fn new(word: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            api_key: Some(api_key.into()),
        }
    }
}

/// Successful generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRes {
    /// Newline-delimited phrase block.
    pub phrases: String,
    pub word: String,
}

/// Error body for every failing response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
    /// Raw upstream body, present when an upstream error is forwarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_req_uses_camel_case_key() {
        let json = serde_json::to_value(GenerateReq::new("courage", "k")).unwrap();
        assert_eq!(json, serde_json::json!({ "word": "courage", "apiKey": "k" }));
    }

    #[test]
    fn test_generate_req_tolerates_missing_fields() {
        let req: GenerateReq = serde_json::from_str("{}").expect("empty object should parse");
        assert_eq!(req, GenerateReq::default());
    }

    #[test]
    fn test_error_res_omits_absent_details() {
        let json = serde_json::to_value(ErrorRes::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "boom" }));

        let json = serde_json::to_value(ErrorRes::with_details("boom", "upstream")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "boom", "details": "upstream" })
        );
    }
}
