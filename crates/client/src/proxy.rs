//! HTTP client for the proxy function.

use crate::error::{ClientError, ClientResult, GENERIC_FAILURE_MESSAGE};
use api_shared::{ErrorRes, GenerateReq, GenerateRes};

#[derive(Clone, Debug)]
pub struct ProxyClient {
    http: reqwest::Client,
    url: String,
    bearer: Option<String>,
}

impl ProxyClient {
    /// `url` is the full proxy endpoint. `bearer` is the datastore's public token, which the
    /// hosting runtime expects on every call; it is optional for a self-hosted proxy.
    pub fn new(url: impl Into<String>, bearer: Option<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::HttpClient)?;
        Ok(Self {
            http,
            url: url.into(),
            bearer,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one generation request.
    ///
    /// Non-success responses become [`ClientError::Proxy`] carrying the server's `error`
    /// field, or [`GENERIC_FAILURE_MESSAGE`] when the body has none.
    pub async fn generate(&self, word: &str, api_key: &str) -> ClientResult<GenerateRes> {
        let mut request = self.http.post(&self.url).json(&GenerateReq::new(word, api_key));
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ClientError::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorRes>(&body)
                .ok()
                .map(|e| e.error)
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            tracing::warn!(status = status.as_u16(), "proxy returned an error: {}", message);
            return Err(ClientError::Proxy(message));
        }

        serde_json::from_str(&body).map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};

    async fn spawn_proxy(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should succeed");
        let addr = listener.local_addr().expect("local_addr should succeed");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{}/generate-motivation", addr)
    }

    #[tokio::test]
    async fn test_generate_posts_word_and_key_with_bearer() {
        let app = Router::new().route(
            "/generate-motivation",
            post(
                |headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(
                        headers.get("authorization").and_then(|v| v.to_str().ok()),
                        Some("Bearer anon")
                    );
                    assert_eq!(body["apiKey"], "secret");
                    Json(serde_json::json!({
                        "phrases": "One.\nTwo.\nThree.",
                        "word": body["word"],
                    }))
                },
            ),
        );
        let url = spawn_proxy(app).await;

        let client = ProxyClient::new(url, Some("anon".into())).expect("client should build");
        let res = client
            .generate("courage", "secret")
            .await
            .expect("generate should succeed");

        assert_eq!(res.word, "courage");
        assert_eq!(res.phrases, "One.\nTwo.\nThree.");
    }

    #[tokio::test]
    async fn test_generate_surfaces_server_error_verbatim() {
        let app = Router::new().route(
            "/generate-motivation",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": "Word and API key are required" })),
                )
            }),
        );
        let url = spawn_proxy(app).await;

        let err = ProxyClient::new(url, None)
            .expect("client should build")
            .generate("", "")
            .await
            .expect_err("generate should fail");

        assert_eq!(err.to_string(), "Word and API key are required");
    }

    #[tokio::test]
    async fn test_generate_falls_back_to_generic_message() {
        let app = Router::new().route(
            "/generate-motivation",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
        );
        let url = spawn_proxy(app).await;

        let err = ProxyClient::new(url, None)
            .expect("client should build")
            .generate("hope", "k")
            .await
            .expect_err("generate should fail");

        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_reports_non_json_success_body() {
        let app = Router::new().route("/generate-motivation", post(|| async { "ok" }));
        let url = spawn_proxy(app).await;

        let err = ProxyClient::new(url, None)
            .expect("client should build")
            .generate("hope", "k")
            .await
            .expect_err("generate should fail");

        assert!(matches!(err, ClientError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }
}
