use motivate_core::MotivateError;

/// Message shown when the proxy fails without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate phrases";

/// Failures seen by the client form.
///
/// `Display` is the flat string rendered in the form's inline error message.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Error reported by the proxy, shown verbatim.
    #[error("{0}")]
    Proxy(String),
    #[error("failed to reach proxy: {0}")]
    Transport(reqwest::Error),
    #[error("failed to decode proxy response: {0}")]
    Decode(serde_json::Error),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
    #[error(transparent)]
    Core(#[from] MotivateError),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
