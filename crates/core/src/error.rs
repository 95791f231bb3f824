#[derive(Debug, thiserror::Error)]
pub enum MotivateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("Word and API key are required")]
    MissingFields,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("failed to call generation API: {0}")]
    GenerationRequest(reqwest::Error),
    #[error("generation API returned status {status}")]
    GenerationStatus { status: u16, body: String },
    #[error("failed to decode generation API response: {0}")]
    GenerationDecode(serde_json::Error),

    #[error("failed to call datastore: {0}")]
    DatastoreRequest(reqwest::Error),
    #[error("datastore returned status {status}: {body}")]
    DatastoreStatus { status: u16, body: String },
    #[error("failed to decode datastore response: {0}")]
    DatastoreDecode(serde_json::Error),
    #[error("datastore insert returned no row")]
    DatastoreEmptyInsert,
}

pub type MotivateResult<T> = std::result::Result<T, MotivateError>;
