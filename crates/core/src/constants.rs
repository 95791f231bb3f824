//! Constants used throughout the motivate core crate.
//!
//! Endpoints, table names and fixed strings live here so the proxy, the client and the
//! tests agree on them.

/// Default base URL of the generation API (without a trailing slash).
pub const DEFAULT_GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for phrase generation.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-pro";

/// Query parameter carrying the caller's generation API key.
pub const GENERATION_KEY_PARAM: &str = "key";

/// Text returned in place of phrases when the generation API response has none.
pub const NO_PHRASES_PLACEHOLDER: &str = "No phrases generated";

/// Number of phrases the prompt asks for.
pub const PHRASE_COUNT: usize = 3;

/// Datastore table holding generated phrases.
pub const HISTORY_TABLE: &str = "motivational_phrases";

/// Path prefix of the datastore's REST interface.
pub const DATASTORE_REST_PATH: &str = "rest/v1";

/// Number of history rows shown by the client.
pub const HISTORY_LIMIT: usize = 5;

/// Route of the proxy function.
pub const GENERATE_ROUTE: &str = "/generate-motivation";
