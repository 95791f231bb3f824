//! # Motivate Core
//!
//! Domain logic shared by the proxy server and the client form:
//! - Startup configuration for the generation API and the datastore
//! - Prompt construction and phrase-block splitting
//! - The generation API client
//! - History rows and the stores that persist them
//!
//! **No API concerns**: HTTP routing, CORS and response shaping belong in `api-rest`; form
//! state belongs in `motivate-client`.

pub mod config;
pub mod constants;
pub mod datastore;
pub mod error;
pub mod generation;
pub mod history;
pub mod prompt;

pub use config::{DatastoreConfig, GenerationConfig};
pub use constants::*;
pub use datastore::RestHistoryStore;
pub use error::{MotivateError, MotivateResult};
pub use generation::{Generated, GenerationClient};
pub use history::{HistoryItem, HistoryStore, MemoryHistoryStore, NewHistoryItem};
pub use motivate_types::{ApiKey, NonEmptyText, TextError};
pub use prompt::{build_prompt, split_phrases};
