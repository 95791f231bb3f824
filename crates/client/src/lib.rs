//! # Motivate Client
//!
//! The client form: collects an API key and a word, calls the proxy, stores successful
//! results in the history table and shows the most recent rows.
//!
//! - [`form`]: form state and its pure transitions
//! - [`controller`]: runs a submission against the proxy and the history store
//! - [`proxy`]: HTTP client for the proxy function
//! - [`render`]: plain-text rendering for terminals

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod proxy;
pub mod render;

pub use config::{client_config_from_env_values, ClientConfig};
pub use controller::MotivationForm;
pub use error::{ClientError, ClientResult};
pub use form::{FormState, SubmitBlocked, Submission};
pub use proxy::ProxyClient;
