//! # API Shared
//!
//! Wire types and shared services for the motivate proxy.
//!
//! Contains:
//! - JSON request/response types (`wire` module), used by the server and by the client form
//! - `HealthService` for the health endpoint
//!
//! Used by `api-rest` and `motivate-client`.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
