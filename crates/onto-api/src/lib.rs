//! HTTP client and query cache service for the ontology catalog API.
//!
//! The crate has two halves:
//!
//! - [`client`]: [`ApiClient`], a thin typed wrapper over the catalog's
//!   read-only endpoints. One network call per invocation, no retries;
//!   non-success responses are normalized into a single human-readable
//!   [`ApiError`].
//! - [`cache`]: [`QueryCache`], cache-key-addressed fetch state with a
//!   freshness window, in-flight de-duplication, and one silent retry.
//!   Retry policy lives here, not in the client.
//!
//! The cache is an explicit service: callers construct their instances and
//! pass them down. There is no ambient singleton.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::{Completion, QueryCache, QuerySlot, TopicsKey};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
