//! HTTP access to the remote game catalog API.
//!
//! [`client::CatalogClient`] wraps the fixed-base-URL REST API and
//! injects the API key into every request. The fetchers in [`fetch`]
//! layer per-resource freshness caching and a staleness guard on top,
//! so callers see at most one network request per freshness window and
//! superseded responses are never applied.

pub mod client;
pub mod credentials;
pub mod error;
pub mod fetch;
pub mod pagination;

pub use client::CatalogClient;
pub use credentials::{
    ApiKey, CredentialSource, config_path, credential_source, save_to_file,
};
pub use error::ApiError;
pub use fetch::{GameCache, GamesFeed, GenresDirectory, RequestGuard, RequestTicket};
pub use pagination::next_page_number;
