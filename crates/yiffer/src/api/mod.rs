//! Yiffer JSON API access.
//!
//! Request construction, the HTTP client, and the wire types it returns.

pub mod client;
pub mod query;
pub mod types;

pub use client::YifferClient;
pub use query::{asset_url, comic_path, comic_url, SearchQuery, SortOrder};
pub use types::*;
