//! Yiffer content source.
//!
//! Translates the Yiffer comics JSON API into the host content model:
//! listings, comic details, the single chapter each comic maps to, and its
//! page images. Search facets are declared as plain filter data.

pub mod api;
pub mod error;
pub mod filters;
pub mod keywords;
pub mod mapper;
pub mod source;

pub use api::{SearchQuery, SortOrder, YifferClient};
pub use error::YifferError;
pub use keywords::Keyword;
pub use source::YifferSource;
