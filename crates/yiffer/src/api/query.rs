//! Request construction for the Yiffer API.

use crate::error::{Result, YifferError};
use url::Url;

/// Paginated search endpoint
pub const SEARCH_PATH: &str = "/api/comicsPaginated";
/// Single comic endpoint, followed by `/{name}`
pub const COMIC_PATH: &str = "/api/comics";

/// Result ordering understood by the search endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recently updated first
    #[default]
    Updated,
    /// Highest user rating first
    UserRating,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Updated => "updated",
            SortOrder::UserRating => "userRating",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one search request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    /// 1-based page number
    pub page: u32,
    pub order: SortOrder,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub keyword_ids: Vec<u32>,
}

impl SearchQuery {
    /// Unfiltered listing in the given order
    pub fn listing(page: u32, order: SortOrder) -> Self {
        Self {
            page,
            order,
            ..Default::default()
        }
    }

    /// Build the search URL against an API base such as `https://yiffer.xyz`
    ///
    /// Multi-valued filters become one repeated parameter per value, in input order.
    pub fn to_url(&self, base_url: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("search", &self.search)
                .append_pair("page", &self.page.to_string())
                .append_pair("order", self.order.as_str());

            for category in &self.categories {
                pairs.append_pair("categories[]", category);
            }
            for tag in &self.tags {
                pairs.append_pair("tags[]", tag);
            }
            for keyword_id in &self.keyword_ids {
                pairs.append_pair("keywordIds[]", &keyword_id.to_string());
            }
        }

        Ok(url)
    }
}

/// Source-relative key identifying a comic
///
/// This is an identifier for the host, not a request URL, so the name is kept
/// verbatim. Every absolute URL built here escapes it instead.
pub fn comic_path(name: &str) -> String {
    format!("{}/{}", COMIC_PATH, name)
}

/// Full URL of the comic detail endpoint
///
/// The name is pushed as a single path segment, so spaces and slashes are escaped.
pub fn comic_url(base_url: &str, name: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), COMIC_PATH))?;
    url.path_segments_mut()
        .map_err(|_| YifferError::CannotBeABase(base_url.to_string()))?
        .push(name);
    Ok(url)
}

/// Full URL of a file in a comic's static directory, `{static}/comics/{name}/{file}`
///
/// The name is escaped the same way as in [`comic_url`].
pub fn asset_url(static_base_url: &str, name: &str, file: &str) -> Result<Url> {
    let mut url = Url::parse(static_base_url)?;
    url.path_segments_mut()
        .map_err(|_| YifferError::CannotBeABase(static_base_url.to_string()))?
        .pop_if_empty()
        .extend(["comics", name, file]);
    Ok(url)
}
