//! The capability set every content source exposes to the host.

use crate::filters::{Filter, FilterValue};
use crate::models::{Chapter, MangaDetails, MangasPage, Page};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Static description of a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
    pub lang: String,
    pub base_url: String,
    pub supports_latest: bool,
}

/// A content source the host can list, search and read from.
///
/// Each call is one request/response round trip; sources keep no state
/// between calls, so a single instance may be shared freely.
#[async_trait]
pub trait Source: Send + Sync {
    fn info(&self) -> SourceInfo;

    /// Filters the host should offer on the search screen
    fn filter_list(&self) -> Vec<Filter>;

    async fn popular_manga(&self, page: u32) -> Result<MangasPage>;

    async fn latest_manga(&self, page: u32) -> Result<MangasPage>;

    async fn search_manga(
        &self,
        page: u32,
        query: &str,
        filters: &[FilterValue],
    ) -> Result<MangasPage>;

    async fn manga_details(&self, id: &str) -> Result<MangaDetails>;

    async fn chapter_list(&self, id: &str) -> Result<Vec<Chapter>>;

    async fn page_list(&self, chapter_id: &str) -> Result<Vec<Page>>;
}
