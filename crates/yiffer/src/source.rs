//! The Yiffer source as seen by the host.

use crate::api::{comic_url, SearchQuery, SortOrder, YifferClient};
use crate::error::Result as YifferResult;
use crate::filters;
use crate::mapper;
use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::{
    Chapter, Filter, FilterValue, MangaDetails, MangasPage, Page, Source, SourceInfo,
    YifferConfig,
};
use tracing::info;

pub const SOURCE_ID: &str = "en.yiffer";
pub const SOURCE_NAME: &str = "Yiffer";
pub const SOURCE_LANG: &str = "en";

/// Yiffer content source
#[derive(Debug, Clone)]
pub struct YifferSource {
    client: YifferClient,
}

impl YifferSource {
    /// Create a source with its own HTTP client
    pub fn new(config: &YifferConfig) -> Result<Self> {
        let client = YifferClient::new(config).context("Failed to create Yiffer client")?;
        Ok(Self { client })
    }

    /// Create a source using the host's HTTP client
    pub fn with_client(client: reqwest::Client, config: &YifferConfig) -> Self {
        Self {
            client: YifferClient::with_client(client, config),
        }
    }

    async fn fetch_search(&self, query: &SearchQuery) -> YifferResult<MangasPage> {
        let url = query.to_url(self.client.base_url())?;
        let body = self.client.get_text(url).await?;
        mapper::parse_search(&body, self.client.static_base_url())
    }

    async fn fetch_comic(&self, name: &str) -> YifferResult<String> {
        let url = comic_url(self.client.base_url(), name)?;
        self.client.get_text(url).await
    }
}

#[async_trait]
impl Source for YifferSource {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            id: SOURCE_ID.to_string(),
            name: SOURCE_NAME.to_string(),
            lang: SOURCE_LANG.to_string(),
            base_url: self.client.base_url().to_string(),
            supports_latest: true,
        }
    }

    fn filter_list(&self) -> Vec<Filter> {
        filters::filter_list()
    }

    async fn popular_manga(&self, page: u32) -> Result<MangasPage> {
        info!(page = page, "Fetching popular comics");
        self.fetch_search(&SearchQuery::listing(page, SortOrder::UserRating))
            .await
            .with_context(|| format!("Failed to fetch popular comics (page {})", page))
    }

    async fn latest_manga(&self, page: u32) -> Result<MangasPage> {
        info!(page = page, "Fetching latest comics");
        self.fetch_search(&SearchQuery::listing(page, SortOrder::Updated))
            .await
            .with_context(|| format!("Failed to fetch latest comics (page {})", page))
    }

    async fn search_manga(
        &self,
        page: u32,
        query: &str,
        filters: &[FilterValue],
    ) -> Result<MangasPage> {
        let search = SearchQuery::from_filters(query, page, filters);
        info!(
            page = page,
            query = %query,
            order = %search.order,
            categories = search.categories.len(),
            tags = search.tags.len(),
            keywords = search.keyword_ids.len(),
            "Searching comics"
        );
        self.fetch_search(&search)
            .await
            .with_context(|| format!("Failed to search comics for '{}'", query))
    }

    async fn manga_details(&self, id: &str) -> Result<MangaDetails> {
        info!(comic = %id, "Fetching comic details");
        let body = self
            .fetch_comic(id)
            .await
            .with_context(|| format!("Failed to fetch comic '{}'", id))?;
        mapper::parse_details(&body, self.client.static_base_url())
            .with_context(|| format!("Failed to read details of comic '{}'", id))
    }

    async fn chapter_list(&self, id: &str) -> Result<Vec<Chapter>> {
        info!(comic = %id, "Fetching chapter list");
        let body = self
            .fetch_comic(id)
            .await
            .with_context(|| format!("Failed to fetch comic '{}'", id))?;
        mapper::parse_chapters(&body)
            .with_context(|| format!("Failed to read chapters of comic '{}'", id))
    }

    async fn page_list(&self, chapter_id: &str) -> Result<Vec<Page>> {
        info!(comic = %chapter_id, "Fetching page list");
        let body = self
            .fetch_comic(chapter_id)
            .await
            .with_context(|| format!("Failed to fetch comic '{}'", chapter_id))?;
        mapper::parse_pages(&body, self.client.static_base_url())
            .with_context(|| format!("Failed to read pages of comic '{}'", chapter_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YifferError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const COMIC: &str = r#"{
        "name": "Fox Tales",
        "numberOfPages": 3,
        "artist": "Someone",
        "id": 7,
        "cat": "Furry",
        "tag": "MF",
        "created": "2019-01-02T03:04:05.000Z",
        "updated": "2020-05-06T07:08:09.000Z",
        "userRating": 8.0,
        "keywords": ["fox"],
        "previousComic": null,
        "nextComic": "Fox Tales 2"
    }"#;

    /// Serve one canned response and hand back the request target it answered
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            // The client may hang up first on error statuses
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;

            let request = String::from_utf8_lossy(&request).to_string();
            request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn source_for(base_url: &str) -> YifferSource {
        let config = YifferConfig {
            base_url: base_url.to_string(),
            static_base_url: "https://static.example".to_string(),
            ..Default::default()
        };
        // Keep loopback traffic away from any proxy set in the environment
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        YifferSource::with_client(client, &config)
    }

    #[test]
    fn test_info_and_filters() {
        let source = YifferSource::new(&YifferConfig::default()).unwrap();
        let info = source.info();
        assert_eq!(info.name, "Yiffer");
        assert_eq!(info.lang, "en");
        assert_eq!(info.base_url, "https://yiffer.xyz");
        assert!(info.supports_latest);
        assert_eq!(source.filter_list().len(), 4);
    }

    #[tokio::test]
    async fn test_popular_requests_by_rating() {
        let (base, server) =
            serve_once("200 OK", r#"{"comics": [], "numberOfPages": 3, "page": 1}"#).await;

        let page = source_for(&base).popular_manga(1).await.unwrap();
        assert!(page.entries.is_empty());
        assert!(page.has_next_page);

        let target = server.await.unwrap();
        assert_eq!(target, "/api/comicsPaginated?search=&page=1&order=userRating");
    }

    #[tokio::test]
    async fn test_latest_requests_by_update() {
        let (base, server) =
            serve_once("200 OK", r#"{"comics": [], "numberOfPages": 1, "page": 1}"#).await;

        let page = source_for(&base).latest_manga(1).await.unwrap();
        assert!(!page.has_next_page);

        let target = server.await.unwrap();
        assert_eq!(target, "/api/comicsPaginated?search=&page=1&order=updated");
    }

    #[tokio::test]
    async fn test_search_sends_filters() {
        let (base, server) =
            serve_once("200 OK", r#"{"comics": [], "numberOfPages": 0, "page": 1}"#).await;

        let filters = vec![
            FilterValue::Select {
                id: "order".to_string(),
                index: 1,
            },
            FilterValue::Group {
                id: "tags".to_string(),
                selected: vec!["MF".to_string()],
            },
            FilterValue::Group {
                id: "keywords".to_string(),
                selected: vec!["fox".to_string(), "nope".to_string()],
            },
        ];
        source_for(&base)
            .search_manga(2, "tales", &filters)
            .await
            .unwrap();

        let target = server.await.unwrap();
        assert_eq!(
            target,
            "/api/comicsPaginated?search=tales&page=2&order=userRating&tags%5B%5D=MF&keywordIds%5B%5D=114"
        );
    }

    #[tokio::test]
    async fn test_details_chapters_pages() {
        let target = {
            let (base, server) = serve_once("200 OK", COMIC).await;
            let details = source_for(&base).manga_details("Fox Tales").await.unwrap();
            assert_eq!(details.title, "Fox Tales");
            assert_eq!(
                details.thumbnail_url.as_deref(),
                Some("https://static.example/comics/Fox%20Tales/thumbnail.jpg")
            );
            let description = details.description.unwrap();
            assert!(description.contains("Keywords: fox"));
            assert!(description.contains("Next Comic: Fox Tales 2"));
            server.await.unwrap()
        };
        assert_eq!(target, "/api/comics/Fox%20Tales");

        let (base, server) = serve_once("200 OK", COMIC).await;
        let chapters = source_for(&base).chapter_list("Fox Tales").await.unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name, "Chapter");
        server.await.unwrap();

        let (base, server) = serve_once("200 OK", COMIC).await;
        let pages = source_for(&base).page_list("Fox Tales").await.unwrap();
        let images: Vec<_> = pages.iter().filter_map(|p| p.image_url.as_deref()).collect();
        assert_eq!(
            images,
            vec![
                "https://static.example/comics/Fox%20Tales/001.jpg",
                "https://static.example/comics/Fox%20Tales/002.jpg",
                "https://static.example/comics/Fox%20Tales/003.jpg",
            ]
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_status_error_propagates() {
        let (base, server) = serve_once("503 Service Unavailable", "").await;

        let err = source_for(&base).manga_details("Fox Tales").await.unwrap_err();
        let cause = err.downcast_ref::<YifferError>().unwrap();
        assert!(matches!(
            cause,
            YifferError::Status { status, .. } if status.as_u16() == 503
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_decode_error_propagates() {
        let (base, server) = serve_once("200 OK", r#"{"name": "Fox Tales"}"#).await;

        let err = source_for(&base).page_list("Fox Tales").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<YifferError>(),
            Some(YifferError::Decode { what: "comic", .. })
        ));
        server.await.unwrap();
    }
}
