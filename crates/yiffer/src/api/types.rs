//! Yiffer API response types.
//!
//! These types represent the JSON responses from the Yiffer API.

use serde::{Deserialize, Serialize};

/// Comic summary as returned in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: u32,
    pub name: String,
    pub tag: String,
    pub artist: String,
    pub state: String,
    pub number_of_pages: u32,
    pub user_rating: f64,
}

/// Paginated search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub comics: Vec<Comic>,
    /// Total number of result pages
    pub number_of_pages: u32,
    /// Page these results belong to
    pub page: u32,
}

impl SearchResponse {
    /// Whether results continue after this page
    pub fn has_next_page(&self) -> bool {
        self.number_of_pages > self.page
    }
}

/// Full comic details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicResponse {
    pub name: String,
    pub number_of_pages: u32,
    pub artist: String,
    pub id: u32,
    #[serde(rename = "cat")]
    pub category: String,
    pub tag: String,
    pub created: String,
    pub updated: String,
    pub user_rating: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub previous_comic: Option<String>,
    pub next_comic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_decoding() {
        let json = r#"{
            "comics": [{
                "id": 42,
                "name": "Some Comic",
                "tag": "MF",
                "artist": "Someone",
                "state": "finished",
                "numberOfPages": 18,
                "userRating": 7.5
            }],
            "numberOfPages": 3,
            "page": 1
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.comics.len(), 1);
        assert_eq!(response.comics[0].number_of_pages, 18);
        assert_eq!(response.comics[0].user_rating, 7.5);
        assert!(response.has_next_page());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let response = SearchResponse {
            comics: vec![],
            number_of_pages: 3,
            page: 3,
        };
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_comic_response_optional_fields() {
        let json = r#"{
            "name": "Some Comic",
            "numberOfPages": 12,
            "artist": "Someone",
            "id": 42,
            "cat": "Furry",
            "tag": "MF",
            "created": "2019-01-02T03:04:05.000Z",
            "updated": "2020-05-06T07:08:09.000Z",
            "userRating": 8.0,
            "previousComic": null,
            "nextComic": "Some Comic 2"
        }"#;

        let comic: ComicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(comic.category, "Furry");
        assert!(comic.keywords.is_empty());
        assert_eq!(comic.previous_comic, None);
        assert_eq!(comic.next_comic.as_deref(), Some("Some Comic 2"));
    }

    #[test]
    fn test_comic_response_missing_required_field() {
        let json = r#"{"name": "Some Comic", "numberOfPages": 12}"#;
        assert!(serde_json::from_str::<ComicResponse>(json).is_err());
    }
}
