//! Content model exchanged between a host and its sources.
//!
//! Sources translate whatever their remote site returns into these types;
//! the host only ever sees listings, details, chapters and pages.

use serde::{Deserialize, Serialize};

/// Publication status of a manga
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MangaStatus {
    #[default]
    Unknown,
    Ongoing,
    Completed,
}

impl std::fmt::Display for MangaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MangaStatus::Unknown => write!(f, "unknown"),
            MangaStatus::Ongoing => write!(f, "ongoing"),
            MangaStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for MangaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(MangaStatus::Unknown),
            "ongoing" => Ok(MangaStatus::Ongoing),
            "completed" => Ok(MangaStatus::Completed),
            _ => Err(format!("Invalid manga status: {}", s)),
        }
    }
}

/// Manga summary as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaEntry {
    /// Source-unique identifier
    pub id: String,
    /// Source-relative path of the manga
    pub url: String,
    pub title: String,
    pub artist: Option<String>,
    pub author: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: MangaStatus,
}

/// One page of a listing or search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangasPage {
    pub entries: Vec<MangaEntry>,
    pub has_next_page: bool,
}

impl MangasPage {
    /// Create an empty page with no further pages
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            has_next_page: false,
        }
    }
}

/// Full manga details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaDetails {
    pub id: String,
    pub url: String,
    pub title: String,
    pub artist: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: MangaStatus,
}

/// A readable unit of a manga
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub url: String,
    pub name: String,
    /// Upload time in milliseconds since the Unix epoch (UTC)
    pub date_upload: Option<i64>,
}

/// A single page image of a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page index
    pub index: u32,
    /// Intermediate page URL, empty when the image URL is already known
    pub url: String,
    pub image_url: Option<String>,
}
