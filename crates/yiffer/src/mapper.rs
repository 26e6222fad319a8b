//! Translation of Yiffer API responses into the host content model.
//!
//! Search results become listings; the comic detail response is decoded three
//! ways: as manga details, as its single chapter, and as its page list.

use crate::api::query::{asset_url, comic_path};
use crate::api::types::{ComicResponse, SearchResponse};
use crate::error::{Result, YifferError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use shared::{Chapter, MangaDetails, MangaEntry, MangaStatus, MangasPage, Page};
use tracing::{debug, warn};

/// Name of the single chapter every comic maps to
pub const CHAPTER_NAME: &str = "Chapter";

fn decode<T: DeserializeOwned>(body: &str, what: &'static str) -> Result<T> {
    let value =
        serde_json::from_str(body).map_err(|source| YifferError::Decode { what, source })?;
    debug!(what = what, "Decoded response");
    Ok(value)
}

/// Absolute thumbnail URL of a comic
pub fn thumbnail_url(static_base_url: &str, name: &str) -> Result<String> {
    Ok(asset_url(static_base_url, name, "thumbnail.jpg")?.to_string())
}

/// Absolute image URL of a 1-based page
pub fn page_image_url(static_base_url: &str, name: &str, page: u32) -> Result<String> {
    Ok(asset_url(static_base_url, name, &format!("{:03}.jpg", page))?.to_string())
}

/// Decode a search response into one listing page
pub fn parse_search(body: &str, static_base_url: &str) -> Result<MangasPage> {
    let response: SearchResponse = decode(body, "search")?;
    let has_next_page = response.has_next_page();

    let entries = response
        .comics
        .into_iter()
        .map(|comic| {
            Ok(MangaEntry {
                id: comic.name.clone(),
                url: comic_path(&comic.name),
                thumbnail_url: Some(thumbnail_url(static_base_url, &comic.name)?),
                artist: Some(comic.artist.clone()),
                author: Some(comic.artist),
                status: MangaStatus::Completed,
                title: comic.name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MangasPage {
        entries,
        has_next_page,
    })
}

/// Decode a comic response into manga details
pub fn parse_details(body: &str, static_base_url: &str) -> Result<MangaDetails> {
    let comic: ComicResponse = decode(body, "comic")?;

    Ok(MangaDetails {
        id: comic.name.clone(),
        url: comic_path(&comic.name),
        thumbnail_url: Some(thumbnail_url(static_base_url, &comic.name)?),
        description: Some(describe(&comic)),
        artist: Some(comic.artist.clone()),
        author: Some(comic.artist),
        status: MangaStatus::Completed,
        title: comic.name,
    })
}

/// Decode a comic response into its only chapter
pub fn parse_chapters(body: &str) -> Result<Vec<Chapter>> {
    let comic: ComicResponse = decode(body, "comic")?;

    let date_upload = parse_upload_date(&comic.updated);
    if date_upload.is_none() {
        warn!(name = %comic.name, updated = %comic.updated, "Unparseable update date");
    }

    Ok(vec![Chapter {
        id: comic.name.clone(),
        url: comic_path(&comic.name),
        name: CHAPTER_NAME.to_string(),
        date_upload,
    }])
}

/// Decode a comic response into pages 1..=numberOfPages
pub fn parse_pages(body: &str, static_base_url: &str) -> Result<Vec<Page>> {
    let comic: ComicResponse = decode(body, "comic")?;

    (1..=comic.number_of_pages)
        .map(|index| {
            Ok(Page {
                index,
                url: String::new(),
                image_url: Some(page_image_url(static_base_url, &comic.name, index)?),
            })
        })
        .collect()
}

/// Human-readable summary of a comic, one labelled field per paragraph
///
/// Fields with an empty or missing value are left out.
pub fn describe(comic: &ComicResponse) -> String {
    let fields = [
        ("Pages", Some(comic.number_of_pages.to_string())),
        ("Category", Some(comic.category.clone())),
        ("Tag", Some(comic.tag.clone())),
        ("User Rating", Some(format_rating(comic.user_rating))),
        ("Keywords", Some(comic.keywords.join(", "))),
        ("Previous Comic", comic.previous_comic.clone()),
        ("Next Comic", comic.next_comic.clone()),
    ];

    fields
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}: {}", label, v))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// Integral ratings keep one decimal, as the site shows them
fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// Parse the `updated` timestamp into epoch milliseconds (UTC)
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC, or a bare
/// leading date at midnight UTC.
pub fn parse_upload_date(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }

    let date = value.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
