//! Data model types for the remote game catalog.
//!
//! Field names mirror the remote API's JSON so records deserialize
//! verbatim. Records are immutable once fetched: the store replaces
//! whole values, it never patches fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Game (list context) ─────────────────────────────────────────────────────

/// A game as returned by the list-games endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
    /// Release date as `YYYY-MM-DD`. Absent for unreleased/undated titles.
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    /// Aggregate critic score, 0-100. Absent when unreviewed.
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub platforms: Vec<PlatformAssociation>,
    #[serde(default)]
    pub genres: Vec<GenreRef>,
}

impl Game {
    /// Release date parsed to a `NaiveDate`. Missing or unparseable
    /// dates collapse to `NaiveDate::MIN` so they sort earliest.
    pub fn release_date(&self) -> NaiveDate {
        self.released
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .unwrap_or(NaiveDate::MIN)
    }

    /// Critic score with missing values treated as zero for ordering.
    pub fn score(&self) -> i32 {
        self.metacritic.unwrap_or(0)
    }

    /// Platform display names, in association order.
    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|p| p.platform.name.as_str())
    }

    /// Genre display names, in association order.
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|g| g.name.as_str())
    }
}

/// The list endpoint nests each platform reference one level deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAssociation {
    pub platform: PlatformRef,
}

/// Reference to a platform by id and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRef {
    pub id: u64,
    pub name: String,
}

/// Reference to a genre by id and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: u64,
    pub name: String,
}

// ── Genre (directory context) ───────────────────────────────────────────────

/// A genre as returned by the list-genres endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub games_count: u64,
    #[serde(default)]
    pub image_background: Option<String>,
}

// ── Game detail ─────────────────────────────────────────────────────────────

/// Full record from the get-game-by-id endpoint.
///
/// `description` carries raw HTML from the remote API; strip it with
/// [`crate::text::strip_html_tags`] before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub platforms: Vec<PlatformAssociation>,
    #[serde(default)]
    pub genres: Vec<GenreRef>,
    #[serde(default)]
    pub publishers: Vec<Publisher>,
}

/// A publishing company attached to a game detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: u64,
    pub name: String,
}

// ── Pagination envelope ─────────────────────────────────────────────────────

/// Paginated response wrapper shared by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    /// URL of the next page. `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}
