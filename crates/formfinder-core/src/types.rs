//! Core types for formfinder-core.
//!
//! This module defines the catalog records ([`Form`], [`Category`]), the
//! [`SourceType`] discriminant, and the request/response pair used by the
//! query engine: [`SearchFilters`] in, [`SearchResult`] out.
//!
//! Wire names are camelCase (`downloadCount`, `categoryIds`) and enum tokens
//! are snake_case (`user_submitted`), matching the catalog JSON document.

use crate::error::UnknownSourceType;
use serde::{Deserialize, Serialize};

/// One document or template entity in the catalog.
///
/// Forms are immutable once the catalog is loaded. Counters are whatever the
/// catalog document carried at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Origin classification of the form.
    pub source_type: SourceType,
    /// Publisher label, e.g. "Internal Revenue Service".
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub source_url: String,
    /// Direct link to the downloadable file.
    #[serde(default)]
    pub external_file_url: String,
    /// Categories this form belongs to. Order is significant for
    /// [`Catalog::categories_of`](crate::catalog::Catalog::categories_of).
    #[serde(default)]
    pub category_ids: Vec<String>,
    /// Free-text tags, searched alongside title and description.
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub save_count: u64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl Form {
    /// Whether this form is filed under `category_id`.
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category_ids.iter().any(|c| c == category_id)
    }

    /// Whether this form shares at least one category with `other`.
    pub fn shares_category_with(&self, other: &Form) -> bool {
        self.category_ids.iter().any(|c| other.in_category(c))
    }
}

/// A topic grouping forms can belong to (many-to-many).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Advertised form count, as carried by the catalog document.
    #[serde(default)]
    pub form_count: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
}

fn default_true() -> bool { true }

/// Where a form originally came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Government,
    Educational,
    Legal,
    Manual,
    UserSubmitted,
}

impl SourceType {
    pub const ALL: [SourceType; 5] = [
        SourceType::Government,
        SourceType::Educational,
        SourceType::Legal,
        SourceType::Manual,
        SourceType::UserSubmitted,
    ];
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Government => write!(f, "government"),
            SourceType::Educational => write!(f, "educational"),
            SourceType::Legal => write!(f, "legal"),
            SourceType::Manual => write!(f, "manual"),
            SourceType::UserSubmitted => write!(f, "user_submitted"),
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = UnknownSourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "government" => Ok(SourceType::Government),
            "educational" => Ok(SourceType::Educational),
            "legal" => Ok(SourceType::Legal),
            "manual" => Ok(SourceType::Manual),
            "user_submitted" => Ok(SourceType::UserSubmitted),
            _ => Err(UnknownSourceType(s.to_string())),
        }
    }
}

/// Result ordering requested by the caller.
///
/// Parsing is lenient: any token that is not one of the four known modes
/// resolves to [`SortBy::Relevance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortBy {
    /// Descending view count.
    #[default]
    Relevance,
    /// Descending download count.
    Popularity,
    /// Most recently updated first.
    Date,
    /// Descending download count.
    Downloads,
}

impl SortBy {
    pub fn parse_lenient(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "popularity" => SortBy::Popularity,
            "date" => SortBy::Date,
            "downloads" => SortBy::Downloads,
            _ => SortBy::Relevance,
        }
    }
}

impl From<String> for SortBy {
    fn from(token: String) -> Self {
        SortBy::parse_lenient(&token)
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Relevance => write!(f, "relevance"),
            SortBy::Popularity => write!(f, "popularity"),
            SortBy::Date => write!(f, "date"),
            SortBy::Downloads => write!(f, "downloads"),
        }
    }
}

/// Recency window token. Accepted and echoed back, never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DateRange {
    #[default]
    Any,
    Week,
    Month,
    Year,
}

impl DateRange {
    pub fn parse_lenient(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "week" => DateRange::Week,
            "month" => DateRange::Month,
            "year" => DateRange::Year,
            _ => DateRange::Any,
        }
    }
}

impl From<String> for DateRange {
    fn from(token: String) -> Self {
        DateRange::parse_lenient(&token)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::Any => write!(f, "any"),
            DateRange::Week => write!(f, "week"),
            DateRange::Month => write!(f, "month"),
            DateRange::Year => write!(f, "year"),
        }
    }
}

/// Constraints applied by [`search`](crate::search::search).
///
/// Every field has a "no constraint" default, so a partially specified filter
/// set (in Rust via `..Default::default()`, on the wire by omitting keys)
/// behaves exactly like a full one with the gaps filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Keep forms in any of these categories. Empty means no restriction.
    pub categories: Vec<String>,
    /// Keep forms with one of these source types. Empty means no restriction.
    pub sources: Vec<SourceType>,
    pub date_range: DateRange,
    pub sort_by: SortBy,
}

impl SearchFilters {
    pub fn sorted_by(sort_by: SortBy) -> Self {
        Self { sort_by, ..Default::default() }
    }
}

/// One page of matches plus everything a caller needs to render
/// "N results" and pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub forms: Vec<Form>,
    /// Number of matches before pagination.
    pub total_count: usize,
    pub query: String,
    pub filters: SearchFilters,
}

impl SearchResult {
    /// Number of pages of size `limit` needed to show every match.
    pub fn total_pages(&self, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        self.total_count.div_ceil(limit)
    }

    /// Whether another page follows `page` at this page size. Page 0 and a
    /// zero page size never have a next page.
    pub fn has_more(&self, page: usize, limit: usize) -> bool {
        page > 0 && limit > 0 && page.saturating_mul(limit) < self.total_count
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
