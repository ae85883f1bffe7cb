//! Domain models for the analysis report.
//!
//! Everything here is an immutable per-request value object: built once from
//! the analyzer outputs, serialized as the response body, then dropped.
//! Wire names are camelCase to match the public JSON schema.

use serde::{Deserialize, Serialize};

/// Outcome classification for a single SEO check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    Good,
    Warning,
    Missing,
}

/// Grouping bucket used for per-category sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Technical,
    Social,
    Content,
    Performance,
}

/// Static severity class of a signal, assigned at analyzer-definition time.
///
/// Replaces the old UI habit of re-deriving priority from the tag's display
/// name string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSeverity {
    Critical,
    Secondary,
    Cosmetic,
}

/// One scored SEO signal.
///
/// `recommendation` is set iff `status` is not [`TagStatus::Good`].
/// `character_count`/`max_length` are populated only by the two
/// length-bounded checks (title, meta description).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoTag {
    pub name: String,
    pub description: String,
    pub content: Option<String>,
    pub status: TagStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    pub is_present: bool,
    pub score: u8,
    pub category: TagCategory,
    pub severity: TagSeverity,
}

/// The ten meta fields extracted from a fetched page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaFields {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_site_name: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
}

/// Externally measured fetch metrics consumed by the performance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    /// Upstream response latency in milliseconds.
    pub response_time_ms: u64,
    /// Byte length of the fetched HTML body.
    pub byte_length: u64,
}

/// Per-category sub-scores (0-10 averages, one decimal) plus the combined
/// total on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical: f64,
    pub social: f64,
    pub content: f64,
    pub performance: f64,
    pub total: u32,
}

/// Complete analysis report for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    pub tags: Vec<SeoTag>,
    pub score: u32,
    pub found_tags: usize,
    pub warning_tags: usize,
    pub missing_tags: usize,
    pub total_checks: usize,
    pub analysis_time: u64,
    pub page_size: String,
    pub response_time: u64,
    pub category_scores: CategoryScores,
}
