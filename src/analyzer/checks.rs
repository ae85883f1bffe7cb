//! Per-signal SEO checks.
//!
//! Each check is a pure function mapping one extracted field (or one
//! measured metric) to a scored [`SeoTag`]. Checks never fail and never
//! look at each other's output; `run_checks` fixes the report ordering.

use crate::domain::{MetaFields, PageMetrics, SeoTag, TagCategory, TagSeverity, TagStatus};

use super::report::format_bytes;

/// Character bounds for the title tag.
pub const TITLE_BOUNDS: (usize, usize) = (30, 60);
/// Character bounds for the meta description.
pub const DESCRIPTION_BOUNDS: (usize, usize) = (120, 160);

/// Page size thresholds in KB (warning bound, missing bound).
const PAGE_SIZE_KB_BOUNDS: (f64, f64) = (1024.0, 2048.0);
/// Response time thresholds in ms (warning bound, missing bound).
const RESPONSE_TIME_MS_BOUNDS: (u64, u64) = (1000, 2000);

/// Runs all twelve checks in report order.
pub fn run_checks(fields: &MetaFields, metrics: &PageMetrics) -> Vec<SeoTag> {
    vec![
        check_title(fields.title.as_deref()),
        check_meta_description(fields.meta_description.as_deref()),
        check_og_title(fields.og_title.as_deref()),
        check_og_description(fields.og_description.as_deref()),
        check_og_image(fields.og_image.as_deref()),
        check_og_site_name(fields.og_site_name.as_deref()),
        check_twitter_card(fields.twitter_card.as_deref()),
        check_twitter_title(fields.twitter_title.as_deref()),
        check_twitter_description(fields.twitter_description.as_deref()),
        check_twitter_image(fields.twitter_image.as_deref()),
        check_page_size(metrics.byte_length),
        check_response_time(metrics.response_time_ms),
    ]
}

pub fn check_title(title: Option<&str>) -> SeoTag {
    length_check(
        LengthSignal {
            name: "Title Tag",
            description: "Primary page title for search results",
            bounds: TITLE_BOUNDS,
            missing_recommendation:
                "Add a title tag to improve SEO. This is one of the most important ranking factors.",
            short_recommendation: "Title is too short. Aim for 30-60 characters for optimal SEO.",
            long_recommendation:
                "Title is too long. Keep it under 60 characters to avoid truncation in search results.",
        },
        title,
    )
}

pub fn check_meta_description(description: Option<&str>) -> SeoTag {
    length_check(
        LengthSignal {
            name: "Meta Description",
            description: "Search result snippet description",
            bounds: DESCRIPTION_BOUNDS,
            missing_recommendation:
                "Add a meta description to improve click-through rates from search results.",
            short_recommendation:
                "Meta description is too short. Aim for 120-160 characters for better search result display.",
            long_recommendation:
                "Meta description is too long. Keep it under 160 characters to avoid truncation.",
        },
        description,
    )
}

pub fn check_og_title(og_title: Option<&str>) -> SeoTag {
    strict_presence_check(
        PresenceSignal {
            name: "Open Graph Title",
            description: "Title for social media sharing",
            recommendation: "Add Open Graph title for better social media sharing appearance.",
            category: TagCategory::Social,
            severity: TagSeverity::Secondary,
        },
        og_title,
    )
}

pub fn check_og_description(og_description: Option<&str>) -> SeoTag {
    strict_presence_check(
        PresenceSignal {
            name: "Open Graph Description",
            description: "Description for social media sharing",
            recommendation: "Add Open Graph description for better social media sharing.",
            category: TagCategory::Social,
            severity: TagSeverity::Secondary,
        },
        og_description,
    )
}

pub fn check_og_image(og_image: Option<&str>) -> SeoTag {
    strict_presence_check(
        PresenceSignal {
            name: "Open Graph Image",
            description: "Image for social media sharing",
            recommendation:
                "Add Open Graph image (recommended size: 1200x630px) for social sharing.",
            category: TagCategory::Social,
            severity: TagSeverity::Secondary,
        },
        og_image,
    )
}

pub fn check_og_site_name(og_site_name: Option<&str>) -> SeoTag {
    soft_presence_check(
        PresenceSignal {
            name: "Open Graph Site Name",
            description: "Website name for social media",
            recommendation: "Consider adding Open Graph site name for brand consistency.",
            category: TagCategory::Social,
            severity: TagSeverity::Cosmetic,
        },
        og_site_name,
    )
}

pub fn check_twitter_card(twitter_card: Option<&str>) -> SeoTag {
    strict_presence_check(
        PresenceSignal {
            name: "Twitter Card Type",
            description: "Specifies Twitter card display type",
            recommendation:
                "Add Twitter Card meta tag (e.g., summary_large_image) for optimal Twitter sharing.",
            category: TagCategory::Technical,
            severity: TagSeverity::Critical,
        },
        twitter_card,
    )
}

pub fn check_twitter_title(twitter_title: Option<&str>) -> SeoTag {
    soft_presence_check(
        PresenceSignal {
            name: "Twitter Title",
            description: "Title for Twitter cards",
            recommendation: "Consider adding Twitter-specific title for optimized Twitter sharing.",
            category: TagCategory::Social,
            severity: TagSeverity::Cosmetic,
        },
        twitter_title,
    )
}

pub fn check_twitter_description(twitter_description: Option<&str>) -> SeoTag {
    soft_presence_check(
        PresenceSignal {
            name: "Twitter Description",
            description: "Description for Twitter cards",
            recommendation: "Consider adding Twitter-specific description for better engagement.",
            category: TagCategory::Social,
            severity: TagSeverity::Cosmetic,
        },
        twitter_description,
    )
}

pub fn check_twitter_image(twitter_image: Option<&str>) -> SeoTag {
    soft_presence_check(
        PresenceSignal {
            name: "Twitter Image",
            description: "Image for Twitter cards",
            recommendation: "Consider adding Twitter-specific image for better visual appeal.",
            category: TagCategory::Social,
            severity: TagSeverity::Cosmetic,
        },
        twitter_image,
    )
}

/// Page weight check against the fetched body's byte length.
///
/// The thresholds are compared ascending so oversized pages really do reach
/// the missing branch (values above 2048 KB).
pub fn check_page_size(byte_length: u64) -> SeoTag {
    let size_kb = byte_length as f64 / 1024.0;
    let (status, score, recommendation) = if size_kb <= PAGE_SIZE_KB_BOUNDS.0 {
        (TagStatus::Good, 10, None)
    } else if size_kb <= PAGE_SIZE_KB_BOUNDS.1 {
        (
            TagStatus::Warning,
            5,
            Some("Page size is quite large. Consider optimizing images and compressing content."),
        )
    } else {
        (
            TagStatus::Missing,
            0,
            Some("Page size is very large and may impact loading speed significantly."),
        )
    };

    SeoTag {
        name: "Page Size".to_string(),
        description: "Total page size for performance".to_string(),
        content: Some(format_bytes(byte_length)),
        status,
        recommendation: recommendation.map(str::to_string),
        character_count: None,
        max_length: None,
        is_present: true,
        score,
        category: TagCategory::Performance,
        severity: TagSeverity::Secondary,
    }
}

pub fn check_response_time(response_time_ms: u64) -> SeoTag {
    let (status, score, recommendation) = if response_time_ms <= RESPONSE_TIME_MS_BOUNDS.0 {
        (TagStatus::Good, 10, None)
    } else if response_time_ms <= RESPONSE_TIME_MS_BOUNDS.1 {
        (
            TagStatus::Warning,
            5,
            Some("Server response time is slow. Consider optimizing server performance."),
        )
    } else {
        (
            TagStatus::Missing,
            0,
            Some("Server response time is very slow and will negatively impact user experience."),
        )
    };

    SeoTag {
        name: "Response Time".to_string(),
        description: "Server response time".to_string(),
        content: Some(format!("{}ms", response_time_ms)),
        status,
        recommendation: recommendation.map(str::to_string),
        character_count: None,
        max_length: None,
        is_present: true,
        score,
        category: TagCategory::Performance,
        severity: TagSeverity::Secondary,
    }
}

struct LengthSignal {
    name: &'static str,
    description: &'static str,
    bounds: (usize, usize),
    missing_recommendation: &'static str,
    short_recommendation: &'static str,
    long_recommendation: &'static str,
}

fn length_check(signal: LengthSignal, value: Option<&str>) -> SeoTag {
    let value = value.filter(|s| !s.is_empty());
    let length = value.map(|s| s.chars().count()).unwrap_or(0);
    let (min, max) = signal.bounds;

    let (status, score, recommendation) = match value {
        None => (TagStatus::Missing, 0, Some(signal.missing_recommendation)),
        Some(_) if length >= min && length <= max => (TagStatus::Good, 10, None),
        Some(_) if length < min => (TagStatus::Warning, 5, Some(signal.short_recommendation)),
        Some(_) => (TagStatus::Warning, 5, Some(signal.long_recommendation)),
    };

    SeoTag {
        name: signal.name.to_string(),
        description: signal.description.to_string(),
        content: value.map(str::to_string),
        status,
        recommendation: recommendation.map(str::to_string),
        character_count: Some(length),
        max_length: Some(max),
        is_present: value.is_some(),
        score,
        category: TagCategory::Content,
        severity: TagSeverity::Critical,
    }
}

struct PresenceSignal {
    name: &'static str,
    description: &'static str,
    recommendation: &'static str,
    category: TagCategory,
    severity: TagSeverity,
}

/// Load-bearing signal: absence counts as a full miss.
fn strict_presence_check(signal: PresenceSignal, value: Option<&str>) -> SeoTag {
    presence_check(signal, value, TagStatus::Missing, 0)
}

/// Nice-to-have signal: absence only degrades to a warning.
fn soft_presence_check(signal: PresenceSignal, value: Option<&str>) -> SeoTag {
    presence_check(signal, value, TagStatus::Warning, 5)
}

fn presence_check(
    signal: PresenceSignal,
    value: Option<&str>,
    absent_status: TagStatus,
    absent_score: u8,
) -> SeoTag {
    let value = value.filter(|s| !s.is_empty());
    let is_present = value.is_some();

    SeoTag {
        name: signal.name.to_string(),
        description: signal.description.to_string(),
        content: value.map(str::to_string),
        status: if is_present {
            TagStatus::Good
        } else {
            absent_status
        },
        recommendation: if is_present {
            None
        } else {
            Some(signal.recommendation.to_string())
        },
        character_count: None,
        max_length: None,
        is_present,
        score: if is_present { 10 } else { absent_score },
        category: signal.category,
        severity: signal.severity,
    }
}
