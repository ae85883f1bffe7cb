//! Report aggregation: summary counts, overall score, category sub-scores.

use crate::domain::{
    CategoryScores, MetaFields, PageMetrics, SeoReport, SeoTag, TagCategory, TagStatus,
};

/// Combines the ordered tag sequence into the final report.
///
/// Pure function of its inputs; the tag order is preserved as produced by
/// the checks.
pub fn build_report(
    url: &str,
    fields: MetaFields,
    tags: Vec<SeoTag>,
    metrics: PageMetrics,
    analysis_time_ms: u64,
) -> SeoReport {
    let found_tags = count_status(&tags, TagStatus::Good);
    let warning_tags = count_status(&tags, TagStatus::Warning);
    let missing_tags = count_status(&tags, TagStatus::Missing);
    let total_checks = tags.len();

    let score = overall_score(found_tags, warning_tags, total_checks);
    let category_scores = category_scores(&tags);

    SeoReport {
        url: url.to_string(),
        title: fields.title,
        meta_description: fields.meta_description,
        og_title: fields.og_title,
        og_description: fields.og_description,
        og_image: fields.og_image,
        og_site_name: fields.og_site_name,
        twitter_card: fields.twitter_card,
        twitter_title: fields.twitter_title,
        twitter_description: fields.twitter_description,
        twitter_image: fields.twitter_image,
        tags,
        score,
        found_tags,
        warning_tags,
        missing_tags,
        total_checks,
        analysis_time: analysis_time_ms,
        page_size: format_bytes(metrics.byte_length),
        response_time: metrics.response_time_ms,
        category_scores,
    }
}

fn count_status(tags: &[SeoTag], status: TagStatus) -> usize {
    tags.iter().filter(|t| t.status == status).count()
}

/// Weighted integer percentage: a warning earns half credit, a miss none.
pub fn overall_score(found: usize, warnings: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let weighted = found as f64 + warnings as f64 * 0.5;
    (weighted / total as f64 * 100.0).round() as u32
}

/// Per-category averages of the 0-10 tag scores, one decimal each, plus the
/// combined total scaled onto 0-100.
pub fn category_scores(tags: &[SeoTag]) -> CategoryScores {
    let technical = category_average(tags, TagCategory::Technical);
    let social = category_average(tags, TagCategory::Social);
    let content = category_average(tags, TagCategory::Content);
    let performance = category_average(tags, TagCategory::Performance);

    CategoryScores {
        technical,
        social,
        content,
        performance,
        total: ((technical + social + content + performance) * 2.5).round() as u32,
    }
}

fn category_average(tags: &[SeoTag], category: TagCategory) -> f64 {
    let mut sum = 0u32;
    let mut count = 0usize;
    for tag in tags.iter().filter(|t| t.category == category) {
        sum += u32::from(tag.score);
        count += 1;
    }
    // an empty category averages to 0 rather than dividing by zero
    let average = sum as f64 / count.max(1) as f64;
    (average * 10.0).round() / 10.0
}

/// Formats a byte count using base-1024 units, two decimals with trailing
/// zeros trimmed: "0 Bytes", "1.5 KB", "1 MB", "19.53 KB".
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut formatted = format!("{:.2}", value);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }

    format!("{} {}", formatted, UNITS[exponent])
}
