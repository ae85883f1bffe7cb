//! Orchestration of a single analysis request: fetch, extract, score.

use reqwest::Client;
use scraper::Html;
use std::time::Instant;
use url::Url;

use crate::analyzer::analyze_page;
use crate::domain::{MetaFields, PageMetrics, SeoReport};
use crate::error::{AppError, Result};
use crate::extractor::MetaExtractor;

use super::http::create_client;

/// Fetches a page and runs the scoring engine over it.
///
/// Holds only the outbound HTTP client; every call owns its own data, so a
/// single instance can serve concurrent requests.
pub struct AnalysisService {
    client: Client,
}

impl AnalysisService {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: create_client()?,
        })
    }

    pub async fn analyze(&self, url: &Url) -> Result<SeoReport> {
        let start = Instant::now();
        tracing::info!(url = %url, "starting analysis");

        let fetch_start = Instant::now();
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let html = response.text().await?;
        let response_time_ms = fetch_start.elapsed().as_millis() as u64;

        let metrics = PageMetrics {
            response_time_ms,
            byte_length: html.len() as u64,
        };
        tracing::debug!(
            bytes = metrics.byte_length,
            response_ms = metrics.response_time_ms,
            "fetched page"
        );

        let fields = extract_fields(&html);
        let analysis_time_ms = start.elapsed().as_millis() as u64;
        let report = analyze_page(url.as_str(), fields, metrics, analysis_time_ms);

        tracing::info!(
            url = %url,
            score = report.score,
            found = report.found_tags,
            warnings = report.warning_tags,
            missing = report.missing_tags,
            "analysis complete"
        );
        Ok(report)
    }
}

// Parsed documents are !Send, so parsing stays out of the async path.
fn extract_fields(html: &str) -> MetaFields {
    let document = Html::parse_document(html);
    MetaExtractor::extract(&document)
}
