//! Tag-extraction-and-scoring engine.
//!
//! [`checks`] maps each extracted field (plus the two measured metrics) to a
//! scored tag; [`report`] folds the tag sequence into the final report. The
//! whole pipeline is synchronous and side-effect-free: the transport layer
//! hands in already-extracted values and already-measured numbers.

pub mod checks;
pub mod report;

pub use checks::run_checks;
pub use report::build_report;

use crate::domain::{MetaFields, PageMetrics, SeoReport};

/// The engine's single entry point: extracted fields plus measured metrics
/// in, complete report out.
pub fn analyze_page(
    url: &str,
    fields: MetaFields,
    metrics: PageMetrics,
    analysis_time_ms: u64,
) -> SeoReport {
    let tags = run_checks(&fields, &metrics);
    build_report(url, fields, tags, metrics, analysis_time_ms)
}
