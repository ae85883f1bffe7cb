pub mod models;

pub use models::{
    CategoryScores, MetaFields, PageMetrics, SeoReport, SeoTag, TagCategory, TagSeverity,
    TagStatus,
};
