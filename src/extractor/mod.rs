pub mod meta_extractor;

pub use meta_extractor::MetaExtractor;
