pub mod analysis;
pub mod http;

pub use analysis::AnalysisService;
