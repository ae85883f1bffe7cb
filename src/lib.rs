pub mod analyzer;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod server;
pub mod service;
