//! exifscope Core Library
//!
//! This crate provides the domain models, error types and configuration
//! shared by the processing crate, the HTTP API and the CLI.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    AnalysisRecord, DetectedSoftware, ExifMap, RawExifValue, SideInfo, SideInfoValue,
    SoftwareSource,
};
