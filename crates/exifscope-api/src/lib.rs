//! exifscope API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup
//! for the image metadata analysis service.

// Module declarations
mod handlers;
mod middleware;
pub mod setup;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
