//! Application state shared by all handlers.

use exifscope_core::Config;
use exifscope_processing::{ContainerDecoder, ImageDecoder};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Decoder used by the analysis handler; swappable in tests.
    pub decoder: Arc<dyn ImageDecoder>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_decoder(config, Arc::new(ContainerDecoder))
    }

    pub fn with_decoder(config: Config, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self { config, decoder }
    }
}
