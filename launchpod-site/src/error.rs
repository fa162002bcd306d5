use launchpod_core::{CarouselError, TransportError};
use launchpod_model::ModelError;
use thiserror::Error;

/// Failures while assembling the page from config and catalog.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{section}: {source}")]
    Carousel {
        section: &'static str,
        #[source]
        source: CarouselError,
    },

    #[error("showcase: {0}")]
    Showcase(#[from] ModelError),

    #[error("relay setup failed: {0}")]
    Relay(#[from] TransportError),
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;
