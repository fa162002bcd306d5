//! Configuration library for the Launchpod site.
//!
//! Loads [`SiteConfig`] from a file, inline JSON or built-in defaults, applies
//! secret overrides from the environment (and `.env`), and validates the
//! result before the site starts.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    ActivationConfig, CarouselConfig, ConfigSource, ContentConfig,
    EmailRelayConfig, NavigationConfig, RelayConfig, SiteConfig,
};
pub use validation::{ConfigError, ConfigWarning, ConfigWarnings, validate};
