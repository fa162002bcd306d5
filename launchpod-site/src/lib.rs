//! # Launchpod Site
//!
//! Composes the Launchpod single-page site from the core engine: section
//! state, the message/update loop, the platform event loop and the relay
//! edge used by the `launchpod` binary.
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use launchpod_config::SiteConfig;
//! use launchpod_core::scroll::Viewport;
//! use launchpod_model::Catalog;
//! use launchpod_site::runtime::{EventLoop, PlatformEvent};
//!
//! let mut events = EventLoop::from_config(
//!     &SiteConfig::default(),
//!     Catalog::launchpod_default(),
//!     Viewport::new(0.0, 1280.0, 800.0),
//!     Instant::now(),
//! )?;
//! let effects = events.dispatch(PlatformEvent::Scroll(1200.0), Instant::now());
//! # let _ = effects;
//! # Ok::<(), launchpod_site::SiteError>(())
//! ```

pub mod effect;
pub mod error;
pub mod message;
pub mod notifications;
pub mod page;
pub mod preview;
pub mod runtime;
pub mod sections;
pub mod state;
pub mod update;

pub use effect::Effect;
pub use error::{SiteError, SiteResult};
pub use message::Message;
pub use runtime::{EventLoop, PlatformEvent, Relays};
pub use state::SiteState;
