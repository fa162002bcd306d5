//! # Launchpod Core
//!
//! Scroll-linked showcase engine behind the Launchpod event-venue site.
//!
//! ## Overview
//!
//! The page is one long scroll. Everything that moves on it is derived from a
//! handful of primitives:
//!
//! - **Progress sources**: normalized `[0, 1]` scroll progress over a region,
//!   published to any number of readers
//! - **Index carousels**: wraparound navigation over a fixed list, with an
//!   optional autoplay timer
//! - **Range-mapped transforms**: clamped interpolation from progress to a
//!   visual scalar (card scale, media zoom)
//! - **Activation gates**: booleans driven by how much of an element is in
//!   the viewport
//! - **Stacked layout**: the sticky, cascading event cards
//!
//! plus the form plumbing (drafts, validation, HTTP relays) and small
//! UI-local state holders.
//!
//! ## Architecture
//!
//! - [`scroll`]: viewport geometry, offset rules and [`scroll::ProgressSource`]
//! - [`carousel`]: [`carousel::IndexCarousel`] and [`carousel::Autoplay`]
//! - [`transform`]: `map_range`, `scale` and media zoom
//! - [`activation`]: [`activation::ViewportObserver`] and its gates
//! - [`showcase`]: [`showcase::StackedLayout`]
//! - [`forms`]: [`forms::FormController`] and the relays
//! - [`observable`]: change-notifying values with scoped subscriptions
//! - [`animation`]: easing, tweens and timed flags
//! - [`widgets`]: accordion and modal state
//!
//! Everything except form submission is synchronous and single-threaded;
//! the embedding event loop feeds in viewport and time values.
//!
//! ## Examples
//!
//! ```
//! use launchpod_core::carousel::IndexCarousel;
//! use launchpod_core::transform::{scale, ScrollRange};
//!
//! let mut carousel = IndexCarousel::new(5).unwrap();
//! carousel.prev();
//! assert_eq!(carousel.current(), 4);
//!
//! let range = ScrollRange::new(0.25, 1.0).unwrap();
//! assert_eq!(scale(0.0, range, 0.85), 1.0);
//! ```

#![allow(missing_docs)]

/// Viewport activation gates
pub mod activation;

/// Easing curves, tweens and timed flags
pub mod animation;

/// Index carousels with autoplay
pub mod carousel;

/// Error types
pub mod error;

/// Form drafts, validation and relays
pub mod forms;

/// Observable values and subscriptions
pub mod observable;

/// Scroll geometry and progress
pub mod scroll;

/// Stacked card showcase
pub mod showcase;

/// Range-mapped transforms
pub mod transform;

/// UI-local state holders
pub mod widgets;

pub use error::{CarouselError, FormError, FormResult, TransportError, ValidationError};
pub use launchpod_model as model;
