//! Content data model shared across Launchpod crates.
#![allow(missing_docs)]

pub mod anchor;
pub mod cards;
pub mod catalog;
pub mod error;
pub mod faq;
pub mod gallery;
pub mod range;
pub mod showcase;
pub mod testimonial;

// Intentionally curated re-exports for downstream consumers.
pub use anchor::Anchor;
pub use cards::EventCard;
pub use catalog::Catalog;
pub use error::{ModelError, Result as ModelResult};
pub use faq::FaqEntry;
pub use gallery::GalleryImage;
pub use range::ScrollRange;
pub use showcase::{EventContent, ShowcaseItem};
pub use testimonial::{Stat, Testimonial};
