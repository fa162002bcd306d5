//! Scroll progress sources.
//!
//! A [`ProgressSource`] tracks one region of the document and publishes a
//! normalized `[0, 1]` value describing how far the viewport has travelled
//! through it, according to a pair of edge-alignment rules
//! ([`ScrollOffset`]). Sources are fed by the platform event loop; readers
//! take consistent snapshots within a frame.

pub mod geometry;
pub mod offset;
pub mod progress;

pub use geometry::{Region, Viewport};
pub use offset::{Edge, OffsetParseError, OffsetRule, ScrollOffset};
pub use progress::{ProgressReader, ProgressSource, progress};
