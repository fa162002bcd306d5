//! Index carousels
//!
//! Wraparound navigation over a fixed list (event cards, testimonials) plus
//! an optional timed auto-advance.

pub mod autoplay;
pub mod state;

pub use autoplay::{Autoplay, AutoplayParams};
pub use state::{Direction, IndexCarousel, IndexChange};
