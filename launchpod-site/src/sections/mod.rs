//! Page sections, one module per area of the page.
//!
//! Each section owns its state; sections with user input expose a message
//! enum that folds into [`Message`](crate::message::Message).

pub mod carousel;
pub mod faq;
pub mod forms;
pub mod hero;
pub mod nav;
pub mod past_events;
pub mod showcase;

pub use carousel::{CarouselMessage, CarouselSection};
pub use faq::{FaqMessage, FaqSection};
pub use forms::{FormMessage, FormSection};
pub use hero::{HERO_LINE, HeroMessage, HeroState, HeroWord, WordFrame};
pub use nav::{NavMessage, NavState};
pub use past_events::PastEventsSection;
pub use showcase::{ShowcaseMessage, ShowcaseSection};
