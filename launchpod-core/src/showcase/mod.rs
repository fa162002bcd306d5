//! Stacked showcase of upcoming events
//!
//! Cards stick on top of each other as the section scrolls; earlier cards
//! shrink behind later ones while each card's media zooms out as it enters.

pub mod layout;
pub mod params;

pub use layout::{CardFrame, LayoutMode, StackedLayout};
pub use params::StackingParams;
