//! Small UI-local state holders.

pub mod accordion;
pub mod modal;

pub use accordion::Accordion;
pub use modal::Modal;
