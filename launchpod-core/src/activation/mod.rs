//! Viewport activation gates
//!
//! A gate turns an element's intersection ratio into a boolean: hero line
//! reveals, testimonial entrance, gallery fade-in and background video start
//! all hang off one.

pub mod gate;
pub mod observer;

pub use gate::{ActivationGate, GateEvent, GateParams, Retrigger};
pub use observer::{Observation, ObservationId, ViewportObserver, intersection_ratio};
