use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A scroll range whose start is not strictly below its end.
    InvertedRange { start: f32, end: f32 },
    /// A scroll range starting below zero or carrying a NaN bound.
    NegativeRange { start: f32, end: f32 },
    /// A section label that does not name any in-page anchor.
    UnknownAnchor(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvertedRange { start, end } => {
                write!(f, "invalid range: start {start} must be below end {end}")
            }
            ModelError::NegativeRange { start, end } => {
                write!(f, "invalid range: [{start}, {end}] must start at or above 0")
            }
            ModelError::UnknownAnchor(label) => {
                write!(f, "unknown section anchor: {label}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
