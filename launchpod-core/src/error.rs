use thiserror::Error;

/// Navigation misuse on an [`IndexCarousel`](crate::carousel::IndexCarousel).
///
/// Only reachable through a direct `jump_to`; the next/prev controls can
/// never produce it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("index {index} out of range for carousel of {len} items")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("carousel requires at least one item")]
    Empty,
}

/// A draft failed local checks; nothing was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid email address in field {0}")]
    InvalidEmail(String),

    #[error("invalid phone number in field {0}")]
    InvalidPhone(String),
}

/// The relay service could not be reached or refused the submission.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("relay responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("relay is not configured: {0}")]
    NotConfigured(String),
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("a submission is already in flight")]
    Busy,
}

impl FormError {
    /// Message suitable for a transient toast.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Validation(ValidationError::MissingField(_)) => {
                "Please fill in all required fields".to_string()
            }
            FormError::Validation(ValidationError::InvalidEmail(_)) => {
                "Please enter a valid email address".to_string()
            }
            FormError::Validation(ValidationError::InvalidPhone(_)) => {
                "Please enter a valid phone number".to_string()
            }
            FormError::Transport(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            FormError::Busy => "Your request is still being sent".to_string(),
        }
    }
}

pub type FormResult<T> = std::result::Result<T, FormError>;
