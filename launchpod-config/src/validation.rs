use thiserror::Error;
use url::Url;

use super::models::SiteConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("activation.{gate}: threshold must be in (0, 1], got {threshold}")]
    InvalidThreshold { gate: &'static str, threshold: f32 },
    #[error("activation.{gate}: root margin {margin} leaves no viewport")]
    InvalidRootMargin { gate: &'static str, margin: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error(
        "layout.scale_step {step} shrinks {cards} stacked cards to nothing (needs step * cards < 1)"
    )]
    ScaleOverflow { step: f32, cards: usize },
    #[error("invalid {field} URL {value:?}: {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reject settings the engine cannot honour; collect soft problems as
/// warnings. `showcase_cards` is the number of stacked cards in the catalog.
pub fn validate(
    config: &SiteConfig,
    showcase_cards: usize,
) -> Result<ConfigWarnings, ConfigError> {
    let mut warnings = ConfigWarnings::default();

    for (gate, params) in config.activation.gates() {
        if !(params.threshold > 0.0 && params.threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold {
                gate,
                threshold: params.threshold,
            });
        }
        if !params.is_valid() {
            return Err(ConfigError::InvalidRootMargin {
                gate,
                margin: params.root_margin,
            });
        }
    }

    let layout = &config.layout;
    for (field, value) in [
        ("layout.narrow_breakpoint_px", layout.narrow_breakpoint_px),
        ("layout.range_step", layout.range_step),
        ("layout.scale_step", layout.scale_step),
        ("layout.zoom_from", layout.zoom_from),
    ] {
        positive(field, f64::from(value))?;
    }
    if layout.stack_step_px < 0.0 {
        return Err(ConfigError::NonPositive {
            field: "layout.stack_step_px",
            value: f64::from(layout.stack_step_px),
        });
    }
    if layout.scale_step * showcase_cards as f32 >= 1.0 {
        return Err(ConfigError::ScaleOverflow {
            step: layout.scale_step,
            cards: showcase_cards,
        });
    }
    if layout.zoom_from < 1.0 {
        warnings.push("layout.zoom_from below 1.0 makes showcase media grow while entering");
    }

    for (name, params) in [
        ("carousel.events.interval_ms", &config.carousel.events),
        ("carousel.testimonials.interval_ms", &config.carousel.testimonials),
    ] {
        if params.enabled {
            positive(name, params.interval_ms as f64)?;
        }
    }

    positive("relay.timeout_secs", config.relay.timeout_secs as f64)?;
    positive(
        "navigation.smooth_scroll_ms",
        config.navigation.smooth_scroll_ms as f64,
    )?;

    parse_url("relay.newsletter_url", &config.relay.newsletter_url)?;
    parse_url("relay.email.endpoint", &config.relay.email.endpoint)?;

    if config.relay.email.template().is_none() {
        warnings.push_with_hint(
            "email relay public key not configured; booking requests are disabled",
            "Set LAUNCHPOD_EMAIL_PUBLIC_KEY or relay.email.public_key",
        );
    }

    Ok(warnings)
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|err| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(url)
}
