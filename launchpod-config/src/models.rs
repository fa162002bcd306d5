use anyhow::{Context, anyhow};
use launchpod_core::activation::{GateParams, Retrigger};
use launchpod_core::animation::Easing;
use launchpod_core::carousel::AutoplayParams;
use launchpod_core::forms::EmailTemplate;
use launchpod_core::showcase::StackingParams;
use launchpod_model::Catalog;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_NEWSLETTER_URL: &str = "https://sheetdb.io/api/v1/b1ppx2isls7lv";
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Source that produced the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Path given on the command line.
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "built-in defaults"),
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (LAUNCHPOD_CONFIG_PATH)", path.display())
            }
            ConfigSource::EnvInline => write!(f, "LAUNCHPOD_CONFIG_JSON"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything tunable about the site. Every section falls back to its
/// defaults when omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where form submissions are sent.
    pub relay: RelayConfig,
    /// Stacked showcase geometry. Viewports narrower than
    /// `narrow_breakpoint_px` get the flat list instead.
    pub layout: StackingParams,
    pub carousel: CarouselConfig,
    /// Visibility thresholds for the viewport-driven effects.
    pub activation: ActivationConfig,
    pub navigation: NavigationConfig,
    pub content: ContentConfig,
}

/// Outbound form relays.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Spreadsheet API receiving newsletter sign-ups.
    pub newsletter_url: String,
    /// Request timeout for both relays.
    pub timeout_secs: u64,
    pub email: EmailRelayConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            newsletter_url: DEFAULT_NEWSLETTER_URL.to_string(),
            timeout_secs: 30,
            email: EmailRelayConfig::default(),
        }
    }
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Hosted email-template service used for booking requests.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailRelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Usually supplied through `LAUNCHPOD_EMAIL_PUBLIC_KEY` rather than the
    /// file. Booking submissions are disabled while unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl Default for EmailRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAIL_ENDPOINT.to_string(),
            service_id: "service_launchpod".to_string(),
            template_id: "template_booking".to_string(),
            public_key: None,
        }
    }
}

impl EmailRelayConfig {
    /// Template identifiers, if a public key is configured.
    pub fn template(&self) -> Option<EmailTemplate> {
        let public_key = self.public_key.as_deref()?.trim();
        if public_key.is_empty() {
            return None;
        }
        Some(EmailTemplate {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: public_key.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Upcoming-events card carousel.
    pub events: AutoplayParams,
    /// Testimonial carousel; manual only by default.
    pub testimonials: AutoplayParams,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            events: AutoplayParams::default(),
            testimonials: AutoplayParams {
                enabled: false,
                ..AutoplayParams::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// Word-by-word reveal of the hero tagline.
    pub hero_line: GateParams,
    /// Testimonial section entrance.
    pub testimonials: GateParams,
    /// Past-events gallery fade-in.
    pub gallery: GateParams,
    /// Showcase background video start.
    pub showcase_video: GateParams,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            hero_line: GateParams::new(0.4, -0.1, Retrigger::Always),
            testimonials: GateParams::new(0.5, 0.0, Retrigger::Always),
            gallery: GateParams::new(0.3, 0.0, Retrigger::Once),
            showcase_video: GateParams::new(0.1, 0.0, Retrigger::Once),
        }
    }
}

impl ActivationConfig {
    pub fn gates(&self) -> [(&'static str, GateParams); 4] {
        [
            ("hero_line", self.hero_line),
            ("testimonials", self.testimonials),
            ("gallery", self.gallery),
            ("showcase_video", self.showcase_video),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Height of the sticky header; anchor scrolls stop this far above the
    /// section.
    pub header_offset_px: f32,
    pub smooth_scroll_ms: u64,
    pub easing: Easing,
    /// Duration of the keyword pill slide.
    pub keyword_pulse_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 80.0,
            smooth_scroll_ms: 600,
            easing: Easing::EaseInOut,
            keyword_pulse_ms: 800,
        }
    }
}

impl NavigationConfig {
    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }

    pub fn keyword_pulse(&self) -> Duration {
        Duration::from_millis(self.keyword_pulse_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Catalog file (TOML or JSON) replacing the built-in content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl ContentConfig {
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::launchpod_default());
        };
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read catalog from {}", path.display())
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .with_context(|| format!("invalid catalog {}", path.display())),
            _ => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid catalog {}: {}", path.display(), err)
            }),
        }
    }
}

impl SiteConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$LAUNCHPOD_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$LAUNCHPOD_CONFIG_JSON` (inline JSON),
    /// 3) the first default file that exists,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var("LAUNCHPOD_CONFIG_PATH")
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var("LAUNCHPOD_CONFIG_JSON")
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .context("failed to parse LAUNCHPOD_CONFIG_JSON")?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read site config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid site config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid site config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, JSON as a fallback.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse site config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid site config json: {err}"))
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to render site config")
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "launchpod.toml",
            "launchpod.json",
            "config/launchpod.toml",
            "config/launchpod.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
