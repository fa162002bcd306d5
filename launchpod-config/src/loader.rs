use anyhow::Context;
use launchpod_model::Catalog;
use std::{env, path::PathBuf};

use super::{
    models::{ConfigSource, SiteConfig},
    validation::{self, ConfigWarnings},
};

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Fully resolved configuration plus how it was obtained.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            ),
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })
            }
        }
        .context("failed to load .env file")?;

        let (mut config, source) = match &self.options.config_path {
            Some(path) => (
                SiteConfig::load_from_file(path)?,
                ConfigSource::Explicit(path.clone()),
            ),
            None => SiteConfig::load_from_env()?,
        };

        apply_env_overrides(&mut config);

        let catalog = config.content.load_catalog()?;
        let warnings = validation::validate(&config, catalog.showcase.len())
            .with_context(|| format!("invalid site config from {source}"))?;

        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => tracing::warn!(hint = %hint, "{}", warning.message),
                None => tracing::warn!("{}", warning.message),
            }
        }
        tracing::info!(%source, env_file_loaded, "site config loaded");

        Ok(ConfigLoad {
            config,
            catalog,
            source,
            env_file_loaded,
            warnings,
        })
    }
}

/// Secrets and deployment-specific values override the file.
fn apply_env_overrides(config: &mut SiteConfig) {
    let email = &mut config.relay.email;
    if let Some(value) = env_value("LAUNCHPOD_NEWSLETTER_URL") {
        config.relay.newsletter_url = value;
    }
    if let Some(value) = env_value("LAUNCHPOD_EMAIL_ENDPOINT") {
        email.endpoint = value;
    }
    if let Some(value) = env_value("LAUNCHPOD_EMAIL_SERVICE_ID") {
        email.service_id = value;
    }
    if let Some(value) = env_value("LAUNCHPOD_EMAIL_TEMPLATE_ID") {
        email.template_id = value;
    }
    if let Some(value) = env_value("LAUNCHPOD_EMAIL_PUBLIC_KEY") {
        email.public_key = Some(value);
    }
}

fn env_value(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    tracing::debug!(key, "config value overridden from environment");
    Some(value.to_string())
}
