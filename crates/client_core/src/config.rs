use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::DEFAULT_RELAY_ENDPOINT;

use crate::{error::ContactError, visibility::DEFAULT_VISIBILITY_THRESHOLD};

const SETTINGS_FILE_NAME: &str = "portfolio.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub relay_endpoint: String,
    pub visibility_threshold: f32,
    pub relay: RelaySettings,
}

/// Credential fallbacks from the settings file; the environment wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelaySettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.into(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            relay: RelaySettings::default(),
        }
    }
}

impl Settings {
    /// Built-in defaults with the `APP__*` overrides applied; used when no
    /// settings file can be read.
    pub fn from_env() -> Self {
        Self::defaults_with(|name| std::env::var(name).ok())
    }

    fn defaults_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        apply_env_overrides(&mut settings, lookup);
        settings
    }

    /// The configured threshold when it lies in `(0, 1]`, else the default.
    pub fn effective_threshold(&self) -> f32 {
        let threshold = self.visibility_threshold;
        if threshold > 0.0 && threshold <= 1.0 {
            threshold
        } else {
            tracing::warn!(
                threshold,
                fallback = DEFAULT_VISIBILITY_THRESHOLD,
                "visibility threshold out of range; using default"
            );
            DEFAULT_VISIBILITY_THRESHOLD
        }
    }
}

/// Loads settings from `explicit`, else `portfolio.toml` in the working
/// directory, else the user config directory, then applies `APP__*` overrides.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit {
        Some(path) => read_settings_file(path)?,
        None => match default_settings_path() {
            Some(path) => read_settings_file(&path)?,
            None => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn default_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("portfolio").join(SETTINGS_FILE_NAME);
    user.is_file().then_some(user)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let settings = toml::from_str::<Settings>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings file");
    Ok(settings)
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__RELAY_ENDPOINT") {
        settings.relay_endpoint = v;
    }

    if let Some(v) = lookup("APP__VISIBILITY_THRESHOLD") {
        match v.parse::<f32>() {
            Ok(parsed) => settings.visibility_threshold = parsed,
            Err(err) => tracing::warn!(value = %v, "ignoring APP__VISIBILITY_THRESHOLD: {err}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    ServiceId,
    TemplateId,
    PublicKey,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 3] = [
        CredentialKey::ServiceId,
        CredentialKey::TemplateId,
        CredentialKey::PublicKey,
    ];

    pub fn env_var(self) -> &'static str {
        match self {
            CredentialKey::ServiceId => "EMAILJS_SERVICE_ID",
            CredentialKey::TemplateId => "EMAILJS_TEMPLATE_ID",
            CredentialKey::PublicKey => "EMAILJS_PUBLIC_KEY",
        }
    }
}

/// Where relay credentials come from. Looked up on every submit.
pub trait CredentialSource: Send + Sync {
    fn lookup(&self, key: CredentialKey) -> Option<String>;
}

impl CredentialSource for Settings {
    fn lookup(&self, key: CredentialKey) -> Option<String> {
        if let Some(value) = non_empty(std::env::var(key.env_var()).ok()) {
            return Some(value);
        }

        let fallback = match key {
            CredentialKey::ServiceId => &self.relay.service_id,
            CredentialKey::TemplateId => &self.relay.template_id,
            CredentialKey::PublicKey => &self.relay.public_key,
        };
        non_empty(fallback.clone())
    }
}

impl CredentialSource for HashMap<CredentialKey, String> {
    fn lookup(&self, key: CredentialKey) -> Option<String> {
        non_empty(self.get(&key).cloned())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayCredentials {
    /// Fails with every absent variable named, never a partial set.
    pub fn resolve(source: &dyn CredentialSource) -> Result<Self, ContactError> {
        let service_id = source.lookup(CredentialKey::ServiceId);
        let template_id = source.lookup(CredentialKey::TemplateId);
        let public_key = source.lookup(CredentialKey::PublicKey);

        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Self {
                service_id,
                template_id,
                public_key,
            }),
            (service_id, template_id, public_key) => {
                let present = [service_id.is_some(), template_id.is_some(), public_key.is_some()];
                let missing = CredentialKey::ALL
                    .into_iter()
                    .zip(present)
                    .filter(|(_, present)| !present)
                    .map(|(key, _)| key.env_var())
                    .collect();
                Err(ContactError::ConfigurationMissing { missing })
            }
        }
    }
}
