//! Metadata section.

use crate::config::{GeneratorConfig, DEFAULT_MODEL, DEFAULT_RUNTIME};
use crate::document::Metadata;
use crate::request::{Domain, UserProfile};
use chrono::{SecondsFormat, Utc};

/// Model and runtime identifiers recorded in every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub model: String,
    pub runtime: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }
}

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            model: config.model.clone(),
            runtime: config.runtime.clone(),
        }
    }
}

pub fn build(settings: &GeneratorSettings, domain: &Domain, profile: &UserProfile) -> Metadata {
    Metadata {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        model: settings.model.clone(),
        runtime: settings.runtime.clone(),
        domain: domain.to_string(),
        user_expertise: profile.expertise.clone(),
    }
}
