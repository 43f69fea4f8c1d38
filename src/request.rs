//! Prompt request model.
//!
//! [`RawRequest`] is what callers hand in: every field optional, loosely typed.
//! The input validator turns it into a [`Request`], which is what the section
//! builders consume.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Target domain of a prompt request.
///
/// The five named domains carry domain-specific composition rules. `Custom` and
/// any unrecognised name fall through to the generic templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Domain {
    CreativeWriting,
    TechnicalDocumentation,
    CustomerService,
    AiAgentInstructions,
    SoftwareDevelopment,
    Custom,
    Other(String),
}

impl Domain {
    /// Domains offered by the interactive collector, in menu order.
    pub const KNOWN: [Domain; 6] = [
        Domain::CreativeWriting,
        Domain::TechnicalDocumentation,
        Domain::CustomerService,
        Domain::AiAgentInstructions,
        Domain::SoftwareDevelopment,
        Domain::Custom,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "creative_writing" => Domain::CreativeWriting,
            "technical_documentation" => Domain::TechnicalDocumentation,
            "customer_service" => Domain::CustomerService,
            "ai_agent_instructions" => Domain::AiAgentInstructions,
            "software_development" => Domain::SoftwareDevelopment,
            "custom" => Domain::Custom,
            other => Domain::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Domain::CreativeWriting => "creative_writing",
            Domain::TechnicalDocumentation => "technical_documentation",
            Domain::CustomerService => "customer_service",
            Domain::AiAgentInstructions => "ai_agent_instructions",
            Domain::SoftwareDevelopment => "software_development",
            Domain::Custom => "custom",
            Domain::Other(name) => name,
        }
    }

    /// Whether this domain has its own composition rules.
    pub fn is_specialised(&self) -> bool {
        !matches!(self, Domain::Custom | Domain::Other(_))
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Domain::from_name(&name)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.as_str().to_string()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested level of detail for the downstream response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Concise,
    Detailed,
    Comprehensive,
}

impl Verbosity {
    pub const ALL: [Verbosity; 3] = [Verbosity::Concise, Verbosity::Detailed, Verbosity::Comprehensive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Concise => "concise",
            Verbosity::Detailed => "detailed",
            Verbosity::Comprehensive => "comprehensive",
        }
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Detailed
    }
}

/// Read an optional field, treating `null` or a value of the wrong shape as absent.
///
/// A request is only ever rejected by the input validator, so optional fields
/// never fail deserialization.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUserProfile {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub expertise: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Caller-supplied limits.
///
/// `safety` and `format` are interpreted; every other key is carried through
/// to the document's constraints section untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Vec::is_empty")]
    pub safety: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(flatten)]
    pub limits: Map<String, Value>,
}

/// Caller preferences. An unrecognised verbosity reads as unset and gets the
/// default guidance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<Verbosity>,
    #[serde(default, deserialize_with = "lenient")]
    pub examples: bool,
}

impl Preferences {
    /// Tone, treating an empty string as not supplied.
    pub fn tone(&self) -> Option<&str> {
        self.tone.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
}

/// Unvalidated request as delivered by a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<RawUserProfile>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub domain_specific: Option<Map<String, Value>>,

    /// JSON document the request was read from, if any. Schema checks run
    /// against this rather than the typed fields.
    #[serde(skip)]
    pub source: Option<Value>,
}

impl RawRequest {
    /// Minimal request with the three required fields set.
    pub fn new(
        domain: impl Into<String>,
        objective: impl Into<String>,
        expertise: impl Into<String>,
    ) -> Self {
        Self {
            domain: Some(domain.into()),
            objective: Some(objective.into()),
            user_profile: Some(RawUserProfile {
                expertise: Some(expertise.into()),
                context: None,
            }),
            ..Default::default()
        }
    }

    /// Read a request from a parsed JSON document, keeping the document.
    ///
    /// Never fails: a document that is not an object yields an empty request,
    /// which the input validator then rejects field by field.
    pub fn from_json(document: Value) -> Self {
        let mut raw = if document.is_object() {
            RawRequest::deserialize(&document).unwrap_or_default()
        } else {
            RawRequest::default()
        };
        raw.source = Some(document);
        raw
    }
}

/// Request that passed input validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub domain: Domain,
    pub objective: String,
    pub user_profile: UserProfile,
    pub constraints: Constraints,
    pub preferences: Preferences,
    pub environment: Environment,
    pub domain_specific: Option<Map<String, Value>>,
}
