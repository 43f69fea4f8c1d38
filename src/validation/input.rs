//! Input validator: required fields, then optional schema rules.

use crate::error::ValidationError;
use crate::request::{Domain, RawRequest, Request, UserProfile};
use crate::validation::schema::RequestSchema;
use tracing::debug;

pub const REQUIRED_FIELDS: [&str; 3] = ["domain", "objective", "user_profile"];

#[derive(Debug, Default)]
pub struct InputValidator {
    schema: Option<RequestSchema>,
}

impl InputValidator {
    /// Validator with built-in rules only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that also applies a request schema.
    pub fn with_schema(schema: Option<RequestSchema>) -> Self {
        Self { schema }
    }

    pub fn has_schema(&self) -> bool {
        self.schema.is_some()
    }

    /// Check a raw request and convert it into a [`Request`].
    pub fn validate(&self, raw: &RawRequest) -> Result<Request, ValidationError> {
        let request = validate_required(raw)?;
        if let Some(schema) = &self.schema {
            schema.check(raw)?;
        }
        debug!(domain = %request.domain, "Request passed input validation");
        Ok(request)
    }
}

/// Apply the built-in required-field rules.
///
/// Every missing top-level field is reported in one error. Blank strings count
/// as missing.
pub fn validate_required(raw: &RawRequest) -> Result<Request, ValidationError> {
    let domain = non_blank(raw.domain.as_deref());
    let objective = non_blank(raw.objective.as_deref());

    let present = [
        domain.is_some(),
        objective.is_some(),
        raw.user_profile.is_some(),
    ];
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .zip(present)
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| field.to_string())
        .collect();

    let (Some(domain), Some(objective), Some(profile)) = (domain, objective, &raw.user_profile)
    else {
        return Err(ValidationError::MissingFields(missing));
    };

    let expertise =
        non_blank(profile.expertise.as_deref()).ok_or(ValidationError::MissingExpertise)?;

    Ok(Request {
        domain: Domain::from_name(domain),
        objective: objective.to_string(),
        user_profile: UserProfile {
            expertise: expertise.to_string(),
            context: profile.context.clone(),
        },
        constraints: raw.constraints.clone().unwrap_or_default(),
        preferences: raw.preferences.clone().unwrap_or_default(),
        environment: raw.environment.clone().unwrap_or_default(),
        domain_specific: raw.domain_specific.clone(),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
