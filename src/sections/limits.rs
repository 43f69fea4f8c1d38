//! Constraints and safety-guideline sections.
//!
//! Both prepend a fixed baseline to caller-supplied safety entries. The
//! baseline always comes first and nothing is deduplicated.

use crate::request::Constraints;
use serde_json::{Map, Value};

pub const KEY_SAFETY: &str = "safety";
pub const KEY_FORMAT: &str = "format";
pub const KEY_DOMAIN_SPECIFIC: &str = "domain_specific";

pub const SAFETY_CONSTRAINT_BASELINE: [&str; 2] = [
    "Respect privacy and PII handling requirements",
    "Comply with platform and organizational policies",
];

pub const SAFETY_GUIDELINE_BASELINE: [&str; 2] = [
    "Respect user privacy and data protection",
    "Ensure inclusive language",
];

/// Merge caller constraints, the optional domain-specific block, and safety.
pub fn build_constraints(
    constraints: &Constraints,
    domain_specific: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut merged = constraints.limits.clone();

    if let Some(format) = &constraints.format {
        merged.insert(KEY_FORMAT.to_string(), Value::String(format.clone()));
    }
    if let Some(block) = domain_specific {
        merged.insert(KEY_DOMAIN_SPECIFIC.to_string(), Value::Object(block.clone()));
    }

    let safety = with_baseline(&SAFETY_CONSTRAINT_BASELINE, &constraints.safety)
        .into_iter()
        .map(Value::String)
        .collect();
    merged.insert(KEY_SAFETY.to_string(), Value::Array(safety));

    merged
}

pub fn build_safety_guidelines(custom: &[String]) -> Vec<String> {
    with_baseline(&SAFETY_GUIDELINE_BASELINE, custom)
}

fn with_baseline(baseline: &[&str], custom: &[String]) -> Vec<String> {
    baseline
        .iter()
        .map(|s| s.to_string())
        .chain(custom.iter().cloned())
        .collect()
}
