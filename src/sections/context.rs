//! Context section: one paragraph framing the task for the downstream model.

use crate::config::DEFAULT_RUNTIME;
use crate::request::{Domain, Environment, UserProfile};

pub fn build(domain: &Domain, profile: &UserProfile, environment: &Environment) -> String {
    match domain {
        Domain::CreativeWriting => format!(
            "You are assisting with creative writing tasks. The user has {} level expertise.",
            profile.expertise
        ),
        Domain::TechnicalDocumentation => format!(
            "You are helping create technical documentation. Target audience expertise: {}.",
            profile.expertise
        ),
        Domain::CustomerService => format!(
            "You are designing customer service interactions. User context: {}.",
            profile
                .context
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or("individual")
        ),
        Domain::AiAgentInstructions => format!(
            "You are creating AI agent instructions. Available tools: {} MCP servers.",
            environment.tools.len()
        ),
        Domain::SoftwareDevelopment => format!(
            "You are assisting with software development using {}.",
            environment
                .runtime
                .as_deref()
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_RUNTIME)
        ),
        Domain::Custom | Domain::Other(_) => fallback(domain),
    }
}

/// Generic template used for domains without their own entry.
pub fn fallback(domain: &Domain) -> String {
    format!("You are assisting with {domain} tasks.")
}
