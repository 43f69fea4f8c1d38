//! Instructions section: numbered directives.
//!
//! Order is base directives, then domain directives, then the tone directive.
//! Numbers are assigned after concatenation so they stay contiguous whichever
//! parts are present.

use crate::request::{Domain, Preferences};

const BASE: [&str; 3] = [
    "Analyze the provided context and requirements carefully",
    "Structure your response according to the specified format",
    "Include all required elements while respecting constraints",
];

pub fn build(domain: &Domain, preferences: &Preferences) -> Vec<String> {
    let tone = preferences
        .tone()
        .map(|tone| format!("Maintain {tone} tone throughout"));

    BASE.iter()
        .chain(domain_directives(domain))
        .map(|d| d.to_string())
        .chain(tone)
        .enumerate()
        .map(|(i, directive)| format!("{}. {directive}", i + 1))
        .collect()
}

/// Additional directives for a domain. Empty for domains without rules.
pub fn domain_directives(domain: &Domain) -> &'static [&'static str] {
    match domain {
        Domain::CreativeWriting => &[
            "Consider genre, voice, and pacing requirements",
            "Ensure character and plot development guidelines are clear",
            "Include content safety considerations for creative expression",
        ],
        Domain::TechnicalDocumentation => &[
            "Match technical depth to audience expertise level",
            "Include code examples and API references where appropriate",
            "Ensure accuracy and provide citation guidelines",
        ],
        Domain::CustomerService => &[
            "Maintain brand voice and empathy balance",
            "Include escalation protocols and compliance requirements",
            "Address PII handling and privacy concerns",
        ],
        Domain::AiAgentInstructions => &[
            "Define clear tool schemas and function signatures",
            "Include comprehensive error handling and safety rails",
            "Specify MCP server integration patterns",
        ],
        Domain::SoftwareDevelopment => &[
            "Specify language, framework, and coding standards",
            "Include testing and security requirements",
            "Ensure reproducible and well-documented outputs",
        ],
        Domain::Custom | Domain::Other(_) => &[],
    }
}
