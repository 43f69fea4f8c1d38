//! Tools-integration section.

use crate::capability::{
    CapabilityRegistry, BYTEROVER_STORE_KNOWLEDGE, FIRECRAWL_SEARCH, SEQUENTIAL_THINKING,
};
use crate::document::ToolsIntegration;
use crate::request::Domain;

/// List every available capability with domain hints.
///
/// Returns `None` when the registry is empty so the section is omitted rather
/// than emitted empty. The listed tools are never filtered by the request.
pub fn build(domain: &Domain, registry: &CapabilityRegistry) -> Option<ToolsIntegration> {
    if registry.is_empty() {
        return None;
    }
    Some(ToolsIntegration {
        available_mcp_tools: registry.available().to_vec(),
        usage_hints: usage_hints(domain, registry),
    })
}

/// Hints for a domain, each emitted only when its capability is available.
pub fn usage_hints(domain: &Domain, registry: &CapabilityRegistry) -> Vec<String> {
    hint_rules(domain)
        .iter()
        .filter(|(capability, _)| registry.is_available(capability))
        .map(|(_, hint)| hint.to_string())
        .collect()
}

fn hint_rules(domain: &Domain) -> &'static [(&'static str, &'static str)] {
    match domain {
        Domain::CreativeWriting => &[(
            SEQUENTIAL_THINKING,
            "Use sequentialthinking for complex plot development",
        )],
        Domain::TechnicalDocumentation => &[(
            FIRECRAWL_SEARCH,
            "Use firecrawl_search to gather current documentation",
        )],
        Domain::SoftwareDevelopment => &[(
            BYTEROVER_STORE_KNOWLEDGE,
            "Store implementation patterns with byterover-store-knowledge",
        )],
        _ => &[],
    }
}
