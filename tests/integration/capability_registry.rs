//! Capability registry behavior as seen by generated documents

use metaprompt::capability::{
    CapabilityRegistry, BYTEROVER_STORE_KNOWLEDGE, DEFAULT_CAPABILITIES, FIRECRAWL_SEARCH,
};
use metaprompt::sections::GeneratorSettings;
use metaprompt::{Pipeline, RawRequest};

#[test]
fn test_default_registry_lists_five_capabilities_in_order() {
    let registry = CapabilityRegistry::with_defaults();
    assert_eq!(registry.available(), DEFAULT_CAPABILITIES);
}

#[test]
fn test_registry_is_queried_for_each_hint() {
    let registry = CapabilityRegistry::new([FIRECRAWL_SEARCH]);
    let pipeline = Pipeline::new(registry, GeneratorSettings::default());

    let docs = pipeline
        .generate(&RawRequest::new("technical_documentation", "write a tutorial", "novice"))
        .unwrap();
    let tools = docs.tools_integration.unwrap();
    assert_eq!(tools.available_mcp_tools, vec![FIRECRAWL_SEARCH]);
    assert_eq!(
        tools.usage_hints,
        vec!["Use firecrawl_search to gather current documentation"]
    );

    let dev = pipeline
        .generate(&RawRequest::new("software_development", "add caching", "expert"))
        .unwrap();
    assert!(dev.tools_integration.unwrap().usage_hints.is_empty());
}

#[test]
fn test_software_hint_needs_knowledge_store() {
    let pipeline = Pipeline::new(
        CapabilityRegistry::new([BYTEROVER_STORE_KNOWLEDGE]),
        GeneratorSettings::default(),
    );
    let document = pipeline
        .generate(&RawRequest::new("software_development", "add caching", "expert"))
        .unwrap();
    assert_eq!(
        document.tools_integration.unwrap().usage_hints,
        vec!["Store implementation patterns with byterover-store-knowledge"]
    );
}

#[test]
fn test_agent_context_counts_request_tools_not_registry() {
    let mut raw = RawRequest::new("ai_agent_instructions", "route tickets", "expert");
    raw.environment = Some(metaprompt::request::Environment {
        tools: vec!["one".into(), "two".into(), "three".into()],
        ..Default::default()
    });
    let document = Pipeline::new(CapabilityRegistry::empty(), GeneratorSettings::default())
        .generate(&raw)
        .unwrap();
    assert!(document.context.contains("Available tools: 3 MCP servers"));
    assert!(document.tools_integration.is_none());
}
