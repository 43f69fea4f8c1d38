//! End-to-end generation scenarios through the pipeline

use super::test_utils::{bare_pipeline, default_pipeline};
use metaprompt::refine::CONTEXT_SUPPLEMENT;
use metaprompt::request::{
    Constraints, Domain, Environment, Preferences, UserProfile, Verbosity,
};
use metaprompt::sections::limits::SAFETY_GUIDELINE_BASELINE;
use metaprompt::sections::SectionBuilders;
use metaprompt::validation::{self, OutputIssue};
use metaprompt::RawRequest;
use serde_json::{json, Map};
use std::sync::Arc;

#[test]
fn test_software_development_request() {
    let document = default_pipeline()
        .generate(&RawRequest::new("software_development", "ship a CLI", "expert"))
        .unwrap();

    assert_eq!(document.title, "Generated Prompt for SOFTWARE DEVELOPMENT");
    assert!(document.instructions.len() >= 6);
    assert!(document.context.contains("software development"));
    assert_eq!(document.safety_guidelines, SAFETY_GUIDELINE_BASELINE);
    assert_eq!(document.objective, "ship a CLI");
    assert_eq!(document.metadata.domain, "software_development");
    assert_eq!(document.metadata.user_expertise, "expert");
}

#[test]
fn test_unknown_domain_uses_generic_templates() {
    let document = default_pipeline()
        .generate(&RawRequest::new("unknown_domain", "plan a garden", "novice"))
        .unwrap();

    assert_eq!(document.context, "You are assisting with unknown_domain tasks.");
    assert_eq!(document.instructions.len(), 3);
    assert_eq!(document.title, "Generated Prompt for UNKNOWN DOMAIN");
}

struct ShortContext;

impl SectionBuilders for ShortContext {
    fn context(&self, _: &Domain, _: &UserProfile, _: &Environment) -> String {
        "Brief".to_string()
    }
}

#[test]
fn test_short_context_is_extended_not_replaced() {
    let pipeline = default_pipeline().with_sections(Arc::new(ShortContext));
    let raw = RawRequest::new("creative_writing", "a haiku", "novice");

    let (draft, report) = pipeline.draft(&raw).unwrap();
    assert_eq!(draft.context.len(), 5);
    assert_eq!(report.issues, vec![OutputIssue::ContextTooShort]);

    let document = pipeline.generate(&raw).unwrap();
    assert_eq!(document.context, format!("Brief{}", CONTEXT_SUPPLEMENT));
    assert!(document.context.len() > 10);
    assert!(validation::check(&document).is_valid);
}

#[test]
fn test_caller_safety_follows_baseline_without_dedup() {
    let mut raw = RawRequest::new("customer_service", "answer billing questions", "beginner");
    raw.constraints = Some(Constraints {
        safety: vec![
            "no medical advice".into(),
            "Respect privacy and PII handling requirements".into(),
        ],
        ..Default::default()
    });

    let document = default_pipeline().generate(&raw).unwrap();
    assert_eq!(
        document.constraints["safety"],
        json!([
            "Respect privacy and PII handling requirements",
            "Comply with platform and organizational policies",
            "no medical advice",
            "Respect privacy and PII handling requirements"
        ])
    );
    assert_eq!(document.safety_guidelines.len(), 4);
    assert_eq!(document.safety_guidelines[2], "no medical advice");
}

#[test]
fn test_examples_present_only_when_requested() {
    let mut raw = RawRequest::new("technical_documentation", "document the API", "expert");
    let without = default_pipeline().generate(&raw).unwrap();
    assert!(without.examples.is_none());
    let json = serde_json::to_value(&without).unwrap();
    assert!(json["examples"].is_null());

    raw.preferences = Some(Preferences {
        examples: true,
        ..Default::default()
    });
    let with = default_pipeline().generate(&raw).unwrap();
    assert_eq!(
        with.examples.as_deref(),
        Some("Include 1-2 relevant examples for technical_documentation context")
    );
}

#[test]
fn test_tools_section_follows_registry() {
    let raw = RawRequest::new("creative_writing", "a mystery novel outline", "intermediate");

    let bare = bare_pipeline().generate(&raw).unwrap();
    assert!(bare.tools_integration.is_none());
    assert!(serde_json::to_value(&bare).unwrap()["tools_integration"].is_null());

    let full = default_pipeline().generate(&raw).unwrap();
    let tools = full.tools_integration.unwrap();
    assert_eq!(tools.available_mcp_tools.len(), 5);
    assert_eq!(
        tools.usage_hints,
        vec!["Use sequentialthinking for complex plot development"]
    );
}

#[test]
fn test_preferences_shape_instructions_and_format() {
    let mut raw = RawRequest::new("custom", "summarize meeting notes", "intermediate");
    raw.preferences = Some(Preferences {
        tone: Some("friendly".into()),
        verbosity: Some(Verbosity::Concise),
        examples: false,
    });
    raw.constraints = Some(Constraints {
        format: Some("json".into()),
        ..Default::default()
    });

    let document = default_pipeline().generate(&raw).unwrap();
    assert_eq!(
        document.instructions.last().map(String::as_str),
        Some("4. Maintain friendly tone throughout")
    );
    assert_eq!(
        document.output_format.format,
        "Provide response as valid JSON with specified structure"
    );
    assert_eq!(
        document.output_format.verbosity,
        "Be brief and direct, include only essential information"
    );
    assert_eq!(document.constraints["format"], json!("json"));
}

#[test]
fn test_domain_specific_block_is_attached_when_supplied() {
    let mut raw = RawRequest::new("creative_writing", "a noir short story", "expert");
    let without = default_pipeline().generate(&raw).unwrap();
    assert!(!without.constraints.contains_key("domain_specific"));

    let mut block = Map::new();
    block.insert("genre".into(), json!("noir"));
    raw.domain_specific = Some(block);
    let with = default_pipeline().generate(&raw).unwrap();
    assert_eq!(with.constraints["domain_specific"], json!({ "genre": "noir" }));
}

#[test]
fn test_repeated_generation_differs_only_in_timestamp() {
    let pipeline = default_pipeline();
    let raw = RawRequest::new("ai_agent_instructions", "triage support tickets", "expert");

    let first = pipeline.generate(&raw).unwrap();
    let second = pipeline.generate(&raw).unwrap();
    assert_eq!(first.without_timestamp(), second.without_timestamp());
    assert!(chrono::DateTime::parse_from_rfc3339(&first.metadata.generated_at).is_ok());
    assert!(first.metadata.generated_at.ends_with('Z'));
}

#[test]
fn test_pipeline_serves_concurrent_callers() {
    let pipeline = Arc::new(default_pipeline());
    let handles: Vec<_> = Domain::KNOWN
        .into_iter()
        .map(|domain| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || {
                pipeline
                    .generate(&RawRequest::new(domain.as_str(), "objective", "expert"))
                    .map(|d| d.metadata.domain)
            })
        })
        .collect();

    let mut domains: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    domains.sort();
    assert_eq!(domains.len(), 6);
    assert!(domains.contains(&"custom".to_string()));
}

#[test]
fn test_document_json_field_order() {
    let document = default_pipeline()
        .generate(&RawRequest::new("custom", "write release notes", "expert"))
        .unwrap();
    let text = serde_json::to_string(&document).unwrap();
    let order = [
        "\"title\":",
        "\"context\":",
        "\"objective\":",
        "\"instructions\":",
        "\"constraints\":",
        "\"output_format\":",
        "\"examples\":",
        "\"quality_criteria\":",
        "\"tools_integration\":",
        "\"safety_guidelines\":",
        "\"metadata\":",
    ];
    let positions: Vec<usize> = order.iter().map(|key| text.find(key).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
