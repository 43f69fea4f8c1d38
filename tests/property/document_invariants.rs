//! Properties every generated document must satisfy

use metaprompt::capability::CapabilityRegistry;
use metaprompt::request::{Constraints, Preferences, Verbosity};
use metaprompt::sections::limits::SAFETY_CONSTRAINT_BASELINE;
use metaprompt::sections::GeneratorSettings;
use metaprompt::validation;
use metaprompt::{Pipeline, RawRequest};
use proptest::prelude::*;

fn domain_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("creative_writing".to_string()),
        Just("technical_documentation".to_string()),
        Just("customer_service".to_string()),
        Just("ai_agent_instructions".to_string()),
        Just("software_development".to_string()),
        Just("custom".to_string()),
        "[a-z][a-z_]{0,15}",
    ]
}

fn request_strategy() -> impl Strategy<Value = RawRequest> {
    (
        domain_strategy(),
        "[A-Za-z][A-Za-z ]{0,40}",
        "[a-z]{1,12}",
        proptest::option::of("[a-z]{0,10}"),
        proptest::option::of(prop_oneof![
            Just(Verbosity::Concise),
            Just(Verbosity::Detailed),
            Just(Verbosity::Comprehensive),
        ]),
        any::<bool>(),
        proptest::collection::vec("[a-z ]{1,20}", 0..4),
    )
        .prop_map(
            |(domain, objective, expertise, tone, verbosity, examples, safety)| {
                let mut raw = RawRequest::new(domain, objective, expertise);
                raw.preferences = Some(Preferences {
                    tone,
                    verbosity,
                    examples,
                });
                raw.constraints = Some(Constraints {
                    safety,
                    ..Default::default()
                });
                raw
            },
        )
}

fn pipeline() -> Pipeline {
    Pipeline::new(CapabilityRegistry::with_defaults(), GeneratorSettings::default())
}

proptest! {
    #[test]
    fn test_generation_is_repeatable(raw in request_strategy()) {
        let pipeline = pipeline();
        let first = pipeline.generate(&raw).unwrap();
        let second = pipeline.generate(&raw).unwrap();
        prop_assert_eq!(first.without_timestamp(), second.without_timestamp());
    }

    #[test]
    fn test_safety_baseline_is_always_the_prefix(raw in request_strategy()) {
        let document = pipeline().generate(&raw).unwrap();
        let caller = raw.constraints.as_ref().map(|c| c.safety.clone()).unwrap_or_default();

        let safety: Vec<String> = document.constraints["safety"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        prop_assert_eq!(safety.len(), SAFETY_CONSTRAINT_BASELINE.len() + caller.len());
        prop_assert_eq!(&safety[..2], &SAFETY_CONSTRAINT_BASELINE[..]);
        prop_assert_eq!(&safety[2..], &caller[..]);
        prop_assert_eq!(&document.safety_guidelines[2..], &caller[..]);
    }

    #[test]
    fn test_instructions_are_numbered_contiguously(raw in request_strategy()) {
        let document = pipeline().generate(&raw).unwrap();
        prop_assert!(document.instructions.len() >= 3);
        for (i, instruction) in document.instructions.iter().enumerate() {
            let prefix = format!("{}. ", i + 1);
            prop_assert!(instruction.starts_with(&prefix));
        }
    }

    #[test]
    fn test_standard_sections_pass_output_checks(raw in request_strategy()) {
        let (document, report) = pipeline().draft(&raw).unwrap();
        prop_assert!(report.is_valid);
        prop_assert_eq!(validation::check(&document), report);
    }

    #[test]
    fn test_examples_follow_preference(raw in request_strategy()) {
        let document = pipeline().generate(&raw).unwrap();
        let wanted = raw.preferences.as_ref().map(|p| p.examples).unwrap_or(false);
        prop_assert_eq!(document.examples.is_some(), wanted);
    }
}
