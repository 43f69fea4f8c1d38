//! Interactive request collector.

use crate::capability::CapabilityRegistry;
use crate::config::GeneratorConfig;
use crate::error::ApiError;
use crate::request::{Domain, Environment, Preferences, RawRequest, RawUserProfile, Verbosity};

/// Answers gathered from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveAnswers {
    pub domain: Domain,
    pub objective: String,
    pub expertise: String,
    pub tone: String,
    pub verbosity: Verbosity,
}

/// Turn answers into a request. Examples are always requested and the
/// environment describes this generator.
pub fn build_interactive_request(
    answers: InteractiveAnswers,
    generator: &GeneratorConfig,
    registry: &CapabilityRegistry,
) -> RawRequest {
    let expertise = if answers.expertise.trim().is_empty() {
        "intermediate".to_string()
    } else {
        answers.expertise
    };

    RawRequest {
        domain: Some(answers.domain.to_string()),
        objective: Some(answers.objective),
        user_profile: Some(RawUserProfile {
            expertise: Some(expertise),
            context: None,
        }),
        preferences: Some(Preferences {
            tone: Some(answers.tone),
            verbosity: Some(answers.verbosity),
            examples: true,
        }),
        environment: Some(Environment {
            runtime: Some(generator.runtime.clone()),
            model: Some(generator.model.clone()),
            tools: registry.available().to_vec(),
        }),
        ..Default::default()
    }
}

/// Prompt on the terminal for each answer.
pub fn collect_answers() -> Result<InteractiveAnswers, ApiError> {
    use dialoguer::{Input, Select};

    let domains = Domain::KNOWN;
    let domain_names: Vec<&str> = domains.iter().map(|d| d.as_str()).collect();
    let domain_index = Select::new()
        .with_prompt("Select domain")
        .items(&domain_names)
        .default(0)
        .interact()
        .map_err(input_error)?;

    let objective: String = Input::new()
        .with_prompt("What is your primary objective?")
        .interact_text()
        .map_err(input_error)?;

    let expertise: String = Input::new()
        .with_prompt("Your expertise level (beginner/intermediate/expert)")
        .default("intermediate".to_string())
        .interact_text()
        .map_err(input_error)?;

    let tone: String = Input::new()
        .with_prompt("Preferred tone (professional/friendly/empathetic)")
        .default("professional".to_string())
        .interact_text()
        .map_err(input_error)?;

    let verbosity_names: Vec<&str> = Verbosity::ALL.iter().map(Verbosity::as_str).collect();
    let verbosity_index = Select::new()
        .with_prompt("Detail level")
        .items(&verbosity_names)
        .default(1)
        .interact()
        .map_err(input_error)?;

    Ok(InteractiveAnswers {
        domain: domains[domain_index].clone(),
        objective,
        expertise,
        tone,
        verbosity: Verbosity::ALL[verbosity_index],
    })
}

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::InputFailed(e.to_string())
}
