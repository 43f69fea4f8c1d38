//! CLI route table driven with a workspace config

use metaprompt::cli::{Commands, RunContext};
use tempfile::TempDir;

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("metaprompt.toml"),
        format!(
            "[generator]\nschema_path = {:?}\n\n[output]\ndirectory = {:?}\n",
            temp.path().join("no-schema.json").to_string_lossy(),
            temp.path().join("prompts").to_string_lossy()
        ),
    )
    .unwrap();
    std::fs::write(
        temp.path().join("request.json"),
        r#"{ "domain": "technical_documentation", "objective": "explain the config layers", "user_profile": { "expertise": "beginner" } }"#,
    )
    .unwrap();
    temp
}

#[test]
fn test_generate_print_emits_document_json() {
    let temp = workspace();
    let ctx = RunContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = ctx
        .execute(&Commands::Generate {
            request: temp.path().join("request.json"),
            output: None,
            print: true,
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"], "Generated Prompt for TECHNICAL DOCUMENTATION");
    assert!(!temp.path().join("prompts").exists());
}

#[test]
fn test_generate_writes_to_output_override() {
    let temp = workspace();
    let ctx = RunContext::new(temp.path().to_path_buf(), None).unwrap();
    let target = temp.path().join("elsewhere");
    let output = ctx
        .execute(&Commands::Generate {
            request: temp.path().join("request.json"),
            output: Some(target.clone()),
            print: false,
        })
        .unwrap();

    assert!(output.contains("Instructions: 6 steps"));
    let files: Vec<_> = std::fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("generated-prompt-"));
}

#[test]
fn test_check_reports_without_saving() {
    let temp = workspace();
    let ctx = RunContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = ctx
        .execute(&Commands::Check {
            request: temp.path().join("request.json"),
            format: "json".into(),
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["is_valid"], true);
    assert_eq!(value["issues"], serde_json::json!([]));
    assert!(!temp.path().join("prompts").exists());
}

#[test]
fn test_domains_and_tools_listings() {
    let temp = workspace();
    let ctx = RunContext::new(temp.path().to_path_buf(), None).unwrap();

    let domains = ctx.execute(&Commands::Domains).unwrap();
    assert!(domains.contains("ai_agent_instructions"));

    let tools = ctx
        .execute(&Commands::Tools {
            name: None,
            format: "json".into(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&tools).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 5);
}

#[test]
fn test_explicit_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let result = RunContext::new(
        temp.path().to_path_buf(),
        Some(temp.path().join("absent.toml")),
    );
    assert!(result.is_err());
}

#[test]
fn test_generate_tolerates_loose_optional_fields() {
    let temp = workspace();
    let ctx = RunContext::new(temp.path().to_path_buf(), None).unwrap();
    let request = temp.path().join("loose.json");
    std::fs::write(
        &request,
        r#"{
            "domain": "customer_service",
            "objective": "calm an upset caller",
            "user_profile": { "expertise": "beginner" },
            "constraints": { "safety": null },
            "preferences": { "verbosity": "chatty", "examples": null }
        }"#,
    )
    .unwrap();

    let output = ctx
        .execute(&Commands::Generate {
            request,
            output: None,
            print: true,
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value["output_format"]["verbosity"],
        "Provide comprehensive information with explanations"
    );
    assert!(value["examples"].is_null());
}

#[test]
fn test_generate_names_every_missing_field() {
    let temp = workspace();
    let ctx = RunContext::new(temp.path().to_path_buf(), None).unwrap();
    let request = temp.path().join("empty.json");
    std::fs::write(&request, r#"{ "preferences": { "verbosity": "chatty" } }"#).unwrap();

    let err = ctx
        .execute(&Commands::Generate {
            request,
            output: None,
            print: true,
        })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required fields: domain, objective, user_profile"
    );
}
