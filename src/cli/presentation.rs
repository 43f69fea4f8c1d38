//! CLI presentation: text and JSON formatters for command results.

use crate::capability::CapabilityInfo;
use crate::document::Document;
use crate::error::ApiError;
use crate::request::Domain;
use crate::sections::instructions::domain_directives;
use crate::validation::OutputReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

const PREVIEW_CONTEXT_CHARS: usize = 100;

/// Short human-readable summary of a generated document.
pub fn format_preview(document: &Document, saved_to: Option<&Path>) -> String {
    let mut lines = vec![format!("{}", "Prompt generated successfully!".green().bold())];
    if let Some(path) = saved_to {
        lines.push(format!("Saved to: {}", path.display()));
    }

    let context: String = document.context.chars().take(PREVIEW_CONTEXT_CHARS).collect();
    let tools = document
        .tools_integration
        .as_ref()
        .map(|t| t.available_mcp_tools.len())
        .unwrap_or(0);

    lines.push(String::new());
    lines.push(format!("{}", "Preview:".bold()));
    lines.push("=".repeat(50));
    lines.push(format!("Title: {}", document.title));
    lines.push(format!("Context: {}...", context));
    lines.push(format!("Instructions: {} steps", document.instructions.len()));
    lines.push(format!("Tools: {} MCP servers available", tools));
    lines.join("\n")
}

pub fn format_domains_table() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Domain", "Domain rules"]);
    for (i, domain) in Domain::KNOWN.iter().enumerate() {
        let rules = if domain.is_specialised() {
            format!("{} extra directives", domain_directives(domain).len())
        } else {
            "generic".to_string()
        };
        table.add_row(vec![(i + 1).to_string(), domain.to_string(), rules]);
    }
    table.to_string()
}

pub fn format_tools_table(capabilities: &[CapabilityInfo]) -> String {
    if capabilities.is_empty() {
        return "No capabilities registered.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Capability", "Available", "Description", "Hint"]);
    for info in capabilities {
        table.add_row(vec![
            info.name.clone(),
            if info.available { "yes" } else { "no" }.to_string(),
            info.description.clone(),
            info.hint.clone(),
        ]);
    }
    table.to_string()
}

pub fn format_capability(
    name: &str,
    info: Option<&CapabilityInfo>,
    format: &str,
) -> Result<String, ApiError> {
    if format == "json" {
        let value = match info {
            Some(info) => serde_json::to_value(info)?,
            None => serde_json::json!({ "name": name, "known": false }),
        };
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(match info {
        Some(info) => format!(
            "{}\n  Available: {}\n  Description: {}\n  Hint: {}",
            info.name.bold(),
            if info.available { "yes" } else { "no" },
            info.description,
            info.hint
        ),
        None => format!("Unknown capability: {}", name),
    })
}

pub fn format_check_report(
    document: &Document,
    report: &OutputReport,
    format: &str,
) -> Result<String, ApiError> {
    if format == "json" {
        let value = serde_json::json!({
            "title": document.title,
            "is_valid": report.is_valid,
            "issues": report.messages(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    if report.is_valid {
        return Ok(format!(
            "Request accepted: {}\n  Sections: all checks passed",
            document.title
        ));
    }
    let mut s = format!(
        "Request accepted: {}\n\nIssues ({}):",
        document.title,
        report.issues.len()
    );
    for issue in &report.issues {
        s.push_str(&format!("\n  - {}", issue));
    }
    Ok(s)
}
