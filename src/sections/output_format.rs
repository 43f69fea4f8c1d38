//! Output-format section.

use crate::document::{OutputFormat, SectionStructure};
use crate::request::Verbosity;

pub const DEFAULT_FORMAT: &str = "markdown";

pub const REQUIRED_SECTIONS: [&str; 4] = ["context", "instructions", "constraints", "quality_criteria"];
pub const OPTIONAL_SECTIONS: [&str; 2] = ["examples", "tools_integration"];

pub fn build(verbosity: Option<Verbosity>, format: Option<&str>) -> OutputFormat {
    OutputFormat {
        format: format_guidance(format.unwrap_or(DEFAULT_FORMAT)).to_string(),
        verbosity: verbosity_guidance(verbosity.unwrap_or_default()).to_string(),
        structure: SectionStructure {
            required_sections: REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect(),
            optional_sections: OPTIONAL_SECTIONS.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// Describe a response format. Unknown formats get the markdown description.
pub fn format_guidance(format: &str) -> &'static str {
    match format {
        "json" => "Provide response as valid JSON with specified structure",
        "plain_text" => "Provide plain text response with clear organization",
        "structured_template" => "Follow the specified template structure exactly",
        _ => "Use clean Markdown formatting with headers and sections",
    }
}

pub fn verbosity_guidance(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Concise => "Be brief and direct, include only essential information",
        Verbosity::Detailed => "Provide comprehensive information with explanations",
        Verbosity::Comprehensive => "Include extensive detail, examples, and context",
    }
}
