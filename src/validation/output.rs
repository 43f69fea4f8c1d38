//! Output validator: minimum-content rules for an assembled document.
//!
//! Rules are evaluated independently; each contributes at most one issue.

use crate::document::Document;
use crate::sections::limits::KEY_SAFETY;
use serde::Serialize;
use std::fmt;

pub const MIN_CONTEXT_CHARS: usize = 10;
pub const MIN_INSTRUCTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputIssue {
    ContextTooShort,
    TooFewInstructions,
    MissingSafetyConstraints,
}

impl OutputIssue {
    pub fn message(&self) -> &'static str {
        match self {
            OutputIssue::ContextTooShort => "Context section needs more detail",
            OutputIssue::TooFewInstructions => "Instructions section needs at least 3 items",
            OutputIssue::MissingSafetyConstraints => "Safety constraints must be included",
        }
    }
}

impl fmt::Display for OutputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputReport {
    pub is_valid: bool,
    pub issues: Vec<OutputIssue>,
}

impl OutputReport {
    pub fn messages(&self) -> Vec<&'static str> {
        self.issues.iter().map(OutputIssue::message).collect()
    }
}

pub fn check(document: &Document) -> OutputReport {
    let mut issues = Vec::new();

    if document.context.chars().count() < MIN_CONTEXT_CHARS {
        issues.push(OutputIssue::ContextTooShort);
    }
    if document.instructions.len() < MIN_INSTRUCTIONS {
        issues.push(OutputIssue::TooFewInstructions);
    }
    // Presence only; an empty safety list passes.
    if !document.constraints.contains_key(KEY_SAFETY) {
        issues.push(OutputIssue::MissingSafetyConstraints);
    }

    OutputReport {
        is_valid: issues.is_empty(),
        issues,
    }
}
