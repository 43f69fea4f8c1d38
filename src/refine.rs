//! Refiner: one bounded repair pass over a document that failed output checks.
//!
//! Only short context has a repair. Other issues leave the document as it is.
//! The result is not re-checked.

use crate::document::Document;
use crate::validation::OutputIssue;
use tracing::debug;

pub const CONTEXT_SUPPLEMENT: &str = " This prompt is designed to provide comprehensive guidance while maintaining safety and quality standards.";

pub fn refine(document: &mut Document, issues: &[OutputIssue]) {
    for issue in issues {
        match issue {
            OutputIssue::ContextTooShort => {
                document.context.push_str(CONTEXT_SUPPLEMENT);
                debug!("Extended short context");
            }
            OutputIssue::TooFewInstructions | OutputIssue::MissingSafetyConstraints => {
                debug!(issue = %issue, "No repair for issue");
            }
        }
    }
}
