//! Examples hint and quality criteria. Neither depends on caller preferences.

use crate::document::QualityCriteria;
use crate::request::Domain;

pub fn examples(domain: &Domain) -> String {
    format!("Include 1-2 relevant examples for {domain} context")
}

pub fn quality_criteria() -> QualityCriteria {
    QualityCriteria {
        clarity: "Instructions are unambiguous and easy to follow".to_string(),
        completeness: "All necessary elements are included".to_string(),
        actionability: "Response can be immediately implemented".to_string(),
        safety: "Complies with all safety and policy requirements".to_string(),
        domain_appropriateness: "Content is suitable for the specified domain".to_string(),
    }
}
