//! Prompt document: the structured artifact produced for one request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Assembled multi-section prompt document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub context: String,
    pub objective: String,
    pub instructions: Vec<String>,
    pub constraints: Map<String, Value>,
    pub output_format: OutputFormat,
    pub examples: Option<String>,
    pub quality_criteria: QualityCriteria,
    pub tools_integration: Option<ToolsIntegration>,
    pub safety_guidelines: Vec<String>,
    pub metadata: Metadata,
}

impl Document {
    /// Copy of this document with the generation timestamp cleared.
    ///
    /// Two documents generated from the same request and registry compare
    /// equal after this.
    pub fn without_timestamp(&self) -> Self {
        let mut copy = self.clone();
        copy.metadata.generated_at.clear();
        copy
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputFormat {
    pub format: String,
    pub verbosity: String,
    pub structure: SectionStructure,
}

/// Which document sections a consumer must and may rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStructure {
    pub required_sections: Vec<String>,
    pub optional_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCriteria {
    pub clarity: String,
    pub completeness: String,
    pub actionability: String,
    pub safety: String,
    pub domain_appropriateness: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsIntegration {
    pub available_mcp_tools: Vec<String>,
    pub usage_hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    pub model: String,
    pub runtime: String,
    pub domain: String,
    pub user_expertise: String,
}
