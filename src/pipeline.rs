//! Pipeline orchestrator: the single entry point for prompt generation.
//!
//! `generate` runs input validation, assembly, output checks, and at most one
//! refinement pass. A refined document is returned without being checked again,
//! so it may still carry issues the refiner cannot repair.
//!
//! A pipeline holds only read-only state and can serve concurrent callers.

use crate::assembler::Assembler;
use crate::capability::CapabilityRegistry;
use crate::config::MetaPromptConfig;
use crate::document::Document;
use crate::error::ValidationError;
use crate::refine::refine;
use crate::request::RawRequest;
use crate::sections::{GeneratorSettings, SectionBuilders};
use crate::validation::{self, InputValidator, OutputReport, RequestSchema};
use std::sync::Arc;
use tracing::{debug, info};

pub struct Pipeline {
    validator: InputValidator,
    assembler: Assembler,
}

impl Pipeline {
    /// Pipeline with built-in validation rules and the standard section builders.
    pub fn new(registry: CapabilityRegistry, settings: GeneratorSettings) -> Self {
        Self {
            validator: InputValidator::new(),
            assembler: Assembler::new(Arc::new(registry), settings),
        }
    }

    /// Build a pipeline from configuration.
    ///
    /// The schema file, if configured, is loaded here. A missing or broken
    /// schema only produces a warning.
    pub fn from_config(config: &MetaPromptConfig) -> Self {
        let registry = CapabilityRegistry::new(config.capabilities.available.iter().cloned());
        let schema = config
            .generator
            .schema_path
            .as_deref()
            .and_then(RequestSchema::load_or_warn);
        info!(
            capabilities = registry.len(),
            schema = schema.is_some(),
            "Pipeline initialized"
        );
        Self::new(registry, GeneratorSettings::from(&config.generator)).with_schema(schema)
    }

    pub fn with_schema(mut self, schema: Option<RequestSchema>) -> Self {
        self.validator = InputValidator::with_schema(schema);
        self
    }

    /// Replace the section builders, keeping registry and settings.
    pub fn with_sections(mut self, sections: Arc<dyn SectionBuilders>) -> Self {
        let registry = Arc::new(self.assembler.registry().clone());
        let settings = self.assembler.settings().clone();
        self.assembler = Assembler::with_sections(sections, registry, settings);
        self
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        self.assembler.registry()
    }

    pub fn has_schema(&self) -> bool {
        self.validator.has_schema()
    }

    /// Generate a document for a request.
    pub fn generate(&self, raw: &RawRequest) -> Result<Document, ValidationError> {
        let (mut document, report) = self.draft(raw)?;
        if !report.is_valid {
            info!(issues = ?report.messages(), "Refining prompt based on validation");
            refine(&mut document, &report.issues);
        }
        Ok(document)
    }

    /// Validate and assemble without refining; returns the output report too.
    pub fn draft(&self, raw: &RawRequest) -> Result<(Document, OutputReport), ValidationError> {
        let request = self.validator.validate(raw)?;
        let document = self.assembler.assemble(&request);
        let report = validation::check(&document);
        debug!(
            domain = %request.domain,
            valid = report.is_valid,
            "Document assembled"
        );
        Ok((document, report))
    }
}
