//! Document assembler: runs every section builder once and collects the results.

use crate::capability::CapabilityRegistry;
use crate::document::Document;
use crate::request::Request;
use crate::sections::{self, GeneratorSettings, SectionBuilders, StandardSections};
use std::sync::Arc;

pub struct Assembler {
    sections: Arc<dyn SectionBuilders>,
    registry: Arc<CapabilityRegistry>,
    settings: GeneratorSettings,
}

impl Assembler {
    /// Create an assembler with the standard section builders
    pub fn new(registry: Arc<CapabilityRegistry>, settings: GeneratorSettings) -> Self {
        Self::with_sections(Arc::new(StandardSections), registry, settings)
    }

    /// Create an assembler with a specific set of section builders
    pub fn with_sections(
        sections: Arc<dyn SectionBuilders>,
        registry: Arc<CapabilityRegistry>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            sections,
            registry,
            settings,
        }
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Build a complete document. Sections are produced in document order.
    pub fn assemble(&self, request: &Request) -> Document {
        let b = self.sections.as_ref();
        let domain = &request.domain;

        Document {
            title: sections::title(domain),
            context: b.context(domain, &request.user_profile, &request.environment),
            objective: request.objective.clone(),
            instructions: b.instructions(domain, &request.preferences),
            constraints: b.constraints(&request.constraints, request.domain_specific.as_ref()),
            output_format: b.output_format(
                request.preferences.verbosity,
                request.constraints.format.as_deref(),
            ),
            examples: request.preferences.examples.then(|| b.examples(domain)),
            quality_criteria: b.quality_criteria(),
            tools_integration: b.tools_integration(domain, &self.registry),
            safety_guidelines: b.safety_guidelines(&request.constraints.safety),
            metadata: b.metadata(&self.settings, domain, &request.user_profile),
        }
    }
}
