//! Section builders: one pure function per document section.
//!
//! Domain-dependent content lives in `match` tables over [`Domain`] with an
//! explicit fallback arm. [`SectionBuilders`] groups the builders behind a trait
//! so an assembler can swap individual sections; [`StandardSections`] uses the
//! defaults for all of them.

pub mod context;
pub mod instructions;
pub mod limits;
pub mod metadata;
pub mod output_format;
pub mod reference;
pub mod tools;

use crate::capability::CapabilityRegistry;
use crate::document::{Metadata, OutputFormat, QualityCriteria, ToolsIntegration};
use crate::request::{Constraints, Domain, Environment, Preferences, UserProfile, Verbosity};
use serde_json::{Map, Value};

pub use metadata::GeneratorSettings;

/// Document title derived from the domain name.
pub fn title(domain: &Domain) -> String {
    format!(
        "Generated Prompt for {}",
        domain.as_str().replace('_', " ").to_uppercase()
    )
}

/// The full set of section builders used by the assembler.
///
/// Every method has the standard implementation as its default body.
pub trait SectionBuilders: Send + Sync {
    fn context(&self, domain: &Domain, profile: &UserProfile, environment: &Environment) -> String {
        context::build(domain, profile, environment)
    }

    fn instructions(&self, domain: &Domain, preferences: &Preferences) -> Vec<String> {
        instructions::build(domain, preferences)
    }

    fn constraints(
        &self,
        constraints: &Constraints,
        domain_specific: Option<&Map<String, Value>>,
    ) -> Map<String, Value> {
        limits::build_constraints(constraints, domain_specific)
    }

    fn output_format(&self, verbosity: Option<Verbosity>, format: Option<&str>) -> OutputFormat {
        output_format::build(verbosity, format)
    }

    fn examples(&self, domain: &Domain) -> String {
        reference::examples(domain)
    }

    fn quality_criteria(&self) -> QualityCriteria {
        reference::quality_criteria()
    }

    fn tools_integration(
        &self,
        domain: &Domain,
        registry: &CapabilityRegistry,
    ) -> Option<ToolsIntegration> {
        tools::build(domain, registry)
    }

    fn safety_guidelines(&self, custom: &[String]) -> Vec<String> {
        limits::build_safety_guidelines(custom)
    }

    fn metadata(
        &self,
        settings: &GeneratorSettings,
        domain: &Domain,
        profile: &UserProfile,
    ) -> Metadata {
        metadata::build(settings, domain, profile)
    }
}

/// Builders with no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSections;

impl SectionBuilders for StandardSections {}
