//! Configuration System
//!
//! Layered configuration for the generator: built-in defaults, the global
//! config file, the workspace config file, then `METAPROMPT__*` environment
//! variables. Later layers override earlier ones.

use crate::capability::DEFAULT_CAPABILITIES;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4";
pub const DEFAULT_RUNTIME: &str = "Node.js v24.7.0";
pub const DEFAULT_SCHEMA_FILE: &str = "meta-prompt-schema.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaPromptConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Capability registry seed
    #[serde(default)]
    pub capabilities: CapabilityConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identifiers recorded in generated documents, and the optional request schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Request schema file; relative paths resolve against the working directory
    #[serde(default = "default_schema_path")]
    pub schema_path: Option<PathBuf>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_runtime() -> String {
    DEFAULT_RUNTIME.to_string()
}

fn default_schema_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_SCHEMA_FILE))
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            runtime: default_runtime(),
            schema_path: default_schema_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityConfig {
    #[serde(default = "default_capabilities")]
    pub available: Vec<String>,
}

fn default_capabilities() -> Vec<String> {
    DEFAULT_CAPABILITIES.iter().map(|s| s.to_string()).collect()
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            available: default_capabilities(),
        }
    }
}

/// Where the CLI writes generated documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Configuration validation problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    Generator(String),
    Capability(String),
    Output(String),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::Generator(msg) => write!(f, "Generator: {}", msg),
            ConfigIssue::Capability(msg) => write!(f, "Capability: {}", msg),
            ConfigIssue::Output(msg) => write!(f, "Output: {}", msg),
        }
    }
}

impl std::error::Error for ConfigIssue {}

impl MetaPromptConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ConfigIssue>> {
        let mut issues = Vec::new();

        if self.generator.model.trim().is_empty() {
            issues.push(ConfigIssue::Generator("model cannot be empty".to_string()));
        }
        if self.generator.runtime.trim().is_empty() {
            issues.push(ConfigIssue::Generator("runtime cannot be empty".to_string()));
        }

        for (index, name) in self.capabilities.available.iter().enumerate() {
            if name.trim().is_empty() {
                issues.push(ConfigIssue::Capability(format!(
                    "entry {} has an empty name",
                    index
                )));
            }
        }

        if self.output.directory.as_os_str().is_empty() {
            issues.push(ConfigIssue::Output("directory cannot be empty".to_string()));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
