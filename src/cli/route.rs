//! CLI route: single route table and run context. Dispatches to the pipeline and presentation.

use crate::cli::files::{persist_document, read_request};
use crate::cli::help::command_name;
use crate::cli::interactive::{build_interactive_request, collect_answers};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_capability, format_check_report, format_domains_table, format_preview,
    format_tools_table,
};
use crate::config::{ConfigLoader, MetaPromptConfig};
use crate::error::ApiError;
use crate::pipeline::Pipeline;
use crate::request::RawRequest;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: loaded configuration and the pipeline built from it.
pub struct RunContext {
    config: MetaPromptConfig,
    pipeline: Pipeline,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::from_config(config)
    }

    /// Create run context from an already-loaded configuration.
    pub fn from_config(config: MetaPromptConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|issues| {
            let msgs: Vec<String> = issues.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        let pipeline = Pipeline::from_config(&config);
        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &MetaPromptConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                request,
                output,
                print,
            } => {
                let raw = read_request(request)?;
                if *print {
                    let document = self.pipeline.generate(&raw)?;
                    Ok(serde_json::to_string_pretty(&document)?)
                } else {
                    self.generate_and_save(&raw, output.as_deref())
                }
            }
            Commands::Interactive { output } => {
                let answers = collect_answers()?;
                let raw = build_interactive_request(
                    answers,
                    &self.config.generator,
                    self.pipeline.registry(),
                );
                self.generate_and_save(&raw, output.as_deref())
            }
            Commands::Check { request, format } => {
                let raw = read_request(request)?;
                let (document, report) = self.pipeline.draft(&raw)?;
                format_check_report(&document, &report, format)
            }
            Commands::Domains => Ok(format_domains_table()),
            Commands::Tools { name, format } => {
                let registry = self.pipeline.registry();
                match name {
                    Some(name) => format_capability(name, registry.lookup(name).as_ref(), format),
                    None if format == "json" => {
                        Ok(serde_json::to_string_pretty(&registry.describe_all())?)
                    }
                    None => Ok(format_tools_table(&registry.describe_all())),
                }
            }
        }
    }

    /// Generate a document, save it, and return the preview text.
    pub fn generate_and_save(
        &self,
        raw: &RawRequest,
        output: Option<&Path>,
    ) -> Result<String, ApiError> {
        let document = self.pipeline.generate(raw)?;
        let directory = output.unwrap_or(self.config.output.directory.as_path());
        let path = persist_document(directory, &document)?;
        Ok(format_preview(&document, Some(&path)))
    }
}
