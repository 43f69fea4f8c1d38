//! Optional JSON Schema for requests.
//!
//! Loaded once before the pipeline serves requests. Any load failure is
//! reported to the caller of [`RequestSchema::load_or_warn`] as a warning and the
//! pipeline keeps its built-in rules.

use crate::error::ValidationError;
use crate::request::RawRequest;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Schema {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Schema {path:?} is not a usable JSON Schema: {message}")]
    Invalid { path: PathBuf, message: String },
}

pub struct RequestSchema {
    path: PathBuf,
    validator: jsonschema::Validator,
}

impl fmt::Debug for RequestSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSchema")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl RequestSchema {
    /// Read and compile a schema file.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&content).map_err(|source| SchemaError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(path, &schema)
    }

    /// Compile an in-memory schema. `origin` is only used in messages.
    pub fn from_value(origin: &Path, schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Invalid {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: origin.to_path_buf(),
            validator,
        })
    }

    /// Load a schema, logging a warning and returning `None` on any failure.
    pub fn load_or_warn(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(schema) => {
                debug!(schema = %path.display(), "Loaded request schema");
                Some(schema)
            }
            Err(SchemaError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                warn!(
                    schema = %path.display(),
                    "Schema file not found, using built-in validation"
                );
                None
            }
            Err(e) => {
                warn!("{}; using built-in validation", e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate a raw request, reporting every violation at once.
    ///
    /// Checks the JSON document the request was read from when there is one,
    /// so unknown keys and omitted defaults are seen as the caller sent them.
    /// Requests built in code are rendered to JSON first.
    pub fn check(&self, raw: &RawRequest) -> Result<(), ValidationError> {
        let rendered;
        let instance = match raw.source.as_ref() {
            Some(document) => document,
            None => match serde_json::to_value(raw) {
                Ok(value) => {
                    rendered = value;
                    &rendered
                }
                Err(e) => {
                    warn!("Could not render request for schema validation: {}", e);
                    return Ok(());
                }
            },
        };

        let violations: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| format!("  - {}: {e}", e.instance_path()))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Schema(violations))
        }
    }
}
