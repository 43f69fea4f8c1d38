//! Merge rules: defaults, override order, conflict handling.

use crate::capability::DEFAULT_CAPABILITIES;
use crate::config::{DEFAULT_MODEL, DEFAULT_RUNTIME, DEFAULT_SCHEMA_FILE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Prefix for environment overrides, e.g. `METAPROMPT__GENERATOR__MODEL`.
pub const ENV_PREFIX: &str = "METAPROMPT";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let capabilities: Vec<String> = DEFAULT_CAPABILITIES.iter().map(|s| s.to_string()).collect();
    Config::builder()
        .set_default("generator.model", DEFAULT_MODEL)?
        .set_default("generator.runtime", DEFAULT_RUNTIME)?
        .set_default("generator.schema_path", DEFAULT_SCHEMA_FILE)?
        .set_default("capabilities.available", capabilities)?
        .set_default("output.directory", ".")
}

/// Environment variables always win over files.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    )
}
