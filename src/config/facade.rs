//! Config loader facade: assembles the source layers and deserializes the result.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::MetaPromptConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace files,
    /// environment.
    pub fn load(workspace_root: &Path) -> Result<MetaPromptConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = merge_policy::add_environment(builder);

        let config: MetaPromptConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file over the defaults.
    ///
    /// The file must exist. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<MetaPromptConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = merge_policy::add_environment(builder);
        builder.build()?.try_deserialize()
    }

    /// Global config file location, if one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
