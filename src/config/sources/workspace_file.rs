//! Workspace config file source: metaprompt.toml and metaprompt.{env}.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::{Path, PathBuf};

pub const WORKSPACE_CONFIG_FILE: &str = "metaprompt.toml";

/// Workspace config file paths in precedence order (base, then env-specific).
pub fn workspace_config_paths(workspace_root: &Path) -> Vec<PathBuf> {
    let mut paths = vec![workspace_root.join(WORKSPACE_CONFIG_FILE)];
    if let Ok(env_name) = std::env::var("METAPROMPT_ENV") {
        if !env_name.is_empty() {
            paths.push(workspace_root.join(format!("metaprompt.{}.toml", env_name)));
        }
    }
    paths
}

/// Add workspace config files that exist to builder.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    for path in workspace_config_paths(workspace_root) {
        if path.exists() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
    }
    builder
}
