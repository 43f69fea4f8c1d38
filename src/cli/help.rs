//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log fields.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Interactive { .. } => "interactive",
        Commands::Check { .. } => "check",
        Commands::Domains => "domains",
        Commands::Tools { .. } => "tools",
    }
}
