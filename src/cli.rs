//! CLI domain: parse, route, help, output, and presentation only.
//! No pipeline logic; the route table dispatches to the pipeline and formatters.

mod files;
mod help;
mod interactive;
mod output;
mod parse;
mod presentation;
mod route;

pub use files::{document_file_name, persist_document, read_request};
pub use help::command_name;
pub use interactive::{build_interactive_request, InteractiveAnswers};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_capability, format_check_report, format_domains_table, format_preview,
    format_tools_table,
};
pub use route::RunContext;
