//! Metaprompt: domain-aware prompt document generation
//!
//! Turns a structured request (domain, objective, user profile, optional
//! preferences and constraints) into a multi-section prompt document for a
//! downstream language model. [`pipeline::Pipeline`] is the entry point: it
//! validates the request, assembles the document from per-section builders,
//! checks the result, and applies one bounded repair pass when needed.

pub mod assembler;
pub mod capability;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod refine;
pub mod request;
pub mod sections;
pub mod validation;

pub use document::Document;
pub use error::{ApiError, ValidationError};
pub use pipeline::Pipeline;
pub use request::{Domain, RawRequest};
