//! Request and document validation.
//!
//! Input validation is fatal: a request that fails never reaches assembly.
//! Output validation only produces issues for the refiner.

pub mod input;
pub mod output;
pub mod schema;

pub use input::InputValidator;
pub use output::{check, OutputIssue, OutputReport};
pub use schema::RequestSchema;
