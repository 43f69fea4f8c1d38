//! Request input and document persistence for the CLI.

use crate::document::Document;
use crate::error::ApiError;
use crate::request::RawRequest;
use chrono::Utc;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read a JSON request from a file, or from stdin when `path` is `-`.
pub fn read_request(path: &Path) -> Result<RawRequest, ApiError> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    parse_request(&content)
}

/// Parse request text. Only malformed JSON is an error here; missing or
/// mistyped fields are left for the input validator.
pub fn parse_request(content: &str) -> Result<RawRequest, ApiError> {
    serde_json::from_str::<serde_json::Value>(content)
        .map(RawRequest::from_json)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// File name for a document generated at `unix_millis`.
pub fn document_file_name(unix_millis: i64) -> String {
    format!("generated-prompt-{}.json", unix_millis)
}

/// Write a document as pretty JSON into `directory`, returning the file path.
pub fn persist_document(directory: &Path, document: &Document) -> Result<PathBuf, ApiError> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(document_file_name(Utc::now().timestamp_millis()));
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), "Document saved");
    Ok(path)
}
