//! Property-based tests for document invariants

mod document_invariants;
