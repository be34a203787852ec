//! Outline generators for the document formats synopsis understands.
//!
//! Each submodule implements the `Generator` trait for one document type.
//! Markdown goes through tree-sitter; plain text uses setext-style underlines.

pub mod markdown;
pub mod plain;
