//! Core utilities for the nestgen DTO generator.
//!
//! This crate provides the primitives shared across the nestgen
//! workspace: file writing, indentation configuration, and the
//! formatting passes applied to rendered source text.

mod file;
mod format;
mod indent;

// File operations
pub use file::{OutputFile, write_file};
// Formatting passes
pub use format::{format_code, format_indentation};
// Indentation configuration
pub use indent::Indent;
