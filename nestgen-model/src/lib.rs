//! Model descriptor types for the nestgen DTO generator.
//!
//! This crate defines the intermediate representation handed over by
//! the upstream API parser: an ordered list of [`Model`] descriptors,
//! one per schema type, serialized as a JSON array.
//!
//! # Architecture
//!
//! ```text
//! OpenAPI schema → upstream parser → models.json → nestgen-model → codegen
//! ```
//!
//! The descriptors are treated as an immutable input list. Code
//! generation builds fresh, transformed copies and never mutates the
//! loaded tree.

mod error;
mod file;
mod model;

pub use error::{Error, Result};
pub use file::ModelFile;
pub use model::{EnumMember, Export, Model};
