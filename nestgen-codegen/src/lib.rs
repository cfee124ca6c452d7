//! DTO code generation for the nestgen generator.
//!
//! This crate turns a list of model descriptors into TypeScript DTO
//! source files. Referenced type names are rewritten with the `Dto`
//! suffix, nested properties are renamed recursively, and each model is
//! rendered through a template set, formatted, re-indented, and written
//! to the output directory.
//!
//! # Usage
//!
//! ```ignore
//! use nestgen_codegen::{BuiltinTemplates, DtoGenerator, EmitPolicy};
//! use nestgen_model::ModelFile;
//! use std::path::Path;
//!
//! let file = ModelFile::open("models.json")?;
//! let templates = BuiltinTemplates;
//! let generator = DtoGenerator::new(file.models(), &templates)
//!     .with_policy(EmitPolicy::Suffixed);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("output"))?;
//! ```

mod ast;
mod builder;
mod code_file;
mod generator;
mod rename;
mod templates;

pub use ast::Import;
pub use builder::CodeBuilder;
pub use code_file::CodeFile;
pub use generator::{
    DtoGenerator, EmitPolicy, GenerateResult, ISO_DATE_STRING, MONGO_OBJECT_ID, PreviewFile,
};
pub use rename::{dto_name, rename_model, rename_properties};
pub use templates::{BuiltinTemplates, TemplateKind, Templates};
