//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Organizes a generated file into an imports section and body blocks,
//! rendered in order with blank lines between them.

use crate::{CodeBuilder, Import};

/// A structured representation of a TypeScript source file.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("class-transformer").named("Expose"))
///     .add(class_body)
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<String>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body block.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, block: impl Into<String>) -> Self {
        self.body.push(block.into());
        self
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            builder = import.render(builder);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, block) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for line in block.trim_end().lines() {
                builder.push_line(line);
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}
