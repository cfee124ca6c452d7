//! TypeScript import builder.

use crate::CodeBuilder;

/// Builder for TypeScript import statements.
///
/// Module specifiers are rendered with single quotes, matching the
/// convention of the Nest ecosystem the generated files land in.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let type_kw = if self.type_only { "type " } else { "" };

        let import_str = match (&self.default, self.named.is_empty()) {
            (Some(def), true) => {
                format!("import {}{} from '{}';", type_kw, def, self.from)
            }
            (Some(def), false) => {
                format!(
                    "import {}{}, {{ {} }} from '{}';",
                    type_kw,
                    def,
                    self.named.join(", "),
                    self.from
                )
            }
            (None, false) => {
                format!(
                    "import {}{{ {} }} from '{}';",
                    type_kw,
                    self.named.join(", "),
                    self.from
                )
            }
            (None, true) => {
                format!("import '{}';", self.from)
            }
        };

        builder.line(&import_str)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
