//! DTO emitter: renders each model and writes the result to disk.

use std::path::Path;

use eyre::Result;
use nestgen_core::{Indent, OutputFile, format_code, format_indentation};
use nestgen_model::{Export, Model};

use crate::{
    rename::{dto_name, rename_model, rename_properties},
    templates::{TemplateKind, Templates},
};

/// Model name that short-circuits to the Mongo object-id alias.
pub const MONGO_OBJECT_ID: &str = "MongoObjectId";

/// Model name that short-circuits to the ISO date alias.
pub const ISO_DATE_STRING: &str = "IsoDateString";

/// Literal file contents for the object-id sentinel, written verbatim.
const MONGO_OBJECT_ID_ALIAS: &str =
    "import { ObjectId } from 'mongodb';\n\nexport type MongoObjectIdDto = ObjectId;\n";

/// Literal file contents for the ISO date sentinel, written verbatim.
const ISO_DATE_STRING_ALIAS: &str = "export type IsoDateStringDto = Date;\n";

/// Emission policy. Which policy is active is a caller choice, never a
/// runtime decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitPolicy {
    /// Rewrite referenced type names with the `Dto` suffix, rename
    /// nested properties recursively, handle the sentinel aliases, and
    /// write `<Name>Dto.ts` files.
    #[default]
    Suffixed,
    /// Render only `all-of` and `interface` models, as-is, into
    /// `<name>.dto.ts` files.
    Plain,
}

/// A rendered file for preview output.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Result of a generation pass.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// File names written, in emission order.
    pub written: Vec<String>,
}

/// DTO generator over an ordered model list.
///
/// Models are processed strictly sequentially; each iteration builds
/// fresh data and the first render or write failure aborts the pass.
/// There is no retry and no per-model isolation.
pub struct DtoGenerator<'a> {
    models: &'a [Model],
    templates: &'a dyn Templates,
    indent: Indent,
    policy: EmitPolicy,
}

impl<'a> DtoGenerator<'a> {
    pub fn new(models: &'a [Model], templates: &'a dyn Templates) -> Self {
        Self {
            models,
            templates,
            indent: Indent::default(),
            policy: EmitPolicy::default(),
        }
    }

    /// Set the indentation for generated files.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the emission policy.
    pub fn with_policy(mut self, policy: EmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render all files without writing to disk.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();
        for model in self.models {
            if let Some((path, content)) = self.render_model(model)? {
                files.push(PreviewFile { path, content });
            }
        }
        Ok(files)
    }

    /// Generate all files into the specified output directory.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for model in self.models {
            if let Some((path, content)) = self.render_model(model)? {
                OutputFile::new(output_dir.join(&path), content).write()?;
                result.written.push(path);
            }
        }
        Ok(result)
    }

    /// Render one model to a file name and content, or `None` when the
    /// active policy skips it.
    fn render_model(&self, model: &Model) -> Result<Option<(String, String)>> {
        match self.policy {
            EmitPolicy::Suffixed => self.render_suffixed(model).map(Some),
            EmitPolicy::Plain => self.render_plain(model),
        }
    }

    fn render_suffixed(&self, model: &Model) -> Result<(String, String)> {
        let dto = dto_name(&model.name);
        let file_name = format!("{dto}.ts");

        // Well-known scalar aliases bypass the template set entirely.
        if model.name == MONGO_OBJECT_ID {
            return Ok((file_name, MONGO_OBJECT_ID_ALIAS.to_string()));
        }
        if model.name == ISO_DATE_STRING {
            return Ok((file_name, ISO_DATE_STRING_ALIAS.to_string()));
        }

        let mut context = rename_model(model);
        context.name = dto;
        context.imports = model.imports.iter().map(|name| dto_name(name)).collect();
        context.properties = rename_properties(&model.properties);

        let raw = self.templates.render(TemplateKind::Dto, &context)?;
        let content = format_indentation(&format_code(&raw), self.indent);
        Ok((file_name, content))
    }

    fn render_plain(&self, model: &Model) -> Result<Option<(String, String)>> {
        if !matches!(model.export, Export::AllOf | Export::Interface) {
            return Ok(None);
        }
        let raw = self.templates.render(TemplateKind::Dto, model)?;
        let content = format_indentation(&format_code(&raw), self.indent);
        Ok(Some((format!("{}.dto.ts", model.name), content)))
    }
}
