//! Template set abstraction and the builtin DTO renderer.

use eyre::Result;
use nestgen_model::{Export, Model};

use crate::{CodeBuilder, CodeFile, Import};

/// Kind of template to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// A DTO source file.
    Dto,
}

/// A set of templates keyed by kind.
///
/// Rendering is synchronous; a failure for one model aborts the whole
/// generation pass.
pub trait Templates {
    /// Render the template of the given kind with a model as context.
    fn render(&self, kind: TemplateKind, model: &Model) -> Result<String>;
}

/// Builtin template set.
///
/// Renders `interface` and `all-of` models as classes decorated for
/// class-transformer, `enum` models as TypeScript enums, and every
/// other kind as a type alias. Referenced models become `import type`
/// statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl Templates for BuiltinTemplates {
    fn render(&self, kind: TemplateKind, model: &Model) -> Result<String> {
        match kind {
            TemplateKind::Dto => Ok(render_dto(model)),
        }
    }
}

fn render_dto(model: &Model) -> String {
    match model.export {
        Export::Enum => render_enum(model),
        Export::Interface | Export::AllOf => render_class(model),
        _ => render_alias(model),
    }
}

fn render_class(model: &Model) -> String {
    let needs_type = model.properties.iter().any(|p| !p.imports.is_empty());
    let mut decorators = Import::new("class-transformer").named("Expose");
    if needs_type {
        decorators = decorators.named("Type");
    }

    let mut file = CodeFile::new().import(decorators);
    for import in &model.imports {
        file = file.import(Import::new(format!("./{import}")).named(import).type_only());
    }

    let mut builder = CodeBuilder::typescript();
    if let Some(description) = &model.description {
        builder.push_jsdoc(description);
    }
    builder.push_line(&format!("export class {} {{", model.name));
    builder.push_indent();
    for (i, property) in model.properties.iter().enumerate() {
        if i > 0 {
            builder.push_blank();
        }
        if let Some(description) = &property.description {
            builder.push_jsdoc(description);
        }
        builder.push_line("@Expose()");
        if !property.imports.is_empty() {
            builder.push_line(&format!("@Type(() => {})", property.base));
        }
        builder.push_line(&field_declaration(property));
    }
    builder.push_dedent();
    builder.push_line("}");

    file.add(builder.build()).render()
}

fn render_enum(model: &Model) -> String {
    let mut builder = CodeBuilder::typescript();
    if let Some(description) = &model.description {
        builder.push_jsdoc(description);
    }
    builder.push_line(&format!("export enum {} {{", model.name));
    builder.push_indent();
    for member in &model.enum_members {
        if let Some(description) = &member.description {
            builder.push_jsdoc(description);
        }
        builder.push_line(&format!("{} = {},", member.name, member.value));
    }
    builder.push_dedent();
    builder.push_line("}");
    builder.build()
}

fn render_alias(model: &Model) -> String {
    let mut file = CodeFile::new();
    for import in &model.imports {
        file = file.import(Import::new(format!("./{import}")).named(import).type_only());
    }

    let mut builder = CodeBuilder::typescript();
    if let Some(description) = &model.description {
        builder.push_jsdoc(description);
    }
    builder.push_line(&format!("export type {} = {};", model.name, model.type_name));
    file.add(builder.build()).render()
}

fn field_declaration(property: &Model) -> String {
    let readonly = if property.is_read_only { "readonly " } else { "" };
    let optional = if property.is_required { "" } else { "?" };
    let nullable = if property.is_nullable { " | null" } else { "" };
    format!(
        "{readonly}{}{optional}: {}{nullable};",
        property.name, property.type_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, export: Export) -> Model {
        Model {
            name: name.to_string(),
            export,
            type_name: name.to_string(),
            base: name.to_string(),
            template: None,
            description: None,
            is_definition: false,
            is_read_only: false,
            is_required: false,
            is_nullable: false,
            imports: Vec::new(),
            enum_members: Vec::new(),
            properties: Vec::new(),
        }
    }

    #[test]
    fn test_class_render_with_reference_property() {
        let mut address = model("address", Export::Reference);
        address.type_name = "AddressDto".to_string();
        address.base = "AddressDto".to_string();
        address.imports = vec!["AddressDto".to_string()];

        let mut user = model("UserDto", Export::Interface);
        user.imports = vec!["AddressDto".to_string()];
        user.properties = vec![address];

        let code = BuiltinTemplates.render(TemplateKind::Dto, &user).unwrap();
        assert!(code.contains("import { Expose, Type } from 'class-transformer';"));
        assert!(code.contains("import type { AddressDto } from './AddressDto';"));
        assert!(code.contains("export class UserDto {"));
        assert!(code.contains("@Expose()"));
        assert!(code.contains("@Type(() => AddressDto)"));
        assert!(code.contains("address?: AddressDto;"));
    }

    #[test]
    fn test_class_render_without_typed_properties_skips_type_import() {
        let mut name = model("name", Export::Generic);
        name.type_name = "string".to_string();
        name.is_required = true;

        let mut user = model("UserDto", Export::Interface);
        user.properties = vec![name];

        let code = BuiltinTemplates.render(TemplateKind::Dto, &user).unwrap();
        assert!(code.contains("import { Expose } from 'class-transformer';"));
        assert!(!code.contains("Type"));
        assert!(code.contains("name: string;"));
    }

    #[test]
    fn test_field_declaration_flags() {
        let mut property = model("createdAt", Export::Generic);
        property.type_name = "string".to_string();
        property.is_read_only = true;
        property.is_nullable = true;
        assert_eq!(
            field_declaration(&property),
            "readonly createdAt?: string | null;"
        );

        property.is_required = true;
        property.is_read_only = false;
        property.is_nullable = false;
        assert_eq!(field_declaration(&property), "createdAt: string;");
    }

    #[test]
    fn test_enum_render() {
        let mut status = model("StatusDto", Export::Enum);
        status.enum_members = vec![
            nestgen_model::EnumMember {
                name: "ACTIVE".to_string(),
                value: "'active'".to_string(),
                description: None,
            },
            nestgen_model::EnumMember {
                name: "DISABLED".to_string(),
                value: "'disabled'".to_string(),
                description: None,
            },
        ];

        let code = BuiltinTemplates.render(TemplateKind::Dto, &status).unwrap();
        assert!(code.contains("export enum StatusDto {"));
        assert!(code.contains("ACTIVE = 'active',"));
        assert!(code.contains("DISABLED = 'disabled',"));
    }

    #[test]
    fn test_alias_render_for_array() {
        let mut names = model("NamesDto", Export::Array);
        names.type_name = "Array<string>".to_string();

        let code = BuiltinTemplates.render(TemplateKind::Dto, &names).unwrap();
        assert_eq!(code, "export type NamesDto = Array<string>;\n");
    }

    #[test]
    fn test_description_becomes_jsdoc() {
        let mut user = model("UserDto", Export::Interface);
        user.description = Some("A user account.".to_string());

        let code = BuiltinTemplates.render(TemplateKind::Dto, &user).unwrap();
        assert!(code.contains("/** A user account. */"));
    }
}
