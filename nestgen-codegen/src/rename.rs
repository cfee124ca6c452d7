//! The `Dto` name transform and the recursive property renamer.
//!
//! Every transform here is pure: a new descriptor is constructed from
//! the old one's fields and the input is never mutated.

use nestgen_model::{Export, Model};

/// Suffix appended to reference type names.
const DTO_SUFFIX: &str = "Dto";

/// Append the `Dto` suffix to a type name.
///
/// Not idempotent: applying it twice yields a doubly-suffixed name.
/// Callers apply it at most once per logical name per generation pass.
pub fn dto_name(name: &str) -> String {
    format!("{name}{DTO_SUFFIX}")
}

/// Rewrite one model's `type` and `base` with the `Dto` suffix.
///
/// Generic models, arrays without imports, and enums carry no nested
/// type reference to rename and are returned unchanged. Every other
/// field is copied as-is.
pub fn rename_model(model: &Model) -> Model {
    let self_contained = matches!(model.export, Export::Generic)
        || (matches!(model.export, Export::Array) && model.imports.is_empty());
    if self_contained || matches!(model.export, Export::Enum) {
        return model.clone();
    }
    Model {
        type_name: dto_name(&model.type_name),
        base: dto_name(&model.base),
        ..model.clone()
    }
}

/// Rename a property list depth-first.
///
/// Each descriptor is rewritten via [`rename_model`] and its own nested
/// `properties` are renamed recursively, preserving length and order at
/// every depth. The recursion strictly descends into `properties`; a
/// cyclic property graph does not terminate.
pub fn rename_properties(properties: &[Model]) -> Vec<Model> {
    properties
        .iter()
        .map(|el| Model {
            properties: rename_properties(&el.properties),
            ..rename_model(el)
        })
        .collect()
}
