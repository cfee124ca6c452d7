//! Model descriptor definitions.

use serde::{Deserialize, Serialize};

/// Kind tag classifying a model's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Export {
    Reference,
    Generic,
    Enum,
    Array,
    Dictionary,
    Interface,
    OneOf,
    AnyOf,
    AllOf,
}

impl Export {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Export::Reference => "reference",
            Export::Generic => "generic",
            Export::Enum => "enum",
            Export::Array => "array",
            Export::Dictionary => "dictionary",
            Export::Interface => "interface",
            Export::OneOf => "one-of",
            Export::AnyOf => "any-of",
            Export::AllOf => "all-of",
        }
    }
}

/// One enum member with its literal value text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    /// Member identifier.
    pub name: String,
    /// Literal value text, quoted as it should appear in source.
    pub value: String,
    /// Description for doc comments.
    #[serde(default)]
    pub description: Option<String>,
}

/// Description of one API schema type.
///
/// A model may reference other models by name via `imports` and may
/// contain nested models via `properties`, forming a tree. The
/// traversal performed by code generation assumes that tree is acyclic;
/// no cycle detection is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Identifier of the schema type.
    pub name: String,
    /// Kind tag classifying the model's shape.
    pub export: Export,
    /// Resolved type-name string.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Resolved base type-name string.
    pub base: String,
    /// Generic template parameter, if any.
    #[serde(default)]
    pub template: Option<String>,
    /// Description for doc comments.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_definition: bool,
    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_nullable: bool,
    /// Referenced type names, in declaration order.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Enum members, populated for `enum` kinds.
    #[serde(default, rename = "enum")]
    pub enum_members: Vec<EnumMember>,
    /// Nested property descriptors, each itself a full model.
    #[serde(default)]
    pub properties: Vec<Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_as_str() {
        assert_eq!(Export::Interface.as_str(), "interface");
        assert_eq!(Export::AllOf.as_str(), "all-of");
        assert_eq!(Export::OneOf.as_str(), "one-of");
        assert_eq!(Export::Dictionary.as_str(), "dictionary");
    }

    #[test]
    fn test_model_from_json() {
        let json = r#"{
            "name": "User",
            "export": "interface",
            "type": "User",
            "base": "User",
            "description": "A user account.",
            "isRequired": true,
            "imports": ["Address"],
            "properties": [
                {
                    "name": "address",
                    "export": "reference",
                    "type": "Address",
                    "base": "Address",
                    "imports": ["Address"]
                }
            ]
        }"#;

        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model.name, "User");
        assert_eq!(model.export, Export::Interface);
        assert_eq!(model.type_name, "User");
        assert_eq!(model.description.as_deref(), Some("A user account."));
        assert!(model.is_required);
        assert!(!model.is_nullable);
        assert_eq!(model.imports, vec!["Address"]);
        assert_eq!(model.properties.len(), 1);
        assert_eq!(model.properties[0].export, Export::Reference);
    }

    #[test]
    fn test_export_kebab_case_round() {
        let kind: Export = serde_json::from_str(r#""all-of""#).unwrap();
        assert_eq!(kind, Export::AllOf);
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""all-of""#);
    }

    #[test]
    fn test_enum_members_from_json() {
        let json = r#"{
            "name": "Status",
            "export": "enum",
            "type": "Status",
            "base": "Status",
            "enum": [
                { "name": "ACTIVE", "value": "'active'" },
                { "name": "DISABLED", "value": "'disabled'" }
            ]
        }"#;

        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model.enum_members.len(), 2);
        assert_eq!(model.enum_members[0].name, "ACTIVE");
        assert_eq!(model.enum_members[1].value, "'disabled'");
    }
}
