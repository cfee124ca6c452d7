//! Loading of the model description file.

use std::path::Path;
use std::str::FromStr;

use crate::{Error, Model, Result};

/// A loaded model description: the ordered model list and the file
/// name it came from.
#[derive(Debug)]
pub struct ModelFile {
    models: Vec<Model>,
    filename: String,
}

impl ModelFile {
    /// Load and parse a model description file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::parse(&src, &path.display().to_string())
    }

    fn parse(src: &str, filename: &str) -> Result<Self> {
        let models: Vec<Model> =
            serde_json::from_str(src).map_err(|source| Error::parse(source, src, filename))?;
        check_names(&models, src, filename)?;
        Ok(Self {
            models,
            filename: filename.to_string(),
        })
    }

    /// The ordered model list.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Consume the file, yielding the model list.
    pub fn into_models(self) -> Vec<Model> {
        self.models
    }

    /// The file name the description was loaded from.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl FromStr for ModelFile {
    type Err = Box<Error>;

    fn from_str(src: &str) -> Result<Self> {
        Self::parse(src, "models.json")
    }
}

/// Every reachable descriptor must carry a non-empty name.
fn check_names(models: &[Model], src: &str, filename: &str) -> Result<()> {
    for model in models {
        if model.name.is_empty() {
            return Err(Error::validation(
                "model name must not be empty",
                src,
                filename,
            ));
        }
        check_names(&model.properties, src, filename)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Export;

    #[test]
    fn test_from_str_parses_model_list() {
        let file = ModelFile::from_str(
            r#"[
                { "name": "User", "export": "interface", "type": "User", "base": "User" },
                { "name": "Status", "export": "enum", "type": "Status", "base": "Status" }
            ]"#,
        )
        .unwrap();

        assert_eq!(file.models().len(), 2);
        assert_eq!(file.models()[0].name, "User");
        assert_eq!(file.models()[1].export, Export::Enum);
    }

    #[test]
    fn test_from_str_rejects_malformed_json() {
        let err = ModelFile::from_str("[ { \"name\": ").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_str_rejects_unknown_export_kind() {
        let err = ModelFile::from_str(
            r#"[ { "name": "User", "export": "struct", "type": "User", "base": "User" } ]"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_str_rejects_empty_name() {
        let err = ModelFile::from_str(
            r#"[ { "name": "", "export": "interface", "type": "User", "base": "User" } ]"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_str_rejects_empty_nested_name() {
        let err = ModelFile::from_str(
            r#"[ {
                "name": "User", "export": "interface", "type": "User", "base": "User",
                "properties": [
                    { "name": "", "export": "reference", "type": "Address", "base": "Address" }
                ]
            } ]"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let err = ModelFile::open("/nonexistent/models.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
