use crate::error::{ConvertError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One diary entry, split into its body text and the remaining metadata.
///
/// Built from a borrowed JSON value; the source record is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    pub text: String,
    /// Every key of the source record except `text`
    pub metadata: Map<String, Value>,
}

impl EntryRecord {
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(ConvertError::NotAnObject)?;

        let text = match object.get("text") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ConvertError::UnexpectedType {
                    field: "text",
                    expected: "a string",
                })
            }
            None => return Err(ConvertError::MissingField("text")),
        };

        let metadata: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| key.as_str() != "text")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self { text, metadata })
    }

    /// Raw `creationDate` string
    pub fn creation_date(&self) -> Result<&str> {
        match self.metadata.get("creationDate") {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ConvertError::UnexpectedType {
                field: "creationDate",
                expected: "a string",
            }),
            None => Err(ConvertError::MissingField("creationDate")),
        }
    }

    /// Raw `modifiedDate` string, if present and textual
    pub fn modified_date(&self) -> Option<&str> {
        self.metadata.get("modifiedDate").and_then(Value::as_str)
    }

    /// Photos that can be resolved to a file path. Malformed items are skipped.
    pub fn photos(&self) -> Vec<PhotoRef> {
        let Some(Value::Array(items)) = self.metadata.get("photos") else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match PhotoRef::deserialize(item) {
                Ok(photo) => Some(photo),
                Err(e) => {
                    tracing::debug!("ignoring photo metadata {}: {}", item, e);
                    None
                }
            })
            .collect()
    }
}

/// Photo metadata needed to locate the exported image file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoRef {
    pub identifier: String,
    pub md5: String,
    #[serde(rename = "type", default)]
    pub file_type: Option<String>,
}

impl PhotoRef {
    /// Relative path of the photo inside the import bundle
    pub fn relative_path(&self) -> String {
        format!(
            "photos/{}.{}",
            self.md5,
            self.file_type.as_deref().unwrap_or("jpeg")
        )
    }
}
