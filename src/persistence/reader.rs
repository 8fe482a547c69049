use crate::error::{ConvertError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Export schema version this reader understands
pub const SUPPORTED_VERSION: &str = "1.0";

/// A validated Day One export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub metadata: Map<String, Value>,
    pub entries: Vec<Value>,
}

impl ExportDocument {
    /// Validate raw JSON text: exactly `metadata` and `entries`, version "1.0"
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ConvertError::Format(format!("not valid JSON: {}", e)))?;

        let Value::Object(mut top) = value else {
            return Err(ConvertError::Format("top level is not an object".to_string()));
        };

        let mut keys: Vec<&str> = top.keys().map(String::as_str).collect();
        keys.sort_unstable();
        if keys != ["entries", "metadata"] {
            return Err(ConvertError::Format(format!(
                "expected top-level keys [metadata, entries], found [{}]",
                keys.join(", ")
            )));
        }

        let metadata = match top.remove("metadata") {
            Some(Value::Object(map)) => map,
            _ => return Err(ConvertError::Format("`metadata` is not an object".to_string())),
        };

        match metadata.get("version").and_then(Value::as_str) {
            Some(SUPPORTED_VERSION) => {}
            Some(other) => {
                return Err(ConvertError::Format(format!(
                    "unsupported export version {}",
                    other
                )))
            }
            None => return Err(ConvertError::Format("missing metadata.version".to_string())),
        }

        let entries = match top.remove("entries") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ConvertError::Format("`entries` is not an array".to_string())),
        };

        Ok(Self { metadata, entries })
    }

    pub fn version(&self) -> Option<&str> {
        self.metadata.get("version").and_then(Value::as_str)
    }
}

/// Reads a Day One JSON export from disk
#[derive(Debug)]
pub struct DayOneReader {
    path: PathBuf,
    document: Option<ExportDocument>,
}

impl DayOneReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the export. Loading again replaces the previous document.
    pub fn load(&mut self) -> Result<&mut Self> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ConvertError::Io {
            path: self.path.clone(),
            source,
        })?;

        let document = ExportDocument::parse(&content)?;
        tracing::info!(
            "loaded {} entries from {}",
            document.entries.len(),
            self.path.display()
        );
        self.document = Some(document);
        Ok(self)
    }

    pub fn document(&self) -> Result<&ExportDocument> {
        self.document.as_ref().ok_or(ConvertError::State)
    }

    /// Entries in export order
    pub fn entries(&self) -> Result<&[Value]> {
        Ok(&self.document()?.entries)
    }
}
