use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Heading inserted as the first child of every converted page
pub const DEFAULT_HEADING: &str = "#dayone";

/// Settings shared by every entry conversion in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Written to `create-email` and `edit-email` of every node
    pub email: String,
    /// Text of the fixed heading block
    pub heading: String,
}

impl ConverterConfig {
    pub fn new(email: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            heading: heading.into(),
        }
    }

    /// Merge explicit overrides (CLI flags or environment) over the config file.
    /// The email has no default; a missing one is an error.
    pub fn resolve(
        email: Option<String>,
        heading: Option<String>,
        file: FileConfig,
    ) -> Result<Self> {
        let email = email.or(file.email).context(
            "No creator email configured. Pass --email, set DAYONE2ROAM_EMAIL, or add \"email\" to the config file",
        )?;
        let heading = heading
            .or(file.heading)
            .unwrap_or_else(|| DEFAULT_HEADING.to_string());

        Ok(Self { email, heading })
    }
}

/// Optional settings stored in config.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
}

/// Default config location: `{config_dir}/dayone2roam/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dayone2roam").join("config.json"))
}

/// Load the config file, returning defaults if it does not exist
pub fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_file_config(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"email": "me@example.com"}"#).unwrap();

        let config = load_file_config(&path).unwrap();
        assert_eq!(config.email.as_deref(), Some("me@example.com"));
        assert_eq!(config.heading, None);
    }

    #[test]
    fn test_load_invalid_config_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_file_config(&path).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let file = FileConfig {
            email: Some("file@example.com".to_string()),
            heading: Some("#journal".to_string()),
        };

        let config = ConverterConfig::resolve(Some("cli@example.com".to_string()), None, file).unwrap();
        assert_eq!(config, ConverterConfig::new("cli@example.com", "#journal"));
    }

    #[test]
    fn test_resolve_defaults_heading() {
        let config =
            ConverterConfig::resolve(Some("me@example.com".to_string()), None, FileConfig::default())
                .unwrap();
        assert_eq!(config.heading, DEFAULT_HEADING);
    }

    #[test]
    fn test_resolve_requires_email() {
        assert!(ConverterConfig::resolve(None, None, FileConfig::default()).is_err());
    }
}
