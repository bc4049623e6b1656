// Demo configuration, read from an optional TOML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// File the demo binaries look for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gof.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Bold section headers in demo output.
    pub color: bool,
    /// Names the factory demo asks each family for.
    pub shapes: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            shapes: vec!["SQUARE".to_string(), "RECTANGLE".to_string()],
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults when the file does not exist; any other problem is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::from_file(path) {
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DemoConfig::from_toml_str("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
color = false
shapes = ["square", "triangle"]
"#,
        )
        .unwrap();

        assert!(!config.color);
        assert_eq!(config.shapes, ["square", "triangle"]);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DemoConfig::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(DemoConfig::from_toml_str("color = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        assert_eq!(DemoConfig::load_or_default(&path).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_missing_file_is_error_for_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        assert!(matches!(DemoConfig::from_file(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let file = config_file("log_level = \"debug\"\n");
        let config = DemoConfig::load_or_default(file.path()).unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.color);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let file = config_file("shapes = [\n");

        match DemoConfig::load_or_default(file.path()) {
            Err(Error::Config { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }
}
