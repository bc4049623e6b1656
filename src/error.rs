use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by this crate.
///
/// Shape lookups never return these directly: the factories turn
/// [`Error::UnknownShape`] into `None`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown shape type: '{0}' (expected SQUARE or RECTANGLE)")]
    UnknownShape(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

impl Error {
    pub fn unknown_shape(input: impl Into<String>) -> Self {
        Self::UnknownShape(input.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_message() {
        let err = Error::unknown_shape("TRIANGLE");
        assert_eq!(
            err.to_string(),
            "unknown shape type: 'TRIANGLE' (expected SQUARE or RECTANGLE)"
        );
    }

    #[test]
    fn test_config_error_keeps_source() {
        let source = toml::from_str::<toml::Value>("color = ").unwrap_err();
        let err = Error::Config {
            path: PathBuf::from("gof.toml"),
            source,
        };

        assert!(err.to_string().starts_with("invalid config file gof.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
