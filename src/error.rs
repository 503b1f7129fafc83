use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a catalog file. A lookup that finds nothing is not
/// an error and is reported as `None` by the catalog itself.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON catalog at line {line}, column {col}: {message}")]
    Json {
        line: usize,
        col: usize,
        message: String,
    },

    /// `message` carries toml's own rendering, which includes the line, column
    /// and the offending source line.
    #[error("Failed to parse TOML catalog: {message}")]
    Toml { message: String },

    #[error("Unsupported catalog format '{extension}' (expected json or toml)")]
    UnsupportedFormat { extension: String },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Toml {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_keeps_position() {
        let err: CatalogError = serde_json::from_str::<serde_json::Value>("{\n  \"books\": ]")
            .unwrap_err()
            .into();
        match &err {
            CatalogError::Json { line, .. } => assert_eq!(*line, 2),
            other => panic!("expected Json error, got {other:?}"),
        }
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_toml_error_keeps_position() {
        let err: CatalogError = toml::from_str::<toml::Value>("a = 1\nb = \n")
            .unwrap_err()
            .into();
        let display = err.to_string();
        assert!(display.contains("line 2"), "got: {display}");
    }

    #[test]
    fn test_io_error_display_names_path() {
        let err = CatalogError::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let display = err.to_string();
        assert!(display.contains("missing.toml"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = CatalogError::UnsupportedFormat {
            extension: "yaml".to_string(),
        };
        assert!(err.to_string().contains("'yaml'"));
    }
}
