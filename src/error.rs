use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteCopyError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read source file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan directory {}: {message}", .path.display())]
    Scan { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for SiteCopyError {
    fn user_message(&self) -> String {
        match self {
            SiteCopyError::SourceRead { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            SiteCopyError::OutputWrite { path, source } => {
                format!("Could not write {}: {}", path.display(), source)
            }
            SiteCopyError::Scan { path, message } => {
                format!("Could not list {}: {}", path.display(), message)
            }
            SiteCopyError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            SiteCopyError::SourceRead { .. } => Some(
                "Source files must be readable UTF-8 text. Check file permissions and encoding, or run from the site root with --root.".to_string()
            ),
            SiteCopyError::OutputWrite { .. } => Some(
                "Ensure the output directory is writable, or choose another one with --output.".to_string()
            ),
            SiteCopyError::Scan { .. } => Some(
                "Ensure the source directory is readable by the current user.".to_string()
            ),
            SiteCopyError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for SiteCopyError {
    fn from(error: toml::de::Error) -> Self {
        SiteCopyError::Config {
            message: error.to_string(),
        }
    }
}

impl From<walkdir::Error> for SiteCopyError {
    fn from(error: walkdir::Error) -> Self {
        let path = error
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();

        SiteCopyError::Scan {
            path,
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteCopyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_user_friendly_messages() {
        let error = SiteCopyError::SourceRead {
            path: PathBuf::from("client/index.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.user_message().contains("client/index.html"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_error_display() {
        let error = SiteCopyError::Config {
            message: "bad value".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_io_error_has_no_suggestion() {
        let error: SiteCopyError = io::Error::new(io::ErrorKind::Other, "disk gone").into();
        assert!(error.suggestion().is_none());
        assert_eq!(error.user_message(), "IO operation failed: disk gone");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let error: SiteCopyError = parse_error.into();
        assert!(matches!(error, SiteCopyError::Config { .. }));
    }
}
