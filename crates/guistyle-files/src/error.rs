//! Error type for reading and writing style files.

use std::path::{Path, PathBuf};

use guistyle::{ControlId, StyleKey};
use thiserror::Error;

/// Errors raised while reading, parsing or resolving style files.
#[derive(Debug, Error)]
pub enum StyleFileError {
    /// The file or directory could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text or YAML sheet is malformed. `line` is 1-based, 0 when unknown.
    #[error("{}line {line}: {message}", location(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        line: usize,
        message: String,
    },

    /// A control name that is neither a known control nor a number.
    #[error("{}unknown control '{name}'", location(.path.as_deref()))]
    UnknownControl { path: Option<PathBuf>, name: String },

    /// A property name the control does not define.
    #[error("{}unknown property '{name}' for control {control}", location(.path.as_deref()))]
    UnknownProperty {
        path: Option<PathBuf>,
        control: ControlId,
        name: String,
    },

    /// A value that is not a number, color or alignment word.
    #[error("{}invalid value '{value}' for {key}", location(.path.as_deref()))]
    InvalidValue {
        path: Option<PathBuf>,
        key: StyleKey,
        value: String,
    },

    /// The data does not start with the binary style signature.
    #[error("not a binary style file (bad signature)")]
    InvalidSignature,

    /// The binary data ends before the records it announces.
    #[error("binary style data truncated: need {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    /// The file's format could not be determined.
    #[error("unsupported style file: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// No sheet is registered under the name.
    #[error("style sheet not found: '{name}'")]
    NotFound { name: String },

    /// A registered directory does not exist.
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!("{}: ", p.display()))
        .unwrap_or_default()
}

impl StyleFileError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        StyleFileError::Parse {
            path: None,
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StyleFileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attaches a file path to a content error that has none.
    pub fn with_path(mut self, file: &Path) -> Self {
        match &mut self {
            StyleFileError::Parse { path, .. }
            | StyleFileError::UnknownControl { path, .. }
            | StyleFileError::UnknownProperty { path, .. }
            | StyleFileError::InvalidValue { path, .. } => {
                if path.is_none() {
                    *path = Some(file.to_path_buf());
                }
            }
            _ => {}
        }
        self
    }

    /// The file a content error came from, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StyleFileError::Io { path, .. }
            | StyleFileError::UnsupportedFormat { path }
            | StyleFileError::DirectoryNotFound { path } => Some(path.as_path()),
            StyleFileError::Parse { path, .. }
            | StyleFileError::UnknownControl { path, .. }
            | StyleFileError::UnknownProperty { path, .. }
            | StyleFileError::InvalidValue { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

/// Result type for style file operations.
pub type Result<T> = std::result::Result<T, StyleFileError>;

#[cfg(test)]
mod tests {
    use super::*;
    use guistyle::PropertyId;

    #[test]
    fn test_parse_error_display_with_and_without_path() {
        let err = StyleFileError::parse(3, "unexpected 'x'");
        assert_eq!(err.to_string(), "line 3: unexpected 'x'");

        let err = err.with_path(Path::new("styles/dark.rgs"));
        assert_eq!(err.to_string(), "styles/dark.rgs: line 3: unexpected 'x'");
    }

    #[test]
    fn test_with_path_keeps_existing_path() {
        let err = StyleFileError::Parse {
            path: Some(PathBuf::from("a.rgs")),
            line: 1,
            message: "bad".into(),
        };
        let err = err.with_path(Path::new("b.rgs"));
        assert!(err.to_string().starts_with("a.rgs"));
    }

    #[test]
    fn test_invalid_value_names_the_key() {
        let err = StyleFileError::InvalidValue {
            path: None,
            key: StyleKey::new(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT),
            value: "sideways".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'sideways' for LISTVIEW_TEXT_ALIGNMENT"
        );
    }

    #[test]
    fn test_with_path_covers_content_errors() {
        let err = StyleFileError::UnknownControl {
            path: None,
            name: "WIDGET".into(),
        }
        .with_path(Path::new("styles/theme.yaml"));
        assert_eq!(err.to_string(), "styles/theme.yaml: unknown control 'WIDGET'");
        assert_eq!(err.path(), Some(Path::new("styles/theme.yaml")));

        let err = StyleFileError::UnknownProperty {
            path: None,
            control: ControlId::BUTTON,
            name: "WIDTH".into(),
        }
        .with_path(Path::new("b.yaml"));
        assert!(err.to_string().starts_with("b.yaml: unknown property 'WIDTH'"));
    }

    #[test]
    fn test_with_path_ignores_errors_without_file_context() {
        let err = StyleFileError::InvalidSignature.with_path(Path::new("a.rgs"));
        assert!(matches!(err, StyleFileError::InvalidSignature));
        assert_eq!(err.path(), None);
    }
}
