//! Style file format detection and dispatch.

use std::path::Path;

use guistyle::StyleSheet;

use crate::binary::{is_binary, parse_binary};
use crate::error::{Result, StyleFileError};
use crate::text::parse_text;
use crate::yaml::parse_yaml;

/// Supported style file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFormat {
    /// Line-oriented `.rgs` text.
    Text,
    /// `.rgs` binary with the `"rGS "` signature.
    Binary,
    /// `.yaml` / `.yml` mapping.
    Yaml,
}

/// Recognized extensions in lookup priority order.
pub const STYLE_EXTENSIONS: &[&str] = &[".rgs", ".yaml", ".yml"];

impl StyleFormat {
    /// Picks a format from the file name and, for `.rgs`, the content.
    ///
    /// Returns `None` for unrecognized extensions.
    pub fn detect(path: &Path, bytes: &[u8]) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "rgs" if is_binary(bytes) => Some(StyleFormat::Binary),
            "rgs" => Some(StyleFormat::Text),
            "yaml" | "yml" => Some(StyleFormat::Yaml),
            _ => None,
        }
    }

    /// Parses `bytes` as this format into a sheet named `name`.
    ///
    /// Text formats must be UTF-8. Font lines in text files are dropped.
    pub fn parse(self, name: &str, bytes: &[u8]) -> Result<StyleSheet> {
        match self {
            StyleFormat::Binary => parse_binary(name, bytes),
            StyleFormat::Text => parse_text(name, utf8(bytes)?).map(|style| style.sheet),
            StyleFormat::Yaml => parse_yaml(name, utf8(bytes)?),
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        StyleFileError::parse(0, format!("not valid UTF-8 at byte {}", e.valid_up_to()))
    })
}

/// Reads a style file and parses it by its detected format.
///
/// The sheet is named after the file stem.
pub fn read_style_file(path: impl AsRef<Path>) -> Result<StyleSheet> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| StyleFileError::io(path, e))?;
    let format = StyleFormat::detect(path, &bytes).ok_or_else(|| {
        StyleFileError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    })?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    format
        .parse(&name, &bytes)
        .map_err(|e| e.with_path(path))
}
