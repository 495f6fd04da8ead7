//! # guistyle-files - Style Files for guistyle
//!
//! Reads and writes style sheets stored outside the program, and applies
//! them to any [`StyleSink`](guistyle::StyleSink):
//!
//! | Format      | Extension        | Module     |
//! |-------------|------------------|------------|
//! | Text        | `.rgs`           | [`text`]   |
//! | Binary      | `.rgs`           | [`binary`] |
//! | YAML        | `.yaml`, `.yml`  | [`yaml`]   |
//!
//! Text and binary share an extension; binary files are told apart by their
//! `"rGS "` signature.
//!
//! ## Loading a File
//!
//! ```rust,no_run
//! use guistyle::{baseline, StyleContext};
//!
//! let mut ctx = StyleContext::with_defaults(baseline::toolkit_baseline());
//! let written = guistyle_files::load_style_file(&mut ctx, "styles/dark.rgs")?;
//! println!("{} properties loaded", written);
//! # Ok::<(), guistyle_files::StyleFileError>(())
//! ```
//!
//! Loading a file is the same partial update as loading an in-memory sheet:
//! keys the file does not list keep their current values.
//!
//! ## Named Sheets
//!
//! [`SheetRegistry`] resolves sheet names across directories and inline
//! content. See the [`registry`] module.

pub mod binary;
mod error;
mod format;
pub mod registry;
pub mod text;
pub mod yaml;

use std::path::Path;

use guistyle::{apply_sheet, StyleSink};

pub use error::{Result, StyleFileError};
pub use format::{read_style_file, StyleFormat, STYLE_EXTENSIONS};
pub use registry::{SheetEntry, SheetRegistry, SheetRegistryConfig};
pub use text::{FontRef, TextStyle};

/// Reads a style file and applies it to `sink`.
///
/// The format is detected from the extension and, for `.rgs`, the binary
/// signature. Returns the number of records written. Nothing is written if
/// the file fails to parse.
pub fn load_style_file<S, P>(sink: &mut S, path: P) -> Result<usize>
where
    S: StyleSink + ?Sized,
    P: AsRef<Path>,
{
    let sheet = read_style_file(path)?;
    Ok(apply_sheet(sink, &sheet))
}
