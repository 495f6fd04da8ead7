//! Named style sheets from directories and inline content.
//!
//! A [`SheetRegistry`] maps names to sheets so an application can switch
//! styles by name ("dark", "themes/terminal") without knowing where each one
//! lives.
//!
//! ## Name Resolution
//!
//! Files are named by their path relative to the registered directory, with
//! or without extension:
//!
//! | File                       | Names                                   |
//! |----------------------------|-----------------------------------------|
//! | `styles/dark.rgs`          | `"dark"`, `"dark.rgs"`                  |
//! | `styles/themes/candy.yaml` | `"themes/candy"`, `"themes/candy.yaml"` |
//!
//! ## Priority
//!
//! - Inline sheets ([`add_sheet`](SheetRegistry::add_sheet),
//!   [`add_content`](SheetRegistry::add_content)) shadow files.
//! - Between directories, the first one registered wins.
//! - Within a directory, `.rgs` beats `.yaml`, which beats `.yml`, for
//!   extensionless names. Explicit names always reach their own file.
//!
//! ## Reloading
//!
//! File entries store the path only. Every [`get`](SheetRegistry::get)
//! re-reads the file, so edits show up on the next load.
//! [`refresh`](SheetRegistry::refresh) re-walks the directories to pick up
//! added or removed files.
//!
//! ```rust,no_run
//! use guistyle::{baseline, StyleContext};
//! use guistyle_files::SheetRegistry;
//!
//! let mut registry = SheetRegistry::new();
//! registry.add_dir("./styles")?;
//!
//! let mut ctx = StyleContext::with_defaults(baseline::toolkit_baseline());
//! registry.load("dark", &mut ctx)?;
//! # Ok::<(), guistyle_files::StyleFileError>(())
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use guistyle::{apply_sheet, StyleSheet, StyleSink};

use crate::error::{Result, StyleFileError};
use crate::format::{read_style_file, StyleFormat, STYLE_EXTENSIONS};

/// Registry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRegistryConfig {
    /// Recognized extensions, highest priority first.
    pub extensions: &'static [&'static str],
}

impl Default for SheetRegistryConfig {
    fn default() -> Self {
        Self {
            extensions: STYLE_EXTENSIONS,
        }
    }
}

/// Where a registered sheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEntry {
    /// Re-read from disk on every access.
    File(PathBuf),
    /// Held in memory.
    Inline(StyleSheet),
}

/// Name → sheet registry over directories and inline sheets.
#[derive(Debug, Clone)]
pub struct SheetRegistry {
    config: SheetRegistryConfig,
    dirs: Vec<PathBuf>,
    entries: HashMap<String, SheetEntry>,
    initialized: bool,
}

impl Default for SheetRegistry {
    fn default() -> Self {
        Self::with_config(SheetRegistryConfig::default())
    }
}

impl SheetRegistry {
    /// Creates an empty registry recognizing `.rgs`, `.yaml` and `.yml`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SheetRegistryConfig) -> Self {
        Self {
            config,
            dirs: Vec::new(),
            entries: HashMap::new(),
            initialized: false,
        }
    }

    /// Registers a directory to search.
    ///
    /// The directory is walked lazily, on the next lookup or
    /// [`refresh`](Self::refresh).
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(StyleFileError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        self.dirs.push(path.to_path_buf());
        self.initialized = false;
        Ok(())
    }

    /// Registers an in-memory sheet. It shadows any file of the same name.
    pub fn add_sheet(&mut self, name: impl Into<String>, sheet: StyleSheet) {
        self.entries.insert(name.into(), SheetEntry::Inline(sheet));
    }

    /// Parses inline file content and registers it.
    ///
    /// `name_with_ext` picks the format, like a file name would. The sheet is
    /// reachable with and without the extension.
    pub fn add_content(&mut self, name_with_ext: &str, content: &[u8]) -> Result<()> {
        let format = StyleFormat::detect(Path::new(name_with_ext), content).ok_or_else(|| {
            StyleFileError::UnsupportedFormat {
                path: PathBuf::from(name_with_ext),
            }
        })?;
        let name = strip_extension(name_with_ext, self.config.extensions);
        let sheet = format.parse(&name, content)?;

        self.add_sheet(name_with_ext, sheet.clone());
        self.add_sheet(name, sheet);
        Ok(())
    }

    /// Re-walks every registered directory.
    ///
    /// Inline entries are kept. Directories are processed in registration
    /// order; a name already claimed by an earlier directory is skipped.
    pub fn refresh(&mut self) -> Result<()> {
        self.entries
            .retain(|_, entry| matches!(entry, SheetEntry::Inline(_)));

        // base name -> directory that claimed it
        let mut claimed: HashMap<String, usize> = HashMap::new();

        for (index, dir) in self.dirs.iter().enumerate() {
            let mut files = walk_dir(dir, self.config.extensions)?;
            files.sort_by_key(|file| extension_priority(&file.name_with_ext, self.config.extensions));

            for file in files {
                match claimed.get(&file.name) {
                    Some(owner) if *owner != index => {
                        log::warn!(
                            "style sheet '{}' in {} shadowed by {}",
                            file.name_with_ext,
                            dir.display(),
                            self.dirs[*owner].display()
                        );
                        continue;
                    }
                    Some(_) => {}
                    None => {
                        claimed.insert(file.name.clone(), index);
                        self.entries
                            .entry(file.name.clone())
                            .or_insert_with(|| SheetEntry::File(file.path.clone()));
                    }
                }
                self.entries
                    .entry(file.name_with_ext)
                    .or_insert(SheetEntry::File(file.path));
            }
        }

        log::debug!(
            "style registry refreshed: {} dirs, {} names",
            self.dirs.len(),
            self.entries.len()
        );
        self.initialized = true;
        Ok(())
    }

    fn ensure_initialized(&mut self) -> Result<()> {
        if !self.initialized && !self.dirs.is_empty() {
            self.refresh()?;
        }
        Ok(())
    }

    /// Returns the sheet registered under `name`.
    ///
    /// File entries are read and parsed on every call. The returned sheet is
    /// named after the registry name, without extension, whether it came from
    /// a file or was registered inline.
    pub fn get(&mut self, name: &str) -> Result<StyleSheet> {
        self.ensure_initialized()?;

        let sheet = match self.entries.get(name) {
            Some(SheetEntry::Inline(sheet)) => sheet.clone(),
            Some(SheetEntry::File(path)) => read_style_file(path)?,
            None => {
                return Err(StyleFileError::NotFound {
                    name: name.to_string(),
                })
            }
        };
        Ok(sheet.with_name(strip_extension(name, self.config.extensions)))
    }

    /// Looks up `name` and applies it to `sink`. Returns the record count.
    pub fn load<S: StyleSink + ?Sized>(&mut self, name: &str, sink: &mut S) -> Result<usize> {
        let sheet = self.get(name)?;
        Ok(apply_sheet(sink, &sheet))
    }

    /// Returns the entry for `name` without walking or reading anything.
    pub fn entry(&self, name: &str) -> Option<&SheetEntry> {
        self.entries.get(name)
    }

    pub fn contains(&mut self, name: &str) -> Result<bool> {
        self.ensure_initialized()?;
        Ok(self.entries.contains_key(name))
    }

    /// All registered names, sorted. Walks directories if needed.
    pub fn names(&mut self) -> Result<Vec<String>> {
        self.ensure_initialized()?;
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Number of names, counting `x` and `x.rgs` separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Drops every entry and directory.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirs.clear();
        self.initialized = false;
    }
}

// =============================================================================
// Name helpers
// =============================================================================

/// Index of the first extension `name` ends with; `usize::MAX` if none.
///
/// Extensions match regardless of ASCII case, as in
/// [`StyleFormat::detect`].
pub fn extension_priority(name: &str, extensions: &[&str]) -> usize {
    extensions
        .iter()
        .position(|ext| strip_suffix_ignore_case(name, ext).is_some())
        .unwrap_or(usize::MAX)
}

/// Removes a recognized extension, if `name` has one.
pub fn strip_extension(name: &str, extensions: &[&str]) -> String {
    extensions
        .iter()
        .find_map(|ext| strip_suffix_ignore_case(name, ext))
        .unwrap_or(name)
        .to_string()
}

fn strip_suffix_ignore_case<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(ext.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (stem, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(ext).then_some(stem)
}

// =============================================================================
// Directory walking
// =============================================================================

#[derive(Debug)]
struct SheetFile {
    name: String,
    name_with_ext: String,
    path: PathBuf,
}

fn walk_dir(root: &Path, extensions: &[&str]) -> Result<Vec<SheetFile>> {
    let mut files = Vec::new();
    walk_dir_recursive(root, root, extensions, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    extensions: &[&str],
    files: &mut Vec<SheetFile>,
) -> Result<()> {
    let entries = std::fs::read_dir(current).map_err(|e| StyleFileError::io(current, e))?;

    for entry in entries {
        let path = entry.map_err(|e| StyleFileError::io(current, e))?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, extensions, files)?;
        } else if let Some(file) = sheet_file(&path, root, extensions) {
            files.push(file);
        }
    }
    Ok(())
}

fn sheet_file(path: &Path, root: &Path, extensions: &[&str]) -> Option<SheetFile> {
    let relative = path.strip_prefix(root).ok()?;
    // forward slashes on every platform
    let name_with_ext = relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let name = extensions
        .iter()
        .find_map(|ext| strip_suffix_ignore_case(&name_with_ext, ext))?
        .to_string();

    Some(SheetFile {
        name,
        name_with_ext,
        path: path.to_path_buf(),
    })
}
