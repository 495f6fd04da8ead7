//! # guistyle - Style Registry for Immediate-Mode GUI Controls
//!
//! `guistyle` keeps the style state an immediate-mode GUI reads while it
//! draws: colors, borders, padding and alignment for each control, addressed
//! by `(control id, property id)` and stored as 32-bit values.
//!
//! Widget styles are written as data (a [`StyleSheet`] of override records)
//! and merged into a [`StyleContext`] at startup. Renderers then read the
//! context on every draw call.
//!
//! ## Core Concepts
//!
//! - [`StyleContext`]: the registry; mutable overrides over immutable defaults
//! - [`StyleSheet`]: an ordered list of [`StyleProperty`] overrides
//! - [`StyleLoader`]: bulk-loads a sheet, then runs an optional setup step
//! - [`StyleTable`]: an immutable key/value table (defaults, snapshots)
//! - [`baseline::toolkit_baseline`]: the toolkit's default style
//! - [`listview`]: the built-in ListView style
//! - [`global`]: an optional process-wide registry behind a lock
//!
//! ## Quick Start
//!
//! ```rust
//! use guistyle::{baseline, listview, ControlId, PropertyId, StyleContext};
//!
//! // Baseline first
//! let mut ctx = StyleContext::with_defaults(baseline::toolkit_baseline());
//!
//! // Then widget styles, before anything draws
//! listview::load_style_listview(&mut ctx);
//!
//! // Listed properties read back exactly
//! assert_eq!(ctx.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL), 0xffffffff);
//! // Everything else keeps its baseline value
//! assert_eq!(ctx.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), 2);
//! ```
//!
//! ## Partial Updates
//!
//! Loading a sheet never replaces the registry. Each record is written in
//! order; keys the sheet does not mention keep the value they had before.
//! Loading the same sheet twice leaves the same state as loading it once.
//!
//! ## Writing Your Own Sheets
//!
//! ```rust
//! use guistyle::{ControlId, PropertyId, Rgba, StyleContext, StyleSheet, TextAlignment};
//!
//! let sheet = StyleSheet::new("Sidebar")
//!     .set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, Rgba::opaque(230, 230, 230).packed())
//!     .set(ControlId::LABEL, PropertyId::TEXT_ALIGNMENT, TextAlignment::Right.into());
//!
//! let mut ctx = StyleContext::new();
//! assert_eq!(ctx.apply(&sheet), 2);
//! ```
//!
//! Sheets stored in files (text, binary and YAML) are handled by the
//! `guistyle-files` crate.

pub mod baseline;
mod color;
mod context;
pub mod global;
pub mod ids;
pub mod listview;
mod loader;
mod record;
mod sheet;
mod table;

pub use color::{ColorParseError, Rgba};
pub use context::{StyleContext, StyleSink, StyleSource, DEFAULT_SENTINEL};
pub use ids::{
    ControlId, PropertyId, ScrollbarSide, TextAlignment, VerticalAlignment, WrapMode,
};
pub use listview::load_style_listview;
pub use loader::{apply_records, apply_sheet, SetupFn, StyleLoader};
pub use record::{StyleKey, StyleProperty};
pub use sheet::StyleSheet;
pub use table::StyleTable;
