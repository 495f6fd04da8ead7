//! Applying style sheets to a registry.
//!
//! Loading is a partial update: each record of the sheet is written in
//! order, and every key the sheet does not mention keeps whatever value it
//! had. Records can come from a compile-time table, a file, or anything else
//! that yields [`StyleProperty`] values.
//!
//! # Two Phases
//!
//! [`StyleLoader`] runs in a fixed order:
//!
//! 1. **Bulk**: every record of the sheet, in sequence
//! 2. **Setup**: an optional function for properties the sheet leaves out
//!    on purpose (border width, padding, per-control alignment)
//!
//! The setup step always runs after the bulk step, so its writes are never
//! clobbered by the sheet.
//!
//! ```rust
//! use guistyle::{ControlId, PropertyId, StyleContext, StyleLoader, StyleSheet, StyleSink};
//!
//! fn thick_borders(sink: &mut dyn StyleSink) {
//!     sink.set(ControlId::LISTVIEW, PropertyId::BORDER_WIDTH, 2);
//! }
//!
//! let sheet = StyleSheet::new("demo")
//!     .set(ControlId::LISTVIEW, PropertyId::BORDER_WIDTH, 1)
//!     .set(ControlId::LISTVIEW, PropertyId::TEXT_PADDING, 4);
//!
//! let mut ctx = StyleContext::new();
//! let written = StyleLoader::new(sheet).with_setup(thick_borders).load(&mut ctx);
//!
//! assert_eq!(written, 2);
//! assert_eq!(ctx.get(ControlId::LISTVIEW, PropertyId::BORDER_WIDTH), 2);
//! assert_eq!(ctx.get(ControlId::LISTVIEW, PropertyId::TEXT_PADDING), 4);
//! ```

use crate::context::StyleSink;
use crate::record::StyleProperty;
use crate::sheet::StyleSheet;

/// Custom setup run after a sheet's bulk load.
pub type SetupFn = fn(&mut dyn StyleSink);

/// Writes every record of `sheet` into `sink`, in order.
///
/// Returns the number of records written. Duplicate keys resolve to the
/// later record.
pub fn apply_sheet<S: StyleSink + ?Sized>(sink: &mut S, sheet: &StyleSheet) -> usize {
    let written = apply_records(sink, sheet.iter().copied());
    log::debug!(
        "applied style sheet '{}' ({} properties)",
        sheet.name(),
        written
    );
    written
}

/// Writes records from any source into `sink`, in order.
pub fn apply_records<S, I>(sink: &mut S, records: I) -> usize
where
    S: StyleSink + ?Sized,
    I: IntoIterator<Item = StyleProperty>,
{
    let mut written = 0;
    for record in records {
        sink.set(record.control, record.property, record.value);
        written += 1;
    }
    written
}

/// A sheet plus an optional setup step, loaded as one unit.
#[derive(Clone)]
pub struct StyleLoader {
    sheet: StyleSheet,
    setup: Option<SetupFn>,
}

impl std::fmt::Debug for StyleLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleLoader")
            .field("sheet", &self.sheet.name())
            .field("records", &self.sheet.len())
            .field("has_setup", &self.setup.is_some())
            .finish()
    }
}

impl StyleLoader {
    /// Creates a loader with no setup step.
    pub const fn new(sheet: StyleSheet) -> Self {
        Self { sheet, setup: None }
    }

    /// Adds the setup step run after the bulk load.
    pub fn with_setup(mut self, setup: SetupFn) -> Self {
        self.setup = Some(setup);
        self
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Runs the bulk load, then the setup step.
    ///
    /// Returns the number of sheet records written; writes made by the setup
    /// step are not counted.
    pub fn load<S: StyleSink>(&self, sink: &mut S) -> usize {
        let written = apply_sheet(sink, &self.sheet);
        if let Some(setup) = self.setup {
            setup(sink);
        }
        written
    }
}
