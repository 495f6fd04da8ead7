//! Built-in "ListView" style.
//!
//! A dark list style: transparent borders and bases, white text, grey focus
//! text, cyan pressed text, and left-aligned text for both the list items and
//! the list's scrollbar.
//!
//! Most records are keyed by [`ControlId::DEFAULT`], so loading this style
//! changes the shared colors. The two alignment records are keyed by the
//! sub-element that owns them ([`ControlId::LISTVIEW`] for the items,
//! [`ControlId::SCROLLBAR`] for the scrollbar), not by a single list id.
//!
//! ```rust
//! use guistyle::{listview, ControlId, PropertyId, StyleContext};
//!
//! let mut ctx = StyleContext::new();
//! listview::load_style_listview(&mut ctx);
//!
//! assert_eq!(ctx.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL), 0xffffffff);
//! assert_eq!(ctx.get(ControlId::SCROLLBAR, PropertyId::TEXT_ALIGNMENT), 0);
//! ```

use crate::context::StyleSink;
use crate::loader::StyleLoader;
use crate::record::StyleProperty;
use crate::sheet::StyleSheet;

/// Number of records in [`LISTVIEW_STYLE_PROPS`].
pub const LISTVIEW_STYLE_PROPS_COUNT: usize = 15;

/// The ListView overrides, in load order.
pub static LISTVIEW_STYLE_PROPS: [StyleProperty; LISTVIEW_STYLE_PROPS_COUNT] = [
    StyleProperty::new(0, 0, 0x00000000),  // DEFAULT_BORDER_COLOR_NORMAL
    StyleProperty::new(0, 1, 0x00000000),  // DEFAULT_BASE_COLOR_NORMAL
    StyleProperty::new(0, 2, 0xffffffff),  // DEFAULT_TEXT_COLOR_NORMAL
    StyleProperty::new(0, 3, 0x00000000),  // DEFAULT_BORDER_COLOR_FOCUSED
    StyleProperty::new(0, 4, 0x00000000),  // DEFAULT_BASE_COLOR_FOCUSED
    StyleProperty::new(0, 5, 0x9f9f9fff),  // DEFAULT_TEXT_COLOR_FOCUSED
    StyleProperty::new(0, 6, 0x00000000),  // DEFAULT_BORDER_COLOR_PRESSED
    StyleProperty::new(0, 7, 0x00000000),  // DEFAULT_BASE_COLOR_PRESSED
    StyleProperty::new(0, 8, 0x9de9f8ff),  // DEFAULT_TEXT_COLOR_PRESSED
    StyleProperty::new(0, 9, 0x00000000),  // DEFAULT_BORDER_COLOR_DISABLED
    StyleProperty::new(0, 10, 0x00000000), // DEFAULT_BASE_COLOR_DISABLED
    StyleProperty::new(0, 18, 0x00000000), // DEFAULT_LINE_COLOR
    StyleProperty::new(0, 19, 0x00000000), // DEFAULT_BACKGROUND_COLOR
    StyleProperty::new(12, 14, 0x00000000), // LISTVIEW_TEXT_ALIGNMENT
    StyleProperty::new(14, 14, 0x00000000), // SCROLLBAR_TEXT_ALIGNMENT
];

/// Name the sheet is registered under.
pub const LISTVIEW_STYLE_NAME: &str = "ListView";

/// The ListView overrides as a sheet.
pub fn listview_sheet() -> StyleSheet {
    StyleSheet::from_static(LISTVIEW_STYLE_NAME, &LISTVIEW_STYLE_PROPS)
}

/// Loader for the ListView style with its setup step.
pub fn listview_loader() -> StyleLoader {
    StyleLoader::new(listview_sheet()).with_setup(listview_setup)
}

/// Properties the sheet leaves to code.
///
/// The ListView style keeps the baseline border width, padding and item
/// metrics, so there is nothing to adjust here.
fn listview_setup(_sink: &mut dyn StyleSink) {}

/// Loads the ListView style into `sink`.
///
/// Call once during initialization, after the baseline is in place and
/// before anything draws with it. Keys the style does not list are left
/// untouched.
pub fn load_style_listview<S: StyleSink>(sink: &mut S) {
    listview_loader().load(sink);
}
