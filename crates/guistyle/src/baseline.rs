//! The toolkit's built-in default style.
//!
//! Widget style sheets only list overrides; everything else is expected to
//! come from the toolkit baseline installed at startup. [`toolkit_baseline`]
//! returns that baseline as a [`StyleTable`], ready to be used as the default
//! layer of a [`StyleContext`](crate::StyleContext):
//!
//! ```rust
//! use guistyle::{baseline, ControlId, PropertyId, StyleContext};
//!
//! let ctx = StyleContext::with_defaults(baseline::toolkit_baseline());
//! assert_eq!(ctx.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), 2);
//! assert_eq!(ctx.get(ControlId::LABEL, PropertyId::BORDER_COLOR_NORMAL), 0x838383ff);
//! ```
//!
//! The table is built the way the toolkit builds it: the `DEFAULT` base
//! properties are written once and copied to every well-known control, then
//! the `DEFAULT` extended properties are added, then the per-control
//! adjustments overwrite what they name.

use crate::ids::{
    checkbox_ext, colorpicker_ext, combobox_ext, controls, default_ext, dropdownbox_ext,
    listview_ext, progressbar_ext, scrollbar_ext, slider_ext, spinner_ext, toggle_ext, ControlId,
    PropertyId, ScrollbarSide, TextAlignment, VerticalAlignment,
};
use crate::record::{StyleKey, StyleProperty};
use crate::table::StyleTable;

const fn prop(control: ControlId, property: PropertyId, value: u32) -> StyleProperty {
    StyleProperty::of(control, property, value)
}

const D: ControlId = ControlId::DEFAULT;

/// `DEFAULT` base properties, shared by every control.
static SHARED: &[StyleProperty] = &[
    prop(D, PropertyId::BORDER_COLOR_NORMAL, 0x838383ff),
    prop(D, PropertyId::BASE_COLOR_NORMAL, 0xc9c9c9ff),
    prop(D, PropertyId::TEXT_COLOR_NORMAL, 0x686868ff),
    prop(D, PropertyId::BORDER_COLOR_FOCUSED, 0x5bb2d9ff),
    prop(D, PropertyId::BASE_COLOR_FOCUSED, 0xc9effeff),
    prop(D, PropertyId::TEXT_COLOR_FOCUSED, 0x6c9bbcff),
    prop(D, PropertyId::BORDER_COLOR_PRESSED, 0x0492c7ff),
    prop(D, PropertyId::BASE_COLOR_PRESSED, 0x97e8ffff),
    prop(D, PropertyId::TEXT_COLOR_PRESSED, 0x368bafff),
    prop(D, PropertyId::BORDER_COLOR_DISABLED, 0xb5c1c2ff),
    prop(D, PropertyId::BASE_COLOR_DISABLED, 0xe6e9e9ff),
    prop(D, PropertyId::TEXT_COLOR_DISABLED, 0xaeb7b8ff),
    prop(D, PropertyId::BORDER_WIDTH, 1),
    prop(D, PropertyId::TEXT_PADDING, 0),
    prop(D, PropertyId::TEXT_ALIGNMENT, TextAlignment::Center as u32),
];

/// `DEFAULT` extended properties (global text metrics and colors).
static GLOBAL: &[StyleProperty] = &[
    prop(D, default_ext::TEXT_SIZE, 10),
    prop(D, default_ext::TEXT_SPACING, 1),
    prop(D, default_ext::LINE_COLOR, 0x90abb5ff),
    prop(D, default_ext::BACKGROUND_COLOR, 0xf5f5f5ff),
    prop(D, default_ext::TEXT_LINE_SPACING, 15),
    prop(
        D,
        default_ext::TEXT_ALIGNMENT_VERTICAL,
        VerticalAlignment::Middle as u32,
    ),
];

/// Per-control adjustments applied after propagation.
static CONTROL_SPECIFIC: &[StyleProperty] = &[
    prop(ControlId::LABEL, PropertyId::TEXT_ALIGNMENT, TextAlignment::Left as u32),
    prop(ControlId::BUTTON, PropertyId::BORDER_WIDTH, 2),
    prop(ControlId::SLIDER, PropertyId::TEXT_PADDING, 4),
    prop(ControlId::PROGRESSBAR, PropertyId::TEXT_PADDING, 4),
    prop(ControlId::CHECKBOX, PropertyId::TEXT_PADDING, 4),
    prop(ControlId::CHECKBOX, PropertyId::TEXT_ALIGNMENT, TextAlignment::Right as u32),
    prop(ControlId::DROPDOWNBOX, PropertyId::TEXT_PADDING, 0),
    prop(ControlId::DROPDOWNBOX, PropertyId::TEXT_ALIGNMENT, TextAlignment::Center as u32),
    prop(ControlId::TEXTBOX, PropertyId::TEXT_PADDING, 4),
    prop(ControlId::TEXTBOX, PropertyId::TEXT_ALIGNMENT, TextAlignment::Left as u32),
    prop(ControlId::VALUEBOX, PropertyId::TEXT_PADDING, 0),
    prop(ControlId::VALUEBOX, PropertyId::TEXT_ALIGNMENT, TextAlignment::Left as u32),
    prop(ControlId::SPINNER, PropertyId::TEXT_PADDING, 0),
    prop(ControlId::SPINNER, PropertyId::TEXT_ALIGNMENT, TextAlignment::Left as u32),
    prop(ControlId::STATUSBAR, PropertyId::TEXT_PADDING, 8),
    prop(ControlId::STATUSBAR, PropertyId::TEXT_ALIGNMENT, TextAlignment::Left as u32),
    prop(ControlId::TOGGLE, toggle_ext::GROUP_PADDING, 2),
    prop(ControlId::SLIDER, slider_ext::SLIDER_WIDTH, 16),
    prop(ControlId::SLIDER, slider_ext::SLIDER_PADDING, 1),
    prop(ControlId::PROGRESSBAR, progressbar_ext::PROGRESS_PADDING, 1),
    prop(ControlId::CHECKBOX, checkbox_ext::CHECK_PADDING, 1),
    prop(ControlId::COMBOBOX, combobox_ext::COMBO_BUTTON_WIDTH, 32),
    prop(ControlId::COMBOBOX, combobox_ext::COMBO_BUTTON_SPACING, 2),
    prop(ControlId::DROPDOWNBOX, dropdownbox_ext::ARROW_PADDING, 16),
    prop(ControlId::DROPDOWNBOX, dropdownbox_ext::DROPDOWN_ITEMS_SPACING, 2),
    prop(ControlId::SPINNER, spinner_ext::SPIN_BUTTON_WIDTH, 24),
    prop(ControlId::SPINNER, spinner_ext::SPIN_BUTTON_SPACING, 2),
    prop(ControlId::SCROLLBAR, PropertyId::BORDER_WIDTH, 0),
    prop(ControlId::SCROLLBAR, scrollbar_ext::ARROWS_VISIBLE, 0),
    prop(ControlId::SCROLLBAR, scrollbar_ext::ARROWS_SIZE, 6),
    prop(ControlId::SCROLLBAR, scrollbar_ext::SCROLL_SLIDER_PADDING, 0),
    prop(ControlId::SCROLLBAR, scrollbar_ext::SCROLL_SLIDER_SIZE, 16),
    prop(ControlId::SCROLLBAR, scrollbar_ext::SCROLL_PADDING, 0),
    prop(ControlId::SCROLLBAR, scrollbar_ext::SCROLL_SPEED, 12),
    prop(ControlId::LISTVIEW, listview_ext::LIST_ITEMS_HEIGHT, 28),
    prop(ControlId::LISTVIEW, listview_ext::LIST_ITEMS_SPACING, 2),
    prop(ControlId::LISTVIEW, listview_ext::SCROLLBAR_WIDTH, 12),
    prop(
        ControlId::LISTVIEW,
        listview_ext::SCROLLBAR_SIDE,
        ScrollbarSide::Right as u32,
    ),
    prop(ControlId::COLORPICKER, colorpicker_ext::COLOR_SELECTOR_SIZE, 8),
    prop(ControlId::COLORPICKER, colorpicker_ext::HUEBAR_WIDTH, 16),
    prop(ControlId::COLORPICKER, colorpicker_ext::HUEBAR_PADDING, 8),
    prop(ControlId::COLORPICKER, colorpicker_ext::HUEBAR_SELECTOR_HEIGHT, 8),
    prop(ControlId::COLORPICKER, colorpicker_ext::HUEBAR_SELECTOR_OVERFLOW, 2),
];

/// Returns the toolkit's default style table.
pub fn toolkit_baseline() -> StyleTable {
    let mut table = StyleTable::new();

    for record in SHARED {
        for control in controls() {
            table.insert(StyleKey::new(control, record.property), record.value);
        }
    }

    for record in GLOBAL.iter().chain(CONTROL_SPECIFIC) {
        table.insert(record.key(), record.value);
    }

    table
}
