//! Control and property identifiers.
//!
//! Every style value is addressed by a [`ControlId`] and a [`PropertyId`].
//! Both are plain integers underneath; the constants here name the ones the
//! toolkit renderer reads. Any other integer is still a valid identifier and
//! can be stored in a [`StyleContext`](crate::StyleContext).
//!
//! # Property Layout
//!
//! Property ids `0..=14` are the *base* properties every control has (state
//! colors, border width, text padding, text alignment). Ids from `16` upward
//! are *extended* properties whose meaning depends on the control, so
//! `PropertyId(16)` is `TEXT_SIZE` under [`ControlId::DEFAULT`] but
//! `LIST_ITEMS_HEIGHT` under [`ControlId::LISTVIEW`].
//!
//! | Range | Meaning |
//! |-------|---------|
//! | `0..=11` | Border/base/text color for normal, focused, pressed, disabled |
//! | `12` | `BORDER_WIDTH` |
//! | `13` | `TEXT_PADDING` |
//! | `14` | `TEXT_ALIGNMENT` |
//! | `16..` | Control-specific extended properties |
//!
//! # Name Lookup
//!
//! The file formats accept names as well as numbers:
//!
//! ```rust
//! use guistyle::ids::{parse_control, parse_property, qualified_name};
//! use guistyle::{ControlId, PropertyId};
//!
//! let control = parse_control("listview").unwrap();
//! assert_eq!(control, ControlId::LISTVIEW);
//!
//! let property = parse_property(control, "TEXT_ALIGNMENT").unwrap();
//! assert_eq!(property, PropertyId::TEXT_ALIGNMENT);
//!
//! assert_eq!(
//!     qualified_name(control, property).as_deref(),
//!     Some("LISTVIEW_TEXT_ALIGNMENT")
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a control (widget class or sub-element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(pub u16);

impl ControlId {
    /// Shared properties; base values here apply to every control.
    pub const DEFAULT: ControlId = ControlId(0);
    pub const LABEL: ControlId = ControlId(1);
    pub const BUTTON: ControlId = ControlId(2);
    pub const TOGGLE: ControlId = ControlId(3);
    pub const SLIDER: ControlId = ControlId(4);
    pub const PROGRESSBAR: ControlId = ControlId(5);
    pub const CHECKBOX: ControlId = ControlId(6);
    pub const COMBOBOX: ControlId = ControlId(7);
    pub const DROPDOWNBOX: ControlId = ControlId(8);
    pub const TEXTBOX: ControlId = ControlId(9);
    pub const VALUEBOX: ControlId = ControlId(10);
    pub const SPINNER: ControlId = ControlId(11);
    pub const LISTVIEW: ControlId = ControlId(12);
    pub const COLORPICKER: ControlId = ControlId(13);
    pub const SCROLLBAR: ControlId = ControlId(14);
    pub const STATUSBAR: ControlId = ControlId(15);

    /// Returns the raw integer id.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns the upper-case control name, if this is a well-known control.
    pub fn name(self) -> Option<&'static str> {
        control_name(self)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match control_name(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "CONTROL{}", self.0),
        }
    }
}

impl From<u16> for ControlId {
    fn from(id: u16) -> Self {
        ControlId(id)
    }
}

/// Identifier of a stylable property within a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u16);

impl PropertyId {
    pub const BORDER_COLOR_NORMAL: PropertyId = PropertyId(0);
    pub const BASE_COLOR_NORMAL: PropertyId = PropertyId(1);
    pub const TEXT_COLOR_NORMAL: PropertyId = PropertyId(2);
    pub const BORDER_COLOR_FOCUSED: PropertyId = PropertyId(3);
    pub const BASE_COLOR_FOCUSED: PropertyId = PropertyId(4);
    pub const TEXT_COLOR_FOCUSED: PropertyId = PropertyId(5);
    pub const BORDER_COLOR_PRESSED: PropertyId = PropertyId(6);
    pub const BASE_COLOR_PRESSED: PropertyId = PropertyId(7);
    pub const TEXT_COLOR_PRESSED: PropertyId = PropertyId(8);
    pub const BORDER_COLOR_DISABLED: PropertyId = PropertyId(9);
    pub const BASE_COLOR_DISABLED: PropertyId = PropertyId(10);
    pub const TEXT_COLOR_DISABLED: PropertyId = PropertyId(11);
    pub const BORDER_WIDTH: PropertyId = PropertyId(12);
    pub const TEXT_PADDING: PropertyId = PropertyId(13);
    pub const TEXT_ALIGNMENT: PropertyId = PropertyId(14);

    /// Returns the raw integer id.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns true for the properties every control carries (ids below 16).
    pub const fn is_base(self) -> bool {
        self.0 < BASE_PROPERTY_COUNT
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for PropertyId {
    fn from(id: u16) -> Self {
        PropertyId(id)
    }
}

/// Number of property slots reserved for base properties.
///
/// Ids `0..BASE_PROPERTY_COUNT` are base properties; slot 15 is reserved.
pub const BASE_PROPERTY_COUNT: u16 = 16;

/// Extended properties of [`ControlId::DEFAULT`].
pub mod default_ext {
    use super::PropertyId;

    pub const TEXT_SIZE: PropertyId = PropertyId(16);
    pub const TEXT_SPACING: PropertyId = PropertyId(17);
    pub const LINE_COLOR: PropertyId = PropertyId(18);
    pub const BACKGROUND_COLOR: PropertyId = PropertyId(19);
    pub const TEXT_LINE_SPACING: PropertyId = PropertyId(20);
    pub const TEXT_ALIGNMENT_VERTICAL: PropertyId = PropertyId(21);
    pub const TEXT_WRAP_MODE: PropertyId = PropertyId(22);
}

/// Extended properties of [`ControlId::TOGGLE`].
pub mod toggle_ext {
    use super::PropertyId;

    pub const GROUP_PADDING: PropertyId = PropertyId(16);
}

/// Extended properties of [`ControlId::SLIDER`].
pub mod slider_ext {
    use super::PropertyId;

    pub const SLIDER_WIDTH: PropertyId = PropertyId(16);
    pub const SLIDER_PADDING: PropertyId = PropertyId(17);
}

/// Extended properties of [`ControlId::PROGRESSBAR`].
pub mod progressbar_ext {
    use super::PropertyId;

    pub const PROGRESS_PADDING: PropertyId = PropertyId(16);
}

/// Extended properties of [`ControlId::CHECKBOX`].
pub mod checkbox_ext {
    use super::PropertyId;

    pub const CHECK_PADDING: PropertyId = PropertyId(16);
}

/// Extended properties of [`ControlId::COMBOBOX`].
pub mod combobox_ext {
    use super::PropertyId;

    pub const COMBO_BUTTON_WIDTH: PropertyId = PropertyId(16);
    pub const COMBO_BUTTON_SPACING: PropertyId = PropertyId(17);
}

/// Extended properties of [`ControlId::DROPDOWNBOX`].
pub mod dropdownbox_ext {
    use super::PropertyId;

    pub const ARROW_PADDING: PropertyId = PropertyId(16);
    pub const DROPDOWN_ITEMS_SPACING: PropertyId = PropertyId(17);
}

/// Extended properties of [`ControlId::TEXTBOX`].
pub mod textbox_ext {
    use super::PropertyId;

    pub const TEXT_READONLY: PropertyId = PropertyId(16);
}

/// Extended properties of [`ControlId::SPINNER`].
pub mod spinner_ext {
    use super::PropertyId;

    pub const SPIN_BUTTON_WIDTH: PropertyId = PropertyId(16);
    pub const SPIN_BUTTON_SPACING: PropertyId = PropertyId(17);
}

/// Extended properties of [`ControlId::LISTVIEW`].
pub mod listview_ext {
    use super::PropertyId;

    pub const LIST_ITEMS_HEIGHT: PropertyId = PropertyId(16);
    pub const LIST_ITEMS_SPACING: PropertyId = PropertyId(17);
    pub const SCROLLBAR_WIDTH: PropertyId = PropertyId(18);
    pub const SCROLLBAR_SIDE: PropertyId = PropertyId(19);
}

/// Extended properties of [`ControlId::COLORPICKER`].
pub mod colorpicker_ext {
    use super::PropertyId;

    pub const COLOR_SELECTOR_SIZE: PropertyId = PropertyId(16);
    pub const HUEBAR_WIDTH: PropertyId = PropertyId(17);
    pub const HUEBAR_PADDING: PropertyId = PropertyId(18);
    pub const HUEBAR_SELECTOR_HEIGHT: PropertyId = PropertyId(19);
    pub const HUEBAR_SELECTOR_OVERFLOW: PropertyId = PropertyId(20);
}

/// Extended properties of [`ControlId::SCROLLBAR`].
pub mod scrollbar_ext {
    use super::PropertyId;

    pub const ARROWS_SIZE: PropertyId = PropertyId(16);
    pub const ARROWS_VISIBLE: PropertyId = PropertyId(17);
    pub const SCROLL_SLIDER_PADDING: PropertyId = PropertyId(18);
    pub const SCROLL_SLIDER_SIZE: PropertyId = PropertyId(19);
    pub const SCROLL_PADDING: PropertyId = PropertyId(20);
    pub const SCROLL_SPEED: PropertyId = PropertyId(21);
}

/// Horizontal text alignment codes stored under `TEXT_ALIGNMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Vertical text alignment codes stored under `TEXT_ALIGNMENT_VERTICAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top = 0,
    Middle = 1,
    Bottom = 2,
}

/// Text wrapping codes stored under `TEXT_WRAP_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    None = 0,
    Char = 1,
    Word = 2,
}

/// Scrollbar placement codes stored under `SCROLLBAR_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollbarSide {
    Left = 0,
    Right = 1,
}

macro_rules! impl_code {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for u32 {
                fn from(code: $ty) -> u32 {
                    code as u32
                }
            }
        )*
    };
}

impl_code!(TextAlignment, VerticalAlignment, WrapMode, ScrollbarSide);

const CONTROL_NAMES: &[&str] = &[
    "DEFAULT",
    "LABEL",
    "BUTTON",
    "TOGGLE",
    "SLIDER",
    "PROGRESSBAR",
    "CHECKBOX",
    "COMBOBOX",
    "DROPDOWNBOX",
    "TEXTBOX",
    "VALUEBOX",
    "SPINNER",
    "LISTVIEW",
    "COLORPICKER",
    "SCROLLBAR",
    "STATUSBAR",
];

const BASE_PROPERTY_NAMES: &[&str] = &[
    "BORDER_COLOR_NORMAL",
    "BASE_COLOR_NORMAL",
    "TEXT_COLOR_NORMAL",
    "BORDER_COLOR_FOCUSED",
    "BASE_COLOR_FOCUSED",
    "TEXT_COLOR_FOCUSED",
    "BORDER_COLOR_PRESSED",
    "BASE_COLOR_PRESSED",
    "TEXT_COLOR_PRESSED",
    "BORDER_COLOR_DISABLED",
    "BASE_COLOR_DISABLED",
    "TEXT_COLOR_DISABLED",
    "BORDER_WIDTH",
    "TEXT_PADDING",
    "TEXT_ALIGNMENT",
];

/// Extended property names, indexed from property id 16.
fn extended_names(control: ControlId) -> &'static [&'static str] {
    match control {
        ControlId::DEFAULT => &[
            "TEXT_SIZE",
            "TEXT_SPACING",
            "LINE_COLOR",
            "BACKGROUND_COLOR",
            "TEXT_LINE_SPACING",
            "TEXT_ALIGNMENT_VERTICAL",
            "TEXT_WRAP_MODE",
        ],
        ControlId::TOGGLE => &["GROUP_PADDING"],
        ControlId::SLIDER => &["SLIDER_WIDTH", "SLIDER_PADDING"],
        ControlId::PROGRESSBAR => &["PROGRESS_PADDING"],
        ControlId::CHECKBOX => &["CHECK_PADDING"],
        ControlId::COMBOBOX => &["COMBO_BUTTON_WIDTH", "COMBO_BUTTON_SPACING"],
        ControlId::DROPDOWNBOX => &["ARROW_PADDING", "DROPDOWN_ITEMS_SPACING"],
        ControlId::TEXTBOX => &["TEXT_READONLY"],
        ControlId::SPINNER => &["SPIN_BUTTON_WIDTH", "SPIN_BUTTON_SPACING"],
        ControlId::LISTVIEW => &[
            "LIST_ITEMS_HEIGHT",
            "LIST_ITEMS_SPACING",
            "SCROLLBAR_WIDTH",
            "SCROLLBAR_SIDE",
        ],
        ControlId::COLORPICKER => &[
            "COLOR_SELECTOR_SIZE",
            "HUEBAR_WIDTH",
            "HUEBAR_PADDING",
            "HUEBAR_SELECTOR_HEIGHT",
            "HUEBAR_SELECTOR_OVERFLOW",
        ],
        ControlId::SCROLLBAR => &[
            "ARROWS_SIZE",
            "ARROWS_VISIBLE",
            "SCROLL_SLIDER_PADDING",
            "SCROLL_SLIDER_SIZE",
            "SCROLL_PADDING",
            "SCROLL_SPEED",
        ],
        _ => &[],
    }
}

/// Returns every well-known control id, in id order.
pub fn controls() -> impl Iterator<Item = ControlId> {
    (0..CONTROL_NAMES.len() as u16).map(ControlId)
}

/// Returns the upper-case name of a well-known control.
pub fn control_name(control: ControlId) -> Option<&'static str> {
    CONTROL_NAMES.get(control.0 as usize).copied()
}

/// Returns the upper-case name of a property as seen from `control`.
///
/// Base properties have the same name under every control. Extended
/// properties are looked up in the control's own table.
pub fn property_name(control: ControlId, property: PropertyId) -> Option<&'static str> {
    if property.0 < BASE_PROPERTY_COUNT {
        return BASE_PROPERTY_NAMES.get(property.0 as usize).copied();
    }
    extended_names(control)
        .get((property.0 - BASE_PROPERTY_COUNT) as usize)
        .copied()
}

/// Returns `CONTROL_PROPERTY`, e.g. `LISTVIEW_TEXT_ALIGNMENT`.
pub fn qualified_name(control: ControlId, property: PropertyId) -> Option<String> {
    let control_part = control_name(control)?;
    let property_part = property_name(control, property)?;
    Some(format!("{}_{}", control_part, property_part))
}

/// Parses a control from its name (any case) or its decimal id.
pub fn parse_control(s: &str) -> Option<ControlId> {
    let s = s.trim();
    if let Ok(id) = s.parse::<u16>() {
        return Some(ControlId(id));
    }
    let upper = s.to_ascii_uppercase();
    CONTROL_NAMES
        .iter()
        .position(|name| *name == upper)
        .map(|index| ControlId(index as u16))
}

/// Parses a property of `control` from its name (any case) or decimal id.
///
/// Extended property names only resolve under the control that owns them.
pub fn parse_property(control: ControlId, s: &str) -> Option<PropertyId> {
    let s = s.trim();
    if let Ok(id) = s.parse::<u16>() {
        return Some(PropertyId(id));
    }
    let upper = s.to_ascii_uppercase();
    if let Some(index) = BASE_PROPERTY_NAMES.iter().position(|name| *name == upper) {
        return Some(PropertyId(index as u16));
    }
    extended_names(control)
        .iter()
        .position(|name| *name == upper)
        .map(|index| PropertyId(index as u16 + BASE_PROPERTY_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_names_cover_well_known_ids() {
        assert_eq!(control_name(ControlId::DEFAULT), Some("DEFAULT"));
        assert_eq!(control_name(ControlId::LISTVIEW), Some("LISTVIEW"));
        assert_eq!(control_name(ControlId::STATUSBAR), Some("STATUSBAR"));
        assert_eq!(control_name(ControlId(16)), None);
        assert_eq!(controls().count(), 16);
    }

    #[test]
    fn test_property_name_base_is_shared() {
        assert_eq!(
            property_name(ControlId::BUTTON, PropertyId::TEXT_ALIGNMENT),
            Some("TEXT_ALIGNMENT")
        );
        assert_eq!(
            property_name(ControlId::DEFAULT, PropertyId::BORDER_COLOR_NORMAL),
            Some("BORDER_COLOR_NORMAL")
        );
        assert_eq!(property_name(ControlId::DEFAULT, PropertyId(15)), None);
    }

    #[test]
    fn test_property_name_extended_depends_on_control() {
        assert_eq!(
            property_name(ControlId::DEFAULT, PropertyId(16)),
            Some("TEXT_SIZE")
        );
        assert_eq!(
            property_name(ControlId::LISTVIEW, PropertyId(16)),
            Some("LIST_ITEMS_HEIGHT")
        );
        assert_eq!(property_name(ControlId::LABEL, PropertyId(16)), None);
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            qualified_name(ControlId::DEFAULT, default_ext::LINE_COLOR).as_deref(),
            Some("DEFAULT_LINE_COLOR")
        );
        assert_eq!(
            qualified_name(ControlId::SCROLLBAR, PropertyId::TEXT_ALIGNMENT).as_deref(),
            Some("SCROLLBAR_TEXT_ALIGNMENT")
        );
        assert_eq!(qualified_name(ControlId(99), PropertyId(0)), None);
    }

    #[test]
    fn test_parse_control_by_name_and_number() {
        assert_eq!(parse_control("ListView"), Some(ControlId::LISTVIEW));
        assert_eq!(parse_control(" scrollbar "), Some(ControlId::SCROLLBAR));
        assert_eq!(parse_control("12"), Some(ControlId::LISTVIEW));
        assert_eq!(parse_control("300"), Some(ControlId(300)));
        assert_eq!(parse_control("window"), None);
    }

    #[test]
    fn test_parse_property_scoped_to_control() {
        assert_eq!(
            parse_property(ControlId::LISTVIEW, "scrollbar_side"),
            Some(listview_ext::SCROLLBAR_SIDE)
        );
        assert_eq!(parse_property(ControlId::DEFAULT, "scrollbar_side"), None);
        assert_eq!(
            parse_property(ControlId::LABEL, "text_alignment"),
            Some(PropertyId::TEXT_ALIGNMENT)
        );
        assert_eq!(parse_property(ControlId::LABEL, "40"), Some(PropertyId(40)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ControlId::LISTVIEW.to_string(), "LISTVIEW");
        assert_eq!(ControlId(42).to_string(), "CONTROL42");
        assert_eq!(PropertyId::TEXT_ALIGNMENT.to_string(), "14");
    }

    #[test]
    fn test_codes_convert_to_values() {
        assert_eq!(u32::from(TextAlignment::Left), 0);
        assert_eq!(u32::from(TextAlignment::Right), 2);
        assert_eq!(u32::from(VerticalAlignment::Middle), 1);
        assert_eq!(u32::from(WrapMode::Word), 2);
        assert_eq!(u32::from(ScrollbarSide::Right), 1);
    }

    #[test]
    fn test_is_base() {
        assert!(PropertyId::TEXT_ALIGNMENT.is_base());
        assert!(!default_ext::TEXT_SIZE.is_base());
    }
}
