//! Style records and registry keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{qualified_name, ControlId, PropertyId};

/// Registry key: one property of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StyleKey {
    pub control: ControlId,
    pub property: PropertyId,
}

impl StyleKey {
    pub const fn new(control: ControlId, property: PropertyId) -> Self {
        Self { control, property }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match qualified_name(self.control, self.property) {
            Some(name) => f.write_str(&name),
            None => write!(f, "({}, {})", self.control.0, self.property.0),
        }
    }
}

impl From<(ControlId, PropertyId)> for StyleKey {
    fn from((control, property): (ControlId, PropertyId)) -> Self {
        Self::new(control, property)
    }
}

/// One authored override: `control.property = value`.
///
/// Values are packed `0xRRGGBBAA` colors or enum-like codes; the record does
/// not interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleProperty {
    pub control: ControlId,
    pub property: PropertyId,
    pub value: u32,
}

impl StyleProperty {
    /// Builds a record from raw ids, usable in `const` tables.
    pub const fn new(control: u16, property: u16, value: u32) -> Self {
        Self {
            control: ControlId(control),
            property: PropertyId(property),
            value,
        }
    }

    /// Builds a record from typed ids.
    pub const fn of(control: ControlId, property: PropertyId, value: u32) -> Self {
        Self {
            control,
            property,
            value,
        }
    }

    pub const fn key(&self) -> StyleKey {
        StyleKey::new(self.control, self.property)
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = 0x{:08x}", self.key(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key() {
        let record = StyleProperty::new(12, 14, 0);
        assert_eq!(
            record.key(),
            StyleKey::new(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT)
        );
    }

    #[test]
    fn test_record_display_uses_names() {
        let record = StyleProperty::new(0, 5, 0x9f9f9fff);
        assert_eq!(record.to_string(), "DEFAULT_TEXT_COLOR_FOCUSED = 0x9f9f9fff");
    }

    #[test]
    fn test_key_display_falls_back_to_numbers() {
        let key = StyleKey::new(ControlId(40), PropertyId(2));
        assert_eq!(key.to_string(), "(40, 2)");
    }

    // =========================================================================
    // Serde
    // =========================================================================

    #[test]
    fn test_record_serializes_ids_as_numbers() {
        let yaml = serde_yaml::to_string(&StyleProperty::new(12, 14, 2)).unwrap();
        assert_eq!(yaml, "control: 12\nproperty: 14\nvalue: 2\n");

        let key = StyleKey::new(ControlId::SCROLLBAR, PropertyId::TEXT_ALIGNMENT);
        assert_eq!(serde_yaml::to_string(&key).unwrap(), "control: 14\nproperty: 14\n");
    }

    #[test]
    fn test_records_deserialize_from_yaml() {
        let records: Vec<StyleProperty> = serde_yaml::from_str(
            "- { control: 0, property: 5, value: 2678038527 }\n\
             - { control: 12, property: 14, value: 0 }\n",
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                StyleProperty::of(ControlId::DEFAULT, PropertyId::TEXT_COLOR_FOCUSED, 0x9f9f9fff),
                StyleProperty::of(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT, 0),
            ]
        );

        let key: StyleKey = serde_yaml::from_str("{ control: 2, property: 12 }").unwrap();
        assert_eq!(key, StyleKey::new(ControlId::BUTTON, PropertyId::BORDER_WIDTH));
    }

    #[test]
    fn test_listview_records_survive_yaml() {
        let sheet = crate::listview::listview_sheet();
        let yaml = serde_yaml::to_string(sheet.records()).unwrap();
        let back: Vec<StyleProperty> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.as_slice(), sheet.records());
    }
}
