//! Style sheets: ordered override records for one widget class.
//!
//! A [`StyleSheet`] is a named, ordered list of [`StyleProperty`] records. It
//! either borrows a `'static` table authored in code (see
//! [`StyleSheet::from_static`]) or owns records loaded at runtime.
//!
//! Order only matters when a key appears twice: the later record wins, both
//! for [`StyleSheet::get`] and when the sheet is applied to a registry.
//!
//! ```rust
//! use guistyle::{ControlId, PropertyId, StyleSheet, TextAlignment};
//!
//! let sheet = StyleSheet::new("compact")
//!     .set(ControlId::BUTTON, PropertyId::BORDER_WIDTH, 1)
//!     .set(ControlId::LABEL, PropertyId::TEXT_ALIGNMENT, TextAlignment::Right.into());
//!
//! assert_eq!(sheet.len(), 2);
//! assert_eq!(sheet.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), Some(1));
//! ```

use std::borrow::Cow;

use crate::ids::{ControlId, PropertyId};
use crate::record::{StyleKey, StyleProperty};

/// A named, ordered sequence of style overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    name: Cow<'static, str>,
    records: Cow<'static, [StyleProperty]>,
}

impl StyleSheet {
    /// Creates an empty sheet.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            records: Cow::Owned(Vec::new()),
        }
    }

    /// Wraps a compile-time table without copying it.
    pub const fn from_static(name: &'static str, records: &'static [StyleProperty]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            records: Cow::Borrowed(records),
        }
    }

    /// Creates a sheet owning the given records.
    pub fn from_records(name: impl Into<Cow<'static, str>>, records: Vec<StyleProperty>) -> Self {
        Self {
            name: name.into(),
            records: Cow::Owned(records),
        }
    }

    /// Appends a record, returning the sheet for chaining.
    pub fn set(mut self, control: ControlId, property: PropertyId, value: u32) -> Self {
        self.push(StyleProperty::of(control, property, value));
        self
    }

    /// Appends a record.
    ///
    /// A borrowed static table is copied on the first push.
    pub fn push(&mut self, record: StyleProperty) {
        self.records.to_mut().push(record);
    }

    /// Renames the sheet, returning it for chaining.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in authored order.
    pub fn records(&self) -> &[StyleProperty] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleProperty> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the value this sheet assigns to a key, if any.
    ///
    /// With duplicate keys the last record wins, matching load order.
    pub fn get(&self, control: ControlId, property: PropertyId) -> Option<u32> {
        let key = StyleKey::new(control, property);
        self.records
            .iter()
            .rev()
            .find(|record| record.key() == key)
            .map(|record| record.value)
    }

    /// Returns true if the sheet assigns the key.
    pub fn contains(&self, control: ControlId, property: PropertyId) -> bool {
        self.get(control, property).is_some()
    }

    /// Appends every record of `other` after this sheet's records.
    ///
    /// Keys present in both take `other`'s value once applied.
    pub fn merge(mut self, other: &StyleSheet) -> Self {
        self.records.to_mut().extend_from_slice(other.records());
        self
    }
}

impl<'a> IntoIterator for &'a StyleSheet {
    type Item = &'a StyleProperty;
    type IntoIter = std::slice::Iter<'a, StyleProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Extend<StyleProperty> for StyleSheet {
    fn extend<I: IntoIterator<Item = StyleProperty>>(&mut self, iter: I) {
        self.records.to_mut().extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[StyleProperty] = &[
        StyleProperty::new(0, 2, 0xffffffff),
        StyleProperty::new(12, 14, 0),
    ];

    #[test]
    fn test_from_static_borrows() {
        let sheet = StyleSheet::from_static("table", TABLE);
        assert_eq!(sheet.name(), "table");
        assert_eq!(sheet.len(), 2);
        assert!(matches!(sheet.records, Cow::Borrowed(_)));
    }

    #[test]
    fn test_push_onto_static_copies() {
        let mut sheet = StyleSheet::from_static("table", TABLE);
        sheet.push(StyleProperty::new(2, 12, 2));
        assert_eq!(sheet.len(), 3);
        assert_eq!(TABLE.len(), 2);
    }

    #[test]
    fn test_get_last_record_wins() {
        let sheet = StyleSheet::new("dup")
            .set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, 1)
            .set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, 2);
        assert_eq!(
            sheet.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL),
            Some(2)
        );
    }

    #[test]
    fn test_get_missing() {
        let sheet = StyleSheet::from_static("table", TABLE);
        assert_eq!(sheet.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), None);
        assert!(!sheet.contains(ControlId::BUTTON, PropertyId::BORDER_WIDTH));
        assert!(sheet.contains(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT));
    }

    #[test]
    fn test_merge_appends_in_order() {
        let base = StyleSheet::new("base").set(ControlId::LABEL, PropertyId::TEXT_PADDING, 4);
        let extra = StyleSheet::new("extra").set(ControlId::LABEL, PropertyId::TEXT_PADDING, 8);

        let merged = base.merge(&extra);

        assert_eq!(merged.name(), "base");
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get(ControlId::LABEL, PropertyId::TEXT_PADDING), Some(8));
    }

    #[test]
    fn test_extend_and_iterate() {
        let mut sheet = StyleSheet::new("empty");
        assert!(sheet.is_empty());
        sheet.extend(TABLE.iter().copied());
        let values: Vec<u32> = (&sheet).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec![0xffffffff, 0]);
    }
}
