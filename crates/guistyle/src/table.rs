//! Immutable style tables.
//!
//! A [`StyleTable`] is a flat `StyleKey → u32` map. It serves two roles:
//!
//! - the default layer a [`StyleContext`](crate::StyleContext) is built on
//! - a flattened snapshot of a context's effective values
//!
//! Tables iterate in key order, so two tables with the same contents compare
//! and print identically.

use std::collections::BTreeMap;

use crate::ids::{ControlId, PropertyId};
use crate::record::{StyleKey, StyleProperty};
use crate::sheet::StyleSheet;

/// An ordered, read-only map of style values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    values: BTreeMap<StyleKey, u32>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table by applying the sheet's records in order.
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        sheet.iter().copied().collect()
    }

    pub fn get(&self, control: ControlId, property: PropertyId) -> Option<u32> {
        self.values.get(&StyleKey::new(control, property)).copied()
    }

    pub fn get_key(&self, key: &StyleKey) -> Option<u32> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, control: ControlId, property: PropertyId) -> bool {
        self.values.contains_key(&StyleKey::new(control, property))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, u32)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    /// Converts the table back into records, in key order.
    pub fn to_sheet(&self, name: impl Into<std::borrow::Cow<'static, str>>) -> StyleSheet {
        StyleSheet::from_records(
            name,
            self.iter()
                .map(|(key, value)| StyleProperty::of(key.control, key.property, value))
                .collect(),
        )
    }

    pub(crate) fn insert(&mut self, key: StyleKey, value: u32) {
        self.values.insert(key, value);
    }
}

impl FromIterator<(StyleKey, u32)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (StyleKey, u32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<StyleProperty> for StyleTable {
    fn from_iter<I: IntoIterator<Item = StyleProperty>>(iter: I) -> Self {
        iter.into_iter()
            .map(|record| (record.key(), record.value))
            .collect()
    }
}
