//! The style registry.
//!
//! [`StyleContext`] holds the style values renderers read at draw time. It is
//! an explicit value rather than hidden global state, so several independent
//! style sets (themes, test fixtures) can live side by side.
//!
//! # Layers
//!
//! A context has two layers and a sentinel:
//!
//! 1. **overrides**: values written with [`set`](StyleContext::set), mutable
//! 2. **defaults**: a [`StyleTable`] fixed at construction, shared between
//!    clones
//! 3. **sentinel**: returned for keys neither layer knows (`0` unless
//!    configured)
//!
//! `get(key)` is `overrides[key]`, else `defaults[key]`, else the sentinel.
//! Writing never touches the default layer, so [`reset`](StyleContext::reset)
//! and [`clear_overrides`](StyleContext::clear_overrides) can always return a
//! key to its default.
//!
//! ```rust
//! use guistyle::{ControlId, PropertyId, StyleContext, StyleTable, StyleSheet};
//!
//! let defaults = StyleTable::from_sheet(
//!     &StyleSheet::new("base").set(ControlId::LABEL, PropertyId::TEXT_PADDING, 4),
//! );
//! let mut ctx = StyleContext::with_defaults(defaults);
//!
//! assert_eq!(ctx.get(ControlId::LABEL, PropertyId::TEXT_PADDING), 4);
//! ctx.set(ControlId::LABEL, PropertyId::TEXT_PADDING, 8);
//! assert_eq!(ctx.get(ControlId::LABEL, PropertyId::TEXT_PADDING), 8);
//!
//! ctx.reset(ControlId::LABEL, PropertyId::TEXT_PADDING);
//! assert_eq!(ctx.get(ControlId::LABEL, PropertyId::TEXT_PADDING), 4);
//!
//! // never set, never defaulted
//! assert_eq!(ctx.get(ControlId::BUTTON, PropertyId(40)), 0);
//! ```
//!
//! # Unknown Keys
//!
//! Any `(control, property)` pair is accepted. Pairs no renderer reads are
//! stored like any other and simply have no visible effect.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ids::{controls, ControlId, PropertyId};
use crate::loader::apply_sheet;
use crate::record::StyleKey;
use crate::sheet::StyleSheet;
use crate::table::StyleTable;

/// Value returned for keys with neither an override nor a default.
pub const DEFAULT_SENTINEL: u32 = 0;

/// Write side of a style registry.
///
/// Loaders are generic over this trait so the same sheet can be applied to a
/// [`StyleContext`], the process-wide registry, or a recording test double.
pub trait StyleSink {
    /// Stores `value` under `(control, property)`. Never fails.
    fn set(&mut self, control: ControlId, property: PropertyId, value: u32);
}

/// Read side of a style registry, as renderers use it.
pub trait StyleSource {
    /// Returns the effective value of `(control, property)`.
    fn get(&self, control: ControlId, property: PropertyId) -> u32;
}

/// A layered style registry: mutable overrides over immutable defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleContext {
    defaults: Arc<StyleTable>,
    overrides: HashMap<StyleKey, u32>,
    sentinel: u32,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            defaults: Arc::new(StyleTable::new()),
            overrides: HashMap::new(),
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

impl StyleContext {
    /// Creates a context with no defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context on top of the given default layer.
    pub fn with_defaults(defaults: StyleTable) -> Self {
        Self::with_shared_defaults(Arc::new(defaults))
    }

    /// Creates a context sharing a default layer with other contexts.
    pub fn with_shared_defaults(defaults: Arc<StyleTable>) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Sets the value returned for keys neither layer knows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guistyle::{ControlId, PropertyId, StyleContext};
    ///
    /// let ctx = StyleContext::new().sentinel(0xdeadbeef);
    /// assert_eq!(ctx.get(ControlId::LABEL, PropertyId::BORDER_WIDTH), 0xdeadbeef);
    /// ```
    pub fn sentinel(mut self, value: u32) -> Self {
        self.sentinel = value;
        self
    }

    pub fn sentinel_value(&self) -> u32 {
        self.sentinel
    }

    /// The default layer.
    pub fn defaults(&self) -> &StyleTable {
        &self.defaults
    }

    /// A shareable handle to the default layer.
    pub fn shared_defaults(&self) -> Arc<StyleTable> {
        Arc::clone(&self.defaults)
    }

    /// Upserts an override. Any value is accepted.
    pub fn set(&mut self, control: ControlId, property: PropertyId, value: u32) {
        let key = StyleKey::new(control, property);
        log::trace!("style set {} = 0x{:08x}", key, value);
        self.overrides.insert(key, value);
    }

    /// Returns the override, else the default, else the sentinel.
    pub fn get(&self, control: ControlId, property: PropertyId) -> u32 {
        self.get_key(&StyleKey::new(control, property))
    }

    pub fn get_key(&self, key: &StyleKey) -> u32 {
        self.overrides
            .get(key)
            .copied()
            .or_else(|| self.defaults.get_key(key))
            .unwrap_or(self.sentinel)
    }

    /// Returns the default-layer value, ignoring overrides.
    pub fn default_value(&self, control: ControlId, property: PropertyId) -> Option<u32> {
        self.defaults.get(control, property)
    }

    /// Returns the override-layer value, ignoring defaults.
    pub fn override_value(&self, control: ControlId, property: PropertyId) -> Option<u32> {
        self.overrides
            .get(&StyleKey::new(control, property))
            .copied()
    }

    pub fn is_overridden(&self, control: ControlId, property: PropertyId) -> bool {
        self.overrides
            .contains_key(&StyleKey::new(control, property))
    }

    /// Writes a shared value: `DEFAULT` plus, for base properties, every
    /// well-known control.
    ///
    /// This is the toolkit's propagation rule made explicit. Plain
    /// [`set`](Self::set) never propagates.
    ///
    /// ```rust
    /// use guistyle::{ControlId, PropertyId, StyleContext};
    ///
    /// let mut ctx = StyleContext::new();
    /// ctx.set_shared(PropertyId::BORDER_WIDTH, 3);
    /// assert_eq!(ctx.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), 3);
    /// assert_eq!(ctx.get(ControlId::STATUSBAR, PropertyId::BORDER_WIDTH), 3);
    /// ```
    pub fn set_shared(&mut self, property: PropertyId, value: u32) {
        self.set(ControlId::DEFAULT, property, value);
        if property.is_base() {
            for control in controls().skip(1) {
                self.set(control, property, value);
            }
        }
    }

    /// Drops the override for a key, returning it to its default.
    ///
    /// Returns the removed override value, if there was one.
    pub fn reset(&mut self, control: ControlId, property: PropertyId) -> Option<u32> {
        self.overrides.remove(&StyleKey::new(control, property))
    }

    /// Drops every override.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Iterates the override layer in no particular order.
    pub fn overrides(&self) -> impl Iterator<Item = (StyleKey, u32)> + '_ {
        self.overrides.iter().map(|(key, value)| (*key, *value))
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Number of keys with a value in either layer.
    pub fn len(&self) -> usize {
        let fresh = self
            .overrides
            .keys()
            .filter(|key| self.defaults.get_key(key).is_none())
            .count();
        self.defaults.len() + fresh
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.overrides.is_empty()
    }

    /// Flattens both layers into one table of effective values.
    ///
    /// The snapshot is detached: later writes to the context do not show up
    /// in it.
    pub fn snapshot(&self) -> StyleTable {
        // overrides come last so they replace defaults
        self.defaults.iter().chain(self.overrides()).collect()
    }

    /// Applies a sheet's records in order. Returns the number written.
    pub fn apply(&mut self, sheet: &StyleSheet) -> usize {
        apply_sheet(self, sheet)
    }
}

impl StyleSink for StyleContext {
    fn set(&mut self, control: ControlId, property: PropertyId, value: u32) {
        StyleContext::set(self, control, property, value);
    }
}

impl StyleSource for StyleContext {
    fn get(&self, control: ControlId, property: PropertyId) -> u32 {
        StyleContext::get(self, control, property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StyleProperty;

    fn defaults() -> StyleTable {
        vec![
            StyleProperty::new(0, 2, 0x686868ff),
            StyleProperty::new(12, 14, 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_new_context_returns_sentinel() {
        let ctx = StyleContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL), 0);
    }

    #[test]
    fn test_custom_sentinel() {
        let ctx = StyleContext::with_defaults(defaults()).sentinel(7);
        assert_eq!(ctx.sentinel_value(), 7);
        assert_eq!(ctx.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), 7);
        // defaults still win over the sentinel
        assert_eq!(
            ctx.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL),
            0x686868ff
        );
    }

    #[test]
    fn test_override_shadows_default() {
        let mut ctx = StyleContext::with_defaults(defaults());
        ctx.set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, 0xffffffff);

        assert_eq!(
            ctx.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL),
            0xffffffff
        );
        assert_eq!(
            ctx.default_value(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL),
            Some(0x686868ff)
        );
        assert!(ctx.is_overridden(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL));
    }

    #[test]
    fn test_last_write_wins() {
        let mut ctx = StyleContext::new();
        ctx.set(ControlId::LABEL, PropertyId::TEXT_PADDING, 1);
        ctx.set(ControlId::LABEL, PropertyId::TEXT_PADDING, 2);
        assert_eq!(ctx.get(ControlId::LABEL, PropertyId::TEXT_PADDING), 2);
        assert_eq!(ctx.override_count(), 1);
    }

    #[test]
    fn test_unknown_keys_are_stored() {
        let mut ctx = StyleContext::new();
        ctx.set(ControlId(999), PropertyId(999), 0xabcdef01);
        assert_eq!(ctx.get(ControlId(999), PropertyId(999)), 0xabcdef01);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut ctx = StyleContext::with_defaults(defaults());
        ctx.set(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT, 2);

        assert_eq!(ctx.reset(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT), Some(2));
        assert_eq!(ctx.get(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT), 1);
        assert_eq!(ctx.reset(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT), None);
    }

    #[test]
    fn test_clear_overrides() {
        let mut ctx = StyleContext::with_defaults(defaults());
        ctx.set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, 0);
        ctx.set(ControlId::BUTTON, PropertyId::BORDER_WIDTH, 2);
        ctx.clear_overrides();

        assert_eq!(ctx.override_count(), 0);
        assert_eq!(ctx.snapshot(), defaults());
    }

    #[test]
    fn test_len_counts_distinct_keys() {
        let mut ctx = StyleContext::with_defaults(defaults());
        assert_eq!(ctx.len(), 2);
        ctx.set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, 0);
        assert_eq!(ctx.len(), 2);
        ctx.set(ControlId::BUTTON, PropertyId::BORDER_WIDTH, 2);
        assert_eq!(ctx.len(), 3);
    }

    #[test]
    fn test_snapshot_merges_layers() {
        let mut ctx = StyleContext::with_defaults(defaults());
        ctx.set(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT, 0);
        ctx.set(ControlId::BUTTON, PropertyId::BORDER_WIDTH, 2);

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(ControlId::LISTVIEW, PropertyId::TEXT_ALIGNMENT), Some(0));

        ctx.set(ControlId::BUTTON, PropertyId::BORDER_WIDTH, 9);
        assert_eq!(snapshot.get(ControlId::BUTTON, PropertyId::BORDER_WIDTH), Some(2));
    }

    #[test]
    fn test_shared_defaults_between_contexts() {
        let first = StyleContext::with_defaults(defaults());
        let mut second = StyleContext::with_shared_defaults(first.shared_defaults());
        second.set(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL, 1);

        assert_eq!(
            first.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL),
            0x686868ff
        );
        assert_eq!(second.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_NORMAL), 1);
    }

    #[test]
    fn test_set_shared_propagates_base_properties() {
        let mut ctx = StyleContext::new();
        ctx.set_shared(PropertyId::TEXT_ALIGNMENT, 2);
        for control in controls() {
            assert_eq!(ctx.get(control, PropertyId::TEXT_ALIGNMENT), 2);
        }
        assert_eq!(ctx.override_count(), 16);
    }

    #[test]
    fn test_set_shared_keeps_extended_properties_on_default() {
        let mut ctx = StyleContext::new();
        ctx.set_shared(PropertyId(18), 0x90abb5ff);
        assert_eq!(ctx.get(ControlId::DEFAULT, PropertyId(18)), 0x90abb5ff);
        assert_eq!(ctx.get(ControlId::LISTVIEW, PropertyId(18)), 0);
        assert_eq!(ctx.override_count(), 1);
    }

    #[test]
    fn test_trait_objects() {
        let mut ctx = StyleContext::new();
        {
            let sink: &mut dyn StyleSink = &mut ctx;
            sink.set(ControlId::LABEL, PropertyId::TEXT_PADDING, 3);
        }
        let source: &dyn StyleSource = &ctx;
        assert_eq!(source.get(ControlId::LABEL, PropertyId::TEXT_PADDING), 3);
    }
}
