//! Process-wide style registry.
//!
//! Most code should own a [`StyleContext`] and pass it around. This module
//! exists for toolkits that expect one shared style state and a
//! parameterless "load this style" call during startup.
//!
//! The shared context starts from the [toolkit baseline](crate::baseline)
//! and sits behind a reader-writer lock: renderers take the read side,
//! loaders the write side. A sheet applied through [`with_style_mut`] is
//! written under a single lock, so readers never observe half a sheet.
//!
//! ```rust
//! use guistyle::{global, ControlId, PropertyId};
//!
//! global::load_style_listview();
//! assert_eq!(global::get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_FOCUSED), 0x9f9f9fff);
//! ```

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::baseline::toolkit_baseline;
use crate::context::{StyleContext, StyleSink, StyleSource};
use crate::ids::{ControlId, PropertyId};
use crate::listview;
use crate::sheet::StyleSheet;
use crate::table::StyleTable;

static GLOBAL_STYLE: Lazy<RwLock<StyleContext>> =
    Lazy::new(|| RwLock::new(StyleContext::with_defaults(toolkit_baseline())));

// Style values stay consistent even if a writer panicked mid-sheet, so a
// poisoned lock is still usable.
fn read() -> RwLockReadGuard<'static, StyleContext> {
    GLOBAL_STYLE.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, StyleContext> {
    GLOBAL_STYLE.write().unwrap_or_else(PoisonError::into_inner)
}

/// Reads one value from the shared context.
pub fn get(control: ControlId, property: PropertyId) -> u32 {
    read().get(control, property)
}

/// Writes one value into the shared context.
pub fn set(control: ControlId, property: PropertyId, value: u32) {
    write().set(control, property, value);
}

/// Runs `f` with shared read access.
///
/// The lock is held while `f` runs. Calling [`set`], [`with_style_mut`] or
/// writing through [`GlobalStyle`] from inside `f` deadlocks; use the
/// `&StyleContext` argument instead.
pub fn with_style<R>(f: impl FnOnce(&StyleContext) -> R) -> R {
    f(&*read())
}

/// Runs `f` with exclusive write access.
///
/// The lock is held while `f` runs. Any other function of this module, or
/// [`GlobalStyle`], called from inside `f` deadlocks; read and write through
/// the `&mut StyleContext` argument instead.
pub fn with_style_mut<R>(f: impl FnOnce(&mut StyleContext) -> R) -> R {
    f(&mut *write())
}

/// Applies a sheet under one write lock. Returns the number of records.
pub fn apply(sheet: &StyleSheet) -> usize {
    with_style_mut(|ctx| ctx.apply(sheet))
}

/// Loads the built-in ListView style into the shared context.
pub fn load_style_listview() {
    with_style_mut(|ctx| listview::load_style_listview(ctx));
}

/// Flattened copy of the shared context's current values.
pub fn snapshot() -> StyleTable {
    read().snapshot()
}

/// Swaps in a new shared context, returning the old one.
pub fn replace(ctx: StyleContext) -> StyleContext {
    std::mem::replace(&mut *write(), ctx)
}

/// Drops every override, returning the shared context to the baseline.
pub fn reset() {
    write().clear_overrides();
}

/// Handle to the shared context for code generic over
/// [`StyleSink`]/[`StyleSource`].
///
/// Each call takes the lock separately; prefer [`with_style_mut`] when
/// writing many values.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalStyle;

impl StyleSink for GlobalStyle {
    fn set(&mut self, control: ControlId, property: PropertyId, value: u32) {
        set(control, property, value);
    }
}

impl StyleSource for GlobalStyle {
    fn get(&self, control: ControlId, property: PropertyId) -> u32 {
        get(control, property)
    }
}
