//! Property-based tests for the style registry and loader.
//!
//! These check the registry laws over arbitrary keys and sheets: last write
//! wins, loading is a partial update, and loading twice equals loading once.

use guistyle::baseline::toolkit_baseline;
use guistyle::listview::{self, LISTVIEW_STYLE_PROPS};
use guistyle::{
    apply_sheet, ControlId, PropertyId, StyleContext, StyleProperty, StyleSheet, StyleTable,
};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = StyleProperty> {
    // small id ranges so generated sheets collide with each other
    (0u16..20, 0u16..24, any::<u32>())
        .prop_map(|(control, property, value)| StyleProperty::new(control, property, value))
}

fn arb_sheet(max: usize) -> impl Strategy<Value = StyleSheet> {
    prop::collection::vec(arb_record(), 0..max)
        .prop_map(|records| StyleSheet::from_records("generated", records))
}

fn arb_context() -> impl Strategy<Value = StyleContext> {
    (arb_sheet(40), arb_sheet(20), any::<bool>()).prop_map(|(defaults, overrides, baseline)| {
        let defaults: StyleTable = if baseline {
            let base = toolkit_baseline();
            let extra = StyleTable::from_sheet(&defaults);
            base.iter().chain(extra.iter()).collect()
        } else {
            StyleTable::from_sheet(&defaults)
        };
        let mut ctx = StyleContext::with_defaults(defaults);
        ctx.apply(&overrides);
        ctx
    })
}

proptest! {
    #[test]
    fn set_then_get_returns_value(
        mut ctx in arb_context(),
        control in any::<u16>(),
        property in any::<u16>(),
        value in any::<u32>(),
    ) {
        ctx.set(ControlId(control), PropertyId(property), value);
        prop_assert_eq!(ctx.get(ControlId(control), PropertyId(property)), value);
    }

    #[test]
    fn set_leaves_other_keys_alone(
        mut ctx in arb_context(),
        record in arb_record(),
        probe in arb_record(),
    ) {
        prop_assume!(record.key() != probe.key());
        let before = ctx.get(probe.control, probe.property);
        ctx.set(record.control, record.property, record.value);
        prop_assert_eq!(ctx.get(probe.control, probe.property), before);
    }

    #[test]
    fn last_write_wins(
        mut ctx in arb_context(),
        record in arb_record(),
        first in any::<u32>(),
    ) {
        ctx.set(record.control, record.property, first);
        ctx.set(record.control, record.property, record.value);
        prop_assert_eq!(ctx.get(record.control, record.property), record.value);
    }

    #[test]
    fn loading_is_a_partial_update(ctx in arb_context(), sheet in arb_sheet(30)) {
        let before = ctx.snapshot();
        let mut after = ctx.clone();
        let written = after.apply(&sheet);
        prop_assert_eq!(written, sheet.len());

        for (key, value) in before.iter() {
            match sheet.get(key.control, key.property) {
                Some(expected) => {
                    prop_assert_eq!(after.get_key(&key), expected);
                }
                None => {
                    prop_assert_eq!(after.get_key(&key), value);
                }
            }
        }
        for record in sheet.iter() {
            prop_assert_eq!(
                after.get(record.control, record.property),
                sheet.get(record.control, record.property).unwrap()
            );
        }
    }

    #[test]
    fn loading_twice_equals_loading_once(ctx in arb_context(), sheet in arb_sheet(30)) {
        let mut once = ctx.clone();
        once.apply(&sheet);

        let mut twice = ctx;
        twice.apply(&sheet);
        twice.apply(&sheet);

        prop_assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn reset_returns_to_default_layer(mut ctx in arb_context(), record in arb_record()) {
        ctx.set(record.control, record.property, record.value);
        ctx.reset(record.control, record.property);
        let expected = ctx
            .default_value(record.control, record.property)
            .unwrap_or(ctx.sentinel_value());
        prop_assert_eq!(ctx.get(record.control, record.property), expected);
    }

    #[test]
    fn snapshot_agrees_with_get(ctx in arb_context(), probe in arb_record()) {
        let snapshot = ctx.snapshot();
        let expected = snapshot
            .get(probe.control, probe.property)
            .unwrap_or(ctx.sentinel_value());
        prop_assert_eq!(ctx.get(probe.control, probe.property), expected);
        prop_assert_eq!(snapshot.len(), ctx.len());
    }

    #[test]
    fn listview_reads_back_and_keeps_the_rest(ctx in arb_context()) {
        let before = ctx.snapshot();
        let mut after = ctx;
        listview::load_style_listview(&mut after);

        for record in LISTVIEW_STYLE_PROPS.iter() {
            prop_assert_eq!(after.get(record.control, record.property), record.value);
        }
        let sheet = listview::listview_sheet();
        for (key, value) in before.iter() {
            if !sheet.contains(key.control, key.property) {
                prop_assert_eq!(after.get_key(&key), value);
            }
        }
    }
}

// =============================================================================
// Concrete ListView scenario
// =============================================================================

#[test]
fn test_listview_over_baseline_scenario() {
    let mut ctx = StyleContext::with_defaults(toolkit_baseline());
    listview::load_style_listview(&mut ctx);

    assert_eq!(ctx.get(ControlId(0), PropertyId(2)), 0xffffffff);
    assert_eq!(ctx.get(ControlId(0), PropertyId(5)), 0x9f9f9fff);
    assert_eq!(ctx.get(ControlId(14), PropertyId(14)), 0x00000000);
    assert_eq!(ctx.get(ControlId(12), PropertyId(14)), 0x00000000);

    // never listed: baseline survives
    assert_eq!(ctx.get(ControlId::DEFAULT, PropertyId::BORDER_WIDTH), 1);
    assert_eq!(ctx.get(ControlId::DEFAULT, PropertyId::TEXT_COLOR_DISABLED), 0xaeb7b8ff);
}

#[test]
fn test_generic_sink_loading_matches_context_apply() {
    let sheet = listview::listview_sheet();

    let mut via_apply = StyleContext::new();
    via_apply.apply(&sheet);

    let mut via_sink = StyleContext::new();
    apply_sheet(&mut via_sink, &sheet);

    assert_eq!(via_apply, via_sink);
}
