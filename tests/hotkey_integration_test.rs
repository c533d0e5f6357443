//! End-to-end hotkey scenarios: registration through dispatch, replacement,
//! scope lifetimes, and focus suppression.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glimpse_input::{
    format_hotkey, Dispatch, FocusTarget, Hotkey, HotkeyMatcher, HotkeyRegistry, KeyCombo,
    KeyPress,
};

fn counting(combo: KeyCombo, description: &str, category: &str) -> (Hotkey, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let hotkey = Hotkey::new(combo, description, category, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (hotkey, calls)
}

#[test]
fn registered_hotkey_dispatches_and_consumes_event() {
    let registry = HotkeyRegistry::new();
    let (hotkey, calls) = counting(KeyCombo::ctrl("k"), "Search images", "General");
    registry.register(hotkey);
    assert!(registry.mark_listener_attached());

    let matcher = HotkeyMatcher::new(registry.clone());
    let outcome = matcher.on_key_press(&KeyPress::plain("k").with_ctrl(), FocusTarget::General);

    assert_eq!(
        outcome,
        Dispatch::Matched {
            id: "ctrl+k".to_string()
        }
    );
    assert!(outcome.consume());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The listener hook is wired once for the process lifetime.
    assert!(!registry.mark_listener_attached());
}

#[test]
fn replacement_keeps_registry_size_and_routes_to_newest_handler() {
    let registry = HotkeyRegistry::new();
    let (first, first_calls) = counting(KeyCombo::ctrl("s"), "save", "File");
    let (second, second_calls) = counting(KeyCombo::ctrl("S"), "save v2", "File");

    registry.register(first);
    registry.register(second);
    assert_eq!(registry.len(), 1);

    let matcher = HotkeyMatcher::new(registry);
    let outcome = matcher.on_key_press(&KeyPress::plain("s").with_ctrl(), FocusTarget::General);

    assert!(outcome.consume());
    assert_eq!(first_calls.load(Ordering::SeqCst), 0);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn released_hotkey_no_longer_dispatches() {
    let registry = HotkeyRegistry::new();
    let (hotkey, calls) = counting(KeyCombo::plain("Delete"), "Delete image", "Gallery");
    let mut handle = registry.register(hotkey);

    handle.release();
    handle.release(); // double release is harmless

    let matcher = HotkeyMatcher::new(registry);
    let outcome = matcher.on_key_press(&KeyPress::plain("Delete"), FocusTarget::General);

    assert_eq!(outcome, Dispatch::NoMatch);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn scope_bound_hotkeys_die_with_their_component() {
    let registry = HotkeyRegistry::new();
    let matcher = HotkeyMatcher::new(registry.clone());
    let (hotkey, calls) = counting(KeyCombo::plain("ArrowRight"), "Next image", "Viewer");

    {
        let _scope = registry.bind_scope([hotkey]);
        let outcome = matcher.on_key_press(&KeyPress::plain("ArrowRight"), FocusTarget::General);
        assert!(outcome.consume());
    }

    // Component detached; its hotkeys must not leak.
    let outcome = matcher.on_key_press(&KeyPress::plain("ArrowRight"), FocusTarget::General);
    assert_eq!(outcome, Dispatch::NoMatch);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(registry.is_empty());
}

#[test]
fn text_entry_focus_suppresses_all_but_escape() {
    let registry = HotkeyRegistry::new();
    let (escape, escape_calls) = counting(KeyCombo::plain("Escape"), "Close dialog", "General");
    let (slash, slash_calls) = counting(KeyCombo::plain("/"), "Focus search", "General");
    registry.register(escape);
    registry.register(slash);

    let matcher = HotkeyMatcher::new(registry);

    let suppressed = matcher.on_key_press(&KeyPress::plain("/"), FocusTarget::TextEntry);
    assert_eq!(suppressed, Dispatch::Suppressed);
    assert_eq!(slash_calls.load(Ordering::SeqCst), 0);

    let escaped = matcher.on_key_press(&KeyPress::plain("Escape"), FocusTarget::TextEntry);
    assert!(escaped.consume());
    assert_eq!(escape_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn panel_listing_groups_by_category_with_display_labels() {
    let registry = HotkeyRegistry::new();
    registry.register_many([
        Hotkey::new(KeyCombo::ctrl("u"), "Upload images", "Gallery", || {}),
        Hotkey::new(KeyCombo::plain("Delete"), "Delete image", "Gallery", || {}),
        Hotkey::new(KeyCombo::plain("?"), "Show hotkeys", "General", || {}),
    ]);

    registry.toggle_panel();
    assert!(registry.is_panel_visible());

    let grouped = registry.hotkeys_by_category();
    let labels: Vec<String> = grouped["Gallery"]
        .iter()
        .map(|h| format_hotkey(&h.combo))
        .collect();
    assert_eq!(labels, vec!["Ctrl + U", "Del"]);
    assert_eq!(format_hotkey(&grouped["General"][0].combo), "?");

    registry.hide_panel();
    assert!(!registry.is_panel_visible());
}
