//! Hotkey definitions, canonical ids, and display formatting.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::events::KeyPress;

/// A key combination: logical key plus modifier flags.
///
/// Two combos that differ only in key case or modifier declaration order
/// are the same combination; [`KeyCombo::id`] is the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyCombo {
    /// Creates a key combo with no modifiers.
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    /// Creates a key combo with the Ctrl modifier.
    pub fn ctrl(key: &str) -> Self {
        Self::plain(key).with_ctrl()
    }

    /// Creates a key combo with the Shift modifier.
    pub fn shift(key: &str) -> Self {
        Self::plain(key).with_shift()
    }

    /// Creates a key combo with the Alt modifier.
    pub fn alt(key: &str) -> Self {
        Self::plain(key).with_alt()
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Canonical id of this combination: modifiers in fixed `ctrl, shift,
    /// alt` order, then the lower-cased key, joined with `+`.
    ///
    /// `KeyCombo::ctrl("S")` and `KeyCombo::ctrl("s")` both canonicalize to
    /// `"ctrl+s"`. The id keys uniqueness and replacement in the registry.
    pub fn id(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.shift {
            parts.push("shift");
        }
        if self.alt {
            parts.push("alt");
        }
        let key = self.key.to_lowercase();
        parts.push(&key);
        parts.join("+")
    }

    /// Whether an incoming key press matches this combination exactly.
    ///
    /// Key comparison is case-insensitive; Ctrl and Meta are
    /// interchangeable for the ctrl flag.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.key.to_lowercase() == press.key.to_lowercase()
            && self.ctrl == (press.ctrl || press.meta)
            && self.shift == press.shift
            && self.alt == press.alt
    }
}

/// Renders a combination as a human-readable label, e.g. `"Ctrl + Shift + A"`.
///
/// Modifiers keep the fixed Ctrl, Shift, Alt order. Non-printable keys map
/// through a lookup table; anything unmapped is upper-cased.
pub fn format_hotkey(combo: &KeyCombo) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    if combo.ctrl {
        parts.push("Ctrl".to_string());
    }
    if combo.shift {
        parts.push("Shift".to_string());
    }
    if combo.alt {
        parts.push("Alt".to_string());
    }

    let display = match combo.key.to_lowercase().as_str() {
        "escape" => "Esc".to_string(),
        "delete" => "Del".to_string(),
        "backspace" => "Backspace".to_string(),
        "arrowup" => "↑".to_string(),
        "arrowdown" => "↓".to_string(),
        "arrowleft" => "←".to_string(),
        "arrowright" => "→".to_string(),
        " " => "Space".to_string(),
        "/" => "/".to_string(),
        "?" => "?".to_string(),
        other => other.to_uppercase(),
    };
    parts.push(display);

    parts.join(" + ")
}

/// Handler invoked when a hotkey matches. Shared so registry snapshots can
/// be scanned without holding the registry lock.
pub type HotkeyHandler = Arc<dyn Fn() + Send + Sync>;

/// A registered hotkey: the combination, user-facing metadata for the
/// hotkeys panel, and the handler to invoke on match.
#[derive(Clone)]
pub struct Hotkey {
    pub combo: KeyCombo,
    pub description: String,
    pub category: String,
    pub handler: HotkeyHandler,
}

impl Hotkey {
    pub fn new(
        combo: KeyCombo,
        description: &str,
        category: &str,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            combo,
            description: description.to_string(),
            category: category.to_string(),
            handler: Arc::new(handler),
        }
    }
}

impl fmt::Debug for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hotkey")
            .field("combo", &self.combo)
            .field("description", &self.description)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_uses_fixed_modifier_order() {
        let combo = KeyCombo::plain("a").with_alt().with_shift().with_ctrl();
        assert_eq!(combo.id(), "ctrl+shift+alt+a");
    }

    #[test]
    fn test_id_lowercases_key() {
        assert_eq!(KeyCombo::ctrl("S").id(), "ctrl+s");
        assert_eq!(KeyCombo::ctrl("s").id(), "ctrl+s");
        assert_eq!(KeyCombo::plain("Escape").id(), "escape");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let combo = KeyCombo::ctrl("k");
        assert!(combo.matches(&KeyPress::plain("K").with_ctrl()));
        assert!(combo.matches(&KeyPress::plain("k").with_ctrl()));
    }

    #[test]
    fn test_matches_treats_meta_as_ctrl() {
        let combo = KeyCombo::ctrl("s");
        assert!(combo.matches(&KeyPress::plain("s").with_meta()));
        assert!(!combo.matches(&KeyPress::plain("s")));
    }

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let combo = KeyCombo::ctrl("s");
        assert!(!combo.matches(&KeyPress::plain("s").with_ctrl().with_shift()));
        assert!(!combo.matches(&KeyPress::plain("s").with_ctrl().with_alt()));

        let plain = KeyCombo::plain("s");
        assert!(!plain.matches(&KeyPress::plain("s").with_ctrl()));
        assert!(plain.matches(&KeyPress::plain("s")));
    }

    #[test]
    fn test_format_orders_modifiers() {
        let combo = KeyCombo::plain("a").with_alt().with_ctrl().with_shift();
        assert_eq!(format_hotkey(&combo), "Ctrl + Shift + Alt + A");
    }

    #[test]
    fn test_format_special_keys() {
        assert_eq!(format_hotkey(&KeyCombo::plain("Escape")), "Esc");
        assert_eq!(format_hotkey(&KeyCombo::plain("Delete")), "Del");
        assert_eq!(format_hotkey(&KeyCombo::plain("ArrowUp")), "↑");
        assert_eq!(format_hotkey(&KeyCombo::plain("ArrowDown")), "↓");
        assert_eq!(format_hotkey(&KeyCombo::plain("ArrowLeft")), "←");
        assert_eq!(format_hotkey(&KeyCombo::plain("ArrowRight")), "→");
        assert_eq!(format_hotkey(&KeyCombo::plain(" ")), "Space");
        assert_eq!(format_hotkey(&KeyCombo::plain("/")), "/");
        assert_eq!(format_hotkey(&KeyCombo::shift("?")), "Shift + ?");
    }

    #[test]
    fn test_format_uppercases_unmapped_keys() {
        assert_eq!(format_hotkey(&KeyCombo::ctrl("k")), "Ctrl + K");
        assert_eq!(format_hotkey(&KeyCombo::plain("Enter")), "ENTER");
    }
}
