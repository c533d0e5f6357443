//! Keyboard event matching against the registry.

use crate::events::{FocusTarget, KeyPress};
use crate::hotkeys::registry::HotkeyRegistry;

/// Outcome of dispatching one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A registered hotkey matched and its handler was invoked. The
    /// embedder must prevent the input surface's default handling and stop
    /// further propagation of the event.
    Matched { id: String },
    /// Matching was suppressed because a text-entry field has focus.
    Suppressed,
    /// No registered hotkey matched; the event is untouched.
    NoMatch,
}

impl Dispatch {
    /// Whether the embedder should consume the event (prevent default and
    /// stop propagation).
    pub fn consume(&self) -> bool {
        matches!(self, Dispatch::Matched { .. })
    }
}

/// Matches incoming key presses against a registry.
///
/// Scans registrations in registration order and fires the first exact
/// match, so at most one handler runs per event. While a text-entry field
/// has focus every combination is suppressed except a bare or modified
/// `Escape`.
#[derive(Debug, Clone)]
pub struct HotkeyMatcher {
    registry: HotkeyRegistry,
}

impl HotkeyMatcher {
    pub fn new(registry: HotkeyRegistry) -> Self {
        Self { registry }
    }

    /// Dispatches one key press.
    ///
    /// The scan runs over a snapshot of the registrations, so a handler is
    /// free to register or release hotkeys on the same registry.
    pub fn on_key_press(&self, press: &KeyPress, focus: FocusTarget) -> Dispatch {
        if focus.is_text_entry() && !press.key.eq_ignore_ascii_case("escape") {
            return Dispatch::Suppressed;
        }

        for registration in self.registry.registrations() {
            if registration.hotkey.combo.matches(press) {
                tracing::debug!("hotkey matched: {}", registration.id);
                (registration.hotkey.handler)();
                return Dispatch::Matched {
                    id: registration.id,
                };
            }
        }

        Dispatch::NoMatch
    }
}
