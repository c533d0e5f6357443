//! Abstract input event types consumed by the interaction core.
//!
//! The core never talks to a windowing system or browser directly. The
//! embedding UI subscribes to its own low-level input plumbing and forwards
//! events to the core as the plain types defined here:
//!
//! - [`PointerEvent`] - one step of a contact session lifecycle
//! - [`KeyPress`] - a keyboard event with modifier flags
//! - [`FocusTarget`] - whether a text-entry field currently has focus
//! - [`InputSurface`] - the scroll-position probe pull-to-refresh needs
//!
//! Pointer events carry the delivery [`Instant`] so timing rules (the swipe
//! time budget) are deterministic under test; embedding code passes
//! `Instant::now()` at delivery time.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A point on the input surface, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One step of a pointer contact lifecycle.
///
/// `contacts` is the number of simultaneous contact points at delivery time;
/// gesture tracking only engages single-contact sessions.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// First contact of a session.
    Down {
        position: Point,
        contacts: u8,
        at: Instant,
    },
    /// Contact moved while held down.
    Move {
        position: Point,
        contacts: u8,
        at: Instant,
    },
    /// Contact released.
    Up { position: Point, at: Instant },
    /// Session aborted by the input system (e.g. contact left the surface).
    Cancel,
}

/// A keyboard event as delivered by the embedding keyboard source.
///
/// `key` is the logical key identity ("k", "Escape", "ArrowUp", " ");
/// matching is case-insensitive. `meta` is kept separate from `ctrl` so the
/// matcher can treat them as interchangeable for the ctrl flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyPress {
    /// Creates a key press with no modifiers.
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
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

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Where keyboard focus currently sits, from the matcher's point of view.
///
/// Hotkey matching is suppressed while a text-entry field has focus, with
/// the single exception of `Escape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusTarget {
    /// Focus is on a non-editing element; hotkeys dispatch normally.
    #[default]
    General,
    /// Focus is on an input, textarea, or content-editable element.
    TextEntry,
}

impl FocusTarget {
    pub fn is_text_entry(&self) -> bool {
        matches!(self, FocusTarget::TextEntry)
    }
}

/// Scroll-position probe for the surface a gesture controller is attached to.
///
/// Pull-to-refresh only engages when the surface is scrolled to the very top
/// at contact start; everything else about the surface stays opaque to the
/// core.
pub trait InputSurface: Send + Sync {
    /// Current vertical scroll offset of the surface, in logical units.
    fn scroll_offset(&self) -> f64;

    /// Whether the surface is scrolled to the top.
    fn at_top(&self) -> bool {
        self.scroll_offset() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_builders() {
        let press = KeyPress::plain("k").with_ctrl().with_shift();
        assert_eq!(press.key, "k");
        assert!(press.ctrl);
        assert!(press.shift);
        assert!(!press.alt);
        assert!(!press.meta);
    }

    #[test]
    fn test_focus_target_default_is_general() {
        assert_eq!(FocusTarget::default(), FocusTarget::General);
        assert!(!FocusTarget::General.is_text_entry());
        assert!(FocusTarget::TextEntry.is_text_entry());
    }

    #[test]
    fn test_at_top_uses_scroll_offset() {
        struct Fixed(f64);
        impl InputSurface for Fixed {
            fn scroll_offset(&self) -> f64 {
                self.0
            }
        }

        assert!(Fixed(0.0).at_top());
        assert!(!Fixed(12.5).at_top());
    }
}
