//! Global hotkey registration and dispatch.
//!
//! Keyboard shortcuts follow a registry pattern instead of inline key
//! handling scattered through view code:
//!
//! ```text
//! KeyPress -> HotkeyMatcher::on_key_press() -> Dispatch -> handler invocation
//!                       |
//!                       +-- HotkeyRegistry (registration order, replacement by id)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use glimpse_input::hotkeys::{Hotkey, HotkeyMatcher, HotkeyRegistry, KeyCombo};
//!
//! let registry = HotkeyRegistry::new();
//! let _scope = registry.bind_scope([
//!     Hotkey::new(KeyCombo::ctrl("u"), "Upload images", "Gallery", || open_upload()),
//!     Hotkey::new(KeyCombo::plain("?"), "Show hotkeys", "General", || toggle_help()),
//! ]);
//!
//! let matcher = HotkeyMatcher::new(registry.clone());
//! // In the keyboard event hook:
//! if matcher.on_key_press(&press, focus).consume() {
//!     // prevent default handling, stop propagation
//! }
//! ```
//!
//! # Modules
//!
//! - [`definition`] - [`Hotkey`], [`KeyCombo`], canonical ids, display formatting
//! - [`registry`] - the owned [`HotkeyRegistry`] service and release tokens
//! - [`matcher`] - first-match dispatch with input-focus suppression

pub mod definition;
pub mod matcher;
pub mod registry;

pub use definition::{format_hotkey, Hotkey, HotkeyHandler, KeyCombo};
pub use matcher::{Dispatch, HotkeyMatcher};
pub use registry::{
    HotkeyRegistry, HotkeyScope, Registration, RegistrationHandle, RegistrationSet,
};
