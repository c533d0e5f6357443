//! glimpse-input - interaction classification for the Glimpse image-hosting
//! client.
//!
//! This crate is the client's interaction-classification core: it turns
//! low-level pointer and keyboard events into classified gestures (swipes,
//! pull-to-refresh, swipe-to-delete) and dispatched hotkeys. It owns the
//! state machines and the timing/threshold rules; rendering, networking,
//! persistence, and routing stay in the embedding application and are
//! reached only through caller-supplied handlers.
//!
//! All classification runs on the UI's single event-processing thread in
//! delivery order. The one suspension point is the asynchronous refresh
//! task driven by pull-to-refresh, which is spawned on the tokio runtime
//! and observed to settlement without blocking event processing.

pub mod error;
pub mod events;
pub mod gesture;
pub mod hotkeys;

pub use error::{InputError, InputResult};
pub use events::{FocusTarget, InputSurface, KeyPress, Point, PointerEvent};
pub use gesture::{
    GestureConfig, GestureController, GestureEvent, PullStatus, PullToRefreshController,
    SwipeDeleteConfig, SwipeDirection, SwipeToDeleteController,
};
pub use hotkeys::{format_hotkey, Dispatch, Hotkey, HotkeyMatcher, HotkeyRegistry, KeyCombo};
