//! Swipe-to-delete tracking.
//!
//! Single-axis drag tracker for list rows: only leftward drag accumulates
//! offset, clamped just past the deletion threshold so the row visually
//! resists. Release past the threshold fires the delete handler exactly
//! once; the offset resets on every release or cancel regardless of
//! outcome.

use crate::events::Point;

/// Extra travel allowed past the threshold before the offset clamps.
const OVERDRAG: f64 = 20.0;

/// Configuration for swipe-to-delete.
#[derive(Debug, Clone, Copy)]
pub struct SwipeDeleteConfig {
    /// Drag distance at which release fires the delete handler.
    pub threshold: f64,
}

impl Default for SwipeDeleteConfig {
    fn default() -> Self {
        Self { threshold: 80.0 }
    }
}

/// Tracks a horizontal drag against a deletion threshold.
pub struct SwipeToDeleteController {
    threshold: f64,
    on_delete: Box<dyn FnMut() + Send>,
    start_x: f64,
    offset: f64,
    swiping: bool,
}

impl SwipeToDeleteController {
    pub fn new(config: SwipeDeleteConfig, on_delete: impl FnMut() + Send + 'static) -> Self {
        Self {
            threshold: config.threshold,
            on_delete: Box::new(on_delete),
            start_x: 0.0,
            offset: 0.0,
            swiping: false,
        }
    }

    /// Current drag offset, non-negative, clamped to threshold + overdrag.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether a drag is in progress.
    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    /// Handles contact start. Multi-contact starts are ignored.
    pub fn touch_start(&mut self, position: Point, contacts: u8) {
        if contacts != 1 {
            return;
        }
        self.start_x = position.x;
        self.swiping = true;
    }

    /// Handles contact movement. Only leftward drag (current left of start)
    /// accumulates offset; rightward movement resets it to zero.
    pub fn touch_move(&mut self, position: Point, contacts: u8) {
        if !self.swiping || contacts != 1 {
            return;
        }
        let delta = self.start_x - position.x;
        self.offset = delta.max(0.0).min(self.threshold + OVERDRAG);
    }

    /// Handles contact release. Fires the delete handler iff the offset
    /// reached the threshold; the offset resets either way.
    pub fn touch_end(&mut self) {
        if !self.swiping {
            return;
        }
        self.swiping = false;

        if self.offset >= self.threshold {
            tracing::debug!("swipe-to-delete threshold reached; firing delete handler");
            (self.on_delete)();
        }
        self.offset = 0.0;
    }

    /// Handles contact cancellation: resets without firing the handler.
    pub fn touch_cancel(&mut self) {
        self.swiping = false;
        self.offset = 0.0;
    }
}

impl std::fmt::Debug for SwipeToDeleteController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeToDeleteController")
            .field("threshold", &self.threshold)
            .field("offset", &self.offset)
            .field("swiping", &self.swiping)
            .finish_non_exhaustive()
    }
}
